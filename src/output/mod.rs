//! Tabular rendering of Untappd entities
//!
//! One function per entity type. Each builds a header row followed by one
//! row per entity, lays the columns out with `tabled` and writes the whole
//! table at once; nothing reaches the writer until the table is complete.

use crate::error::Result;
use crate::model::{Badge, Beer, Brewery, Checkin, User, Venue};
use chrono::{DateTime, FixedOffset};
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::object::Segment;
use tabled::settings::{Padding, Style};

/// Spaces between the widest cell of a column and the next column
const COLUMN_GAP: usize = 2;

/// Print badges, each immediately followed by its levels
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the table cannot be written or flushed.
pub fn print_badges<W: Write>(w: W, badges: &[Badge]) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Earned", "CheckinID"]);

    let mut row = |b: &Badge| {
        builder.push_record([
            b.id.to_string(),
            b.name.clone(),
            date(b.earned),
            b.checkin_id.to_string(),
        ]);
    };
    for badge in badges {
        row(badge);
        for level in &badge.levels {
            row(level);
        }
    }

    write_table(w, builder)
}

/// Print beers with their brewery, style, ABV and IBU
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the table cannot be written or flushed.
pub fn print_beers<W: Write>(w: W, beers: &[Beer]) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Brewery", "Style", "ABV", "IBU"]);

    for b in beers {
        builder.push_record([
            b.id.to_string(),
            b.name.clone(),
            b.brewery.name.clone(),
            b.style.clone(),
            format!("{:.1}", b.abv),
            format!("{:03}", b.ibu),
        ]);
    }

    write_table(w, builder)
}

/// Print breweries with their location
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the table cannot be written or flushed.
pub fn print_breweries<W: Write>(w: W, breweries: &[Brewery]) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Location"]);

    for b in breweries {
        builder.push_record([b.id.to_string(), b.name.clone(), brewery_location(b)]);
    }

    write_table(w, builder)
}

/// Print checkins with rating and activity counts
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the table cannot be written or flushed.
pub fn print_checkins<W: Write>(w: W, checkins: &[Checkin]) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record([
        "ID", "Name", "Brewery", "Rating", "Badges", "Toasts", "Comments", "Comment",
    ]);

    for c in checkins {
        builder.push_record([
            c.id.to_string(),
            c.beer.name.clone(),
            c.brewery.name.clone(),
            format!("{:.2}", c.rating),
            c.badges.len().to_string(),
            c.toasts.len().to_string(),
            c.comments.len().to_string(),
            c.comment.clone(),
        ]);
    }

    write_table(w, builder)
}

/// Print users; `info` adds checkin, badge and beer totals
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the table cannot be written or flushed.
pub fn print_users<W: Write>(w: W, users: &[User], info: bool) -> Result<()> {
    let mut builder = Builder::default();

    let mut header = vec!["ID", "UserName", "Name"];
    if info {
        header.extend(["Checkins", "Badges", "Beers"]);
    }
    builder.push_record(header);

    for u in users {
        let mut record = vec![
            u.id.to_string(),
            u.user_name.clone(),
            format!("{} {}", u.first_name, u.last_name),
        ];
        if info {
            record.extend([
                u.stats.total_checkins.to_string(),
                u.stats.total_badges.to_string(),
                u.stats.total_beers.to_string(),
            ]);
        }
        builder.push_record(record);
    }

    write_table(w, builder)
}

/// Print venues with category, visibility and location
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the table cannot be written or flushed.
pub fn print_venues<W: Write>(w: W, venues: &[Venue]) -> Result<()> {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Name", "Category", "Public", "Location"]);

    for v in venues {
        builder.push_record([
            v.id.to_string(),
            v.name.clone(),
            v.category.clone(),
            v.public.to_string(),
            format!(
                "{}, {}, {}",
                v.location.city, v.location.state, v.location.country
            ),
        ]);
    }

    write_table(w, builder)
}

/// Lay out `builder` as borderless, left-aligned columns and write it in one piece
fn write_table<W: Write>(mut w: W, builder: Builder) -> Result<()> {
    let mut table = builder.build();
    let _ = table
        .with(Style::empty())
        .modify(Segment::all(), Padding::new(0, COLUMN_GAP, 0, 0));

    // The last column is padded like the rest; drop it so rows end at their text.
    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }

    w.write_all(out.as_bytes())?;
    w.flush()?;
    Ok(())
}

/// Country alone, or "city, state, country" when both city and state are known
#[must_use]
pub fn brewery_location(brewery: &Brewery) -> String {
    match &brewery.location {
        Some(loc) if !loc.city.is_empty() && !loc.state.is_empty() => {
            format!("{}, {}, {}", loc.city, loc.state, brewery.country)
        }
        _ => brewery.country.clone(),
    }
}

fn date(d: Option<DateTime<FixedOffset>>) -> String {
    d.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BreweryLocation, Stats};

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn brewery(city: &str, state: &str) -> Brewery {
        Brewery {
            id: 1,
            name: "Brewery".to_string(),
            country: "United States".to_string(),
            location: Some(BreweryLocation {
                city: city.to_string(),
                state: state.to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn badge(id: u64, name: &str, levels: Vec<Badge>) -> Badge {
        Badge {
            id,
            name: name.to_string(),
            description: String::new(),
            checkin_id: id * 10,
            earned: DateTime::parse_from_rfc2822("Sat, 08 Aug 2015 19:54:50 +0000").ok(),
            levels,
        }
    }

    #[test]
    fn test_brewery_location_short_form() {
        assert_eq!(brewery_location(&brewery("", "")), "United States");
        assert_eq!(brewery_location(&brewery("Boston", "")), "United States");

        let no_location = Brewery {
            country: "Belgium".to_string(),
            ..Default::default()
        };
        assert_eq!(brewery_location(&no_location), "Belgium");
    }

    #[test]
    fn test_brewery_location_long_form() {
        assert_eq!(
            brewery_location(&brewery("Boston", "MA")),
            "Boston, MA, United States"
        );
    }

    #[test]
    fn test_badge_levels_follow_their_badge() {
        let badges = vec![
            badge(1, "Alpha", vec![badge(2, "Alpha L2", vec![]), badge(3, "Alpha L3", vec![])]),
            badge(4, "Beta", vec![]),
        ];
        let out = render(|w| print_badges(w, &badges));

        let ids: Vec<&str> = out
            .lines()
            .skip(1)
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(ids, ["1", "2", "3", "4"]);
        assert_eq!(
            out.lines().nth(2).unwrap(),
            "2   Alpha L2  2015-08-08  20"
        );
    }

    #[test]
    fn test_user_info_adds_three_columns() {
        let users = vec![User {
            id: 1,
            user_name: "mdlayher".to_string(),
            first_name: "Matt".to_string(),
            last_name: "Layher".to_string(),
            stats: Stats {
                total_checkins: 10,
                total_badges: 5,
                total_beers: 8,
                total_friends: 2,
            },
            ..Default::default()
        }];

        let brief = render(|w| print_users(w, &users, false));
        let full = render(|w| print_users(w, &users, true));

        let columns = |s: &str| s.lines().next().unwrap().split_whitespace().count();
        assert_eq!(columns(&full), columns(&brief) + 3);
        for label in ["Checkins", "Badges", "Beers"] {
            assert!(!brief.contains(label));
            assert!(full.contains(label));
        }
        assert!(!brief.contains("10"));
    }

    #[test]
    fn test_beer_number_formatting() {
        let beers = vec![Beer {
            id: 7,
            name: "Pils".to_string(),
            style: "Pilsner".to_string(),
            abv: 4.7,
            ibu: 7,
            ..Default::default()
        }];
        let out = render(|w| print_beers(w, &beers));
        let row = out.lines().nth(1).unwrap();
        assert!(row.contains("  4.7  "), "{row}");
        assert!(row.ends_with("007"), "{row}");
    }

    #[test]
    fn test_checkin_rating_has_two_decimals() {
        let checkins: Vec<Checkin> = serde_json::from_str(
            r#"[{"checkin_id": 1, "rating_score": 3.5, "checkin_comment": "nice",
                 "beer": {"bid": 2, "beer_name": "Pils"},
                 "brewery": {"brewery_id": 3, "brewery_name": "Brew"},
                 "toasts": {"count": 1, "items": [{"like_id": 4}]}}]"#,
        )
        .unwrap();
        let out = render(|w| print_checkins(w, &checkins));
        assert_eq!(
            out,
            "ID  Name  Brewery  Rating  Badges  Toasts  Comments  Comment\n\
             1   Pils  Brew     3.50    0       1       0         nice\n"
        );
    }

    #[test]
    fn test_venue_location_is_long_form() {
        let venue: Venue = serde_json::from_str(
            r#"{"venue_id": 9, "venue_name": "Bar", "primary_category": "Nightlife Spot",
                "public_venue": true,
                "location": {"venue_city": "Austin", "venue_state": "TX", "venue_country": "United States"}}"#,
        )
        .unwrap();
        let out = render(|w| print_venues(w, std::slice::from_ref(&venue)));
        assert!(out.ends_with("true    Austin, TX, United States\n"), "{out}");
    }

    #[test]
    fn test_wide_characters_align_by_display_width() {
        let breweries = vec![
            Brewery {
                id: 1,
                name: "ビール".to_string(),
                country: "Japan".to_string(),
                ..Default::default()
            },
            Brewery {
                id: 22,
                name: "ab".to_string(),
                country: "US".to_string(),
                ..Default::default()
            },
        ];
        let out = render(|w| print_breweries(w, &breweries));
        assert_eq!(
            out,
            "ID  Name    Location\n\
             1   ビール  Japan\n\
             22  ab      US\n"
        );
    }

    #[test]
    fn test_trailing_empty_cell_leaves_no_padding() {
        let checkins: Vec<Checkin> =
            serde_json::from_str(r#"[{"checkin_id": 1, "beer": {"bid": 2, "beer_name": "Pils"}}]"#)
                .unwrap();
        let out = render(|w| print_checkins(w, &checkins));
        assert!(out.lines().all(|l| l == l.trim_end()), "{out:?}");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_write_failure_is_returned() {
        let users = vec![User {
            id: 1,
            user_name: "mdlayher".to_string(),
            ..Default::default()
        }];
        let err = print_users(ClosedPipe, &users, true).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)), "{err}");
    }
}
