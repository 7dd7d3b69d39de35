//! Entities decoded from Untappd APIv4 responses
//!
//! Field names follow the Rust side; `serde` renames map them onto the wire
//! names Untappd uses. Most fields default when absent because compact
//! responses and objects embedded in checkins carry only a subset.

use chrono::{DateTime, FixedOffset};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An Untappd user
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    /// Numeric user ID
    #[serde(rename = "uid")]
    pub id: u64,
    /// Login name
    #[serde(default)]
    pub user_name: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Free-form location from the profile
    #[serde(default)]
    pub location: String,
    /// Profile biography
    #[serde(default)]
    pub bio: String,
    /// Profile link
    #[serde(default)]
    pub url: String,
    /// Activity totals; zero unless the full profile was requested
    #[serde(default)]
    pub stats: Stats,
}

/// Activity totals for a [`User`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Stats {
    /// Number of checkins
    #[serde(default)]
    pub total_checkins: u64,
    /// Number of badges earned
    #[serde(default)]
    pub total_badges: u64,
    /// Number of distinct beers
    #[serde(default)]
    pub total_beers: u64,
    /// Number of friends
    #[serde(default)]
    pub total_friends: u64,
}

/// A user-logged drink of a specific beer
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Checkin {
    /// Numeric checkin ID
    #[serde(rename = "checkin_id")]
    pub id: u64,
    /// When the checkin happened
    #[serde(rename = "created_at", default, deserialize_with = "rfc2822")]
    pub created: Option<DateTime<FixedOffset>>,
    /// Free-text comment left with the checkin
    #[serde(rename = "checkin_comment", default)]
    pub comment: String,
    /// Rating given by the user, 0 when unrated
    #[serde(rename = "rating_score", default)]
    pub rating: f64,
    /// User who checked in
    #[serde(default)]
    pub user: User,
    /// Beer checked in
    #[serde(default)]
    pub beer: Beer,
    /// Brewery of the beer
    #[serde(default)]
    pub brewery: Brewery,
    /// Venue, when the checkin was tagged with one
    #[serde(default, deserialize_with = "object_or_empty")]
    pub venue: Option<Venue>,
    /// Badges earned by this checkin
    #[serde(default, deserialize_with = "items")]
    pub badges: Vec<Badge>,
    /// Toasts from other users
    #[serde(default, deserialize_with = "items")]
    pub toasts: Vec<Toast>,
    /// Comments from other users
    #[serde(default, deserialize_with = "items")]
    pub comments: Vec<Comment>,
}

/// A "toast" (like) on a [`Checkin`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Toast {
    /// Numeric toast ID
    #[serde(rename = "like_id")]
    pub id: u64,
    /// User who toasted
    #[serde(default)]
    pub user: User,
    /// When the toast was given
    #[serde(rename = "created_at", default, deserialize_with = "rfc2822")]
    pub created: Option<DateTime<FixedOffset>>,
}

/// A comment on a [`Checkin`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    /// Numeric comment ID
    #[serde(rename = "comment_id")]
    pub id: u64,
    /// Comment text
    #[serde(default)]
    pub comment: String,
    /// Author
    #[serde(default)]
    pub user: User,
    /// When the comment was posted
    #[serde(rename = "created_at", default, deserialize_with = "rfc2822")]
    pub created: Option<DateTime<FixedOffset>>,
}

/// A beer
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Beer {
    /// Numeric beer ID
    #[serde(rename = "bid")]
    pub id: u64,
    /// Beer name
    #[serde(rename = "beer_name", default)]
    pub name: String,
    /// Label image URL
    #[serde(rename = "beer_label", default)]
    pub label: String,
    /// Style, e.g. "American IPA"
    #[serde(rename = "beer_style", default)]
    pub style: String,
    /// Brewer's description
    #[serde(rename = "beer_description", default)]
    pub description: String,
    /// Alcohol by volume, in percent
    #[serde(rename = "beer_abv", default)]
    pub abv: f64,
    /// International bitterness units
    #[serde(rename = "beer_ibu", default)]
    pub ibu: u32,
    /// Brewery; list endpoints carry it beside the beer instead of inside
    #[serde(default)]
    pub brewery: Brewery,
}

/// A brewery
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Brewery {
    /// Numeric brewery ID
    #[serde(rename = "brewery_id")]
    pub id: u64,
    /// Brewery name
    #[serde(rename = "brewery_name", default)]
    pub name: String,
    /// Label image URL
    #[serde(rename = "brewery_label", default)]
    pub label: String,
    /// Country name
    #[serde(rename = "country_name", default)]
    pub country: String,
    /// City and state, when known
    #[serde(default, deserialize_with = "object_or_empty")]
    pub location: Option<BreweryLocation>,
}

/// Where a [`Brewery`] is
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BreweryLocation {
    /// City
    #[serde(rename = "brewery_city", default)]
    pub city: String,
    /// State or region
    #[serde(rename = "brewery_state", default)]
    pub state: String,
    /// Latitude
    #[serde(default)]
    pub lat: f64,
    /// Longitude
    #[serde(default)]
    pub lng: f64,
}

/// An achievement awarded to a user
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Badge {
    /// Numeric badge ID
    #[serde(rename = "badge_id")]
    pub id: u64,
    /// Badge name
    #[serde(rename = "badge_name", default)]
    pub name: String,
    /// What the badge is awarded for
    #[serde(rename = "badge_description", default)]
    pub description: String,
    /// Checkin which earned the badge
    #[serde(default)]
    pub checkin_id: u64,
    /// When the badge was earned
    #[serde(rename = "created_at", default, deserialize_with = "rfc2822")]
    pub earned: Option<DateTime<FixedOffset>>,
    /// Tiers of a levelled badge, same shape as the badge itself
    #[serde(default, deserialize_with = "items")]
    pub levels: Vec<Badge>,
}

/// A place where checkins happen
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Venue {
    /// Numeric venue ID
    #[serde(rename = "venue_id")]
    pub id: u64,
    /// Venue name
    #[serde(rename = "venue_name", default)]
    pub name: String,
    /// Primary category, e.g. "Nightlife Spot"
    #[serde(rename = "primary_category", default)]
    pub category: String,
    /// Whether the venue is public
    #[serde(rename = "public_venue", default)]
    pub public: bool,
    /// Address of the venue
    #[serde(default)]
    pub location: VenueLocation,
}

/// Where a [`Venue`] is
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VenueLocation {
    /// Street address
    #[serde(rename = "venue_address", default)]
    pub address: String,
    /// City
    #[serde(rename = "venue_city", default)]
    pub city: String,
    /// State or region
    #[serde(rename = "venue_state", default)]
    pub state: String,
    /// Country
    #[serde(rename = "venue_country", default)]
    pub country: String,
    /// Latitude
    #[serde(default)]
    pub lat: f64,
    /// Longitude
    #[serde(default)]
    pub lng: f64,
}

/// Untappd's `{"count": n, "items": [...]}` collection wrapper
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub(crate) struct Items<T> {
    #[serde(default)]
    pub items: Vec<T>,
}

/// Unwrap an [`Items`] collection, treating `[]` as empty
fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(object_or_empty::<D, Items<T>>(deserializer)?.map_or_else(Vec::new, |i| i.items))
}

/// Untappd sends `[]` in place of an absent object
fn object_or_empty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) if items.is_empty() => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

/// Parse timestamps like `Sat, 21 Aug 2010 21:50:29 +0000`
fn rfc2822<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc2822(s)
            .map(Some)
            .map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_checkin_decodes_nested_collections() {
        let raw = json!({
            "checkin_id": 610_233_546,
            "created_at": "Sat, 08 Aug 2015 19:54:50 +0000",
            "checkin_comment": "Crisp.",
            "rating_score": 3.75,
            "user": {"uid": 1, "user_name": "gregavola"},
            "beer": {"bid": 16630, "beer_name": "Pilsner Urquell", "beer_abv": 4.4},
            "brewery": {"brewery_id": 1, "brewery_name": "Plzeňský Prazdroj", "country_name": "Czech Republic"},
            "venue": [],
            "comments": {"count": 1, "items": [{"comment_id": 9, "comment": "Cheers", "user": {"uid": 2}}]},
            "toasts": {"count": 2, "items": [{"like_id": 7, "user": {"uid": 3}}, {"like_id": 8, "user": {"uid": 4}}]},
            "badges": {"count": 0, "items": []}
        });

        let checkin: Checkin = serde_json::from_value(raw).unwrap();
        assert_eq!(checkin.id, 610_233_546);
        assert_eq!(checkin.beer.name, "Pilsner Urquell");
        assert!(checkin.venue.is_none());
        assert_eq!(checkin.comments.len(), 1);
        assert_eq!(checkin.toasts.len(), 2);
        assert!(checkin.badges.is_empty());
        assert_eq!(
            checkin.created.map(|d| d.format("%Y-%m-%d").to_string()),
            Some("2015-08-08".to_string())
        );
    }

    #[test]
    fn test_brewery_location_empty_array_is_none() {
        let brewery: Brewery = serde_json::from_value(json!({
            "brewery_id": 5,
            "brewery_name": "Nameless",
            "country_name": "Nowhere",
            "location": []
        }))
        .unwrap();
        assert!(brewery.location.is_none());
    }

    #[test]
    fn test_badge_levels_decode_one_level() {
        let badge: Badge = serde_json::from_value(json!({
            "badge_id": 1,
            "badge_name": "Hopped Up",
            "checkin_id": 100,
            "created_at": "Tue, 01 Sep 2015 00:00:00 +0000",
            "levels": {"count": 1, "items": [{"badge_id": 2, "badge_name": "Hopped Up (Level 2)"}]}
        }))
        .unwrap();
        assert_eq!(badge.levels.len(), 1);
        assert_eq!(badge.levels[0].name, "Hopped Up (Level 2)");
        assert!(badge.levels[0].levels.is_empty());
    }

    #[test]
    fn test_bad_timestamp_is_an_error() {
        let result = serde_json::from_value::<Badge>(json!({
            "badge_id": 1,
            "created_at": "yesterday"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_items_of_types_without_default() {
        let page: Items<Checkin> = serde_json::from_value(json!({
            "count": 1,
            "items": [{"checkin_id": 3}]
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 3);

        let empty: Items<Checkin> = serde_json::from_value(json!({"count": 0})).unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_null_venue_is_none() {
        let checkin: Checkin =
            serde_json::from_value(json!({"checkin_id": 1, "venue": null})).unwrap();
        assert!(checkin.venue.is_none());
    }
}
