//! Sort orders accepted by the Untappd list and search endpoints

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Ordering requested from the server for beer lists and searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Most recently added first
    Date,
    /// Most checked in first
    Checkin,
    /// Highest global rating first
    HighestRated,
    /// Lowest global rating first
    LowestRated,
    /// Highest rating by the queried user first
    HighestRatedYou,
    /// Lowest rating by the queried user first
    LowestRatedYou,
    /// Strongest first
    HighestAbv,
    /// Weakest first
    LowestAbv,
    /// Alphabetical (search only)
    Name,
}

impl Sort {
    /// Every sort order, in the order they are listed to users
    pub const ALL: [Self; 9] = [
        Self::Date,
        Self::Checkin,
        Self::HighestRated,
        Self::LowestRated,
        Self::HighestRatedYou,
        Self::LowestRatedYou,
        Self::HighestAbv,
        Self::LowestAbv,
        Self::Name,
    ];

    /// Wire token sent as the `sort` query parameter
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Checkin => "checkin",
            Self::HighestRated => "highest_rated",
            Self::LowestRated => "lowest_rated",
            Self::HighestRatedYou => "highest_rated_you",
            Self::LowestRatedYou => "lowest_rated_you",
            Self::HighestAbv => "highest_abv",
            Self::LowestAbv => "lowest_abv",
            Self::Name => "name",
        }
    }

    /// Comma separated list of every valid token
    #[must_use]
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sort {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or_else(|| Error::InvalidSort {
                given: s.to_string(),
                options: Self::options(),
            })
    }
}

/// Resolve paging and ordering parameters as accepted by the Untappd API.
///
/// An empty sort leaves ordering to the server. Anything else must match one
/// of [`Sort::ALL`] exactly.
///
/// # Errors
///
/// Returns [`Error::InvalidSort`] listing the valid tokens when `sort` is
/// neither empty nor a known token.
pub fn offset_limit_sort(offset: u32, limit: u32, sort: &str) -> Result<(u32, u32, Option<Sort>)> {
    if sort.is_empty() {
        return Ok((offset, limit, None));
    }

    let sort = sort.parse::<Sort>()?;
    Ok((offset, limit, Some(sort)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_valid_sort_is_returned_unchanged() {
        for sort in Sort::ALL {
            let (offset, limit, got) = offset_limit_sort(5, 10, sort.as_str()).unwrap();
            assert_eq!((offset, limit), (5, 10));
            assert_eq!(got, Some(sort));
        }
    }

    #[test]
    fn test_empty_sort_skips_validation() {
        assert_eq!(offset_limit_sort(0, 25, "").unwrap(), (0, 25, None));
    }

    #[test]
    fn test_invalid_sort_lists_options() {
        let err = offset_limit_sort(0, 25, "best").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("\"best\""));
        for sort in Sort::ALL {
            assert!(msg.contains(sort.as_str()), "missing {sort} in {msg}");
        }
    }

    #[test]
    fn test_sort_match_is_case_sensitive() {
        assert!(offset_limit_sort(0, 25, "Date").is_err());
        assert!(offset_limit_sort(0, 25, "highest").is_err());
    }
}
