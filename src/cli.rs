//! Command-line interface argument parsing
//!
//! Defines all CLI commands and their arguments using Clap.

use crate::config::{Config, DEFAULT_LIMIT, DEFAULT_MAX_ID};
use crate::error::Result;
use crate::sort::{offset_limit_sort, Sort};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// untappdctl - query and display information from Untappd APIv4
#[derive(Parser, Debug)]
#[command(name = "untappdctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "query and display information from Untappd APIv4")]
#[command(long_about = concat!(
    "untappdctl (v", env!("CARGO_PKG_VERSION"), ")\n",
    "Query and display information from Untappd APIv4.\n\n",
    "Tables are written to stdout; diagnostics and the remaining rate limit\n",
    "are written to stderr, so output can be piped safely."
))]
pub struct Cli {
    /// Client ID parameter for Untappd APIv4
    #[arg(long = "client_id", env = "UNTAPPD_ID", global = true, hide_env_values = true)]
    pub client_id: Option<String>,

    /// Client secret parameter for Untappd APIv4
    #[arg(long = "client_secret", env = "UNTAPPD_SECRET", global = true, hide_env_values = true)]
    pub client_secret: Option<String>,

    /// Config file (default: ~/.config/untappdctl/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands, one per resource family
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query for information about a user
    #[command(display_order = 1)]
    User {
        /// Subcommand to run
        #[command(subcommand)]
        command: UserCommand,
    },

    /// Query for information about a beer
    #[command(display_order = 2)]
    Beer {
        /// Subcommand to run
        #[command(subcommand)]
        command: BeerCommand,
    },

    /// Query for information about a brewery
    #[command(display_order = 3)]
    Brewery {
        /// Subcommand to run
        #[command(subcommand)]
        command: BreweryCommand,
    },

    /// Query for information about a venue
    #[command(display_order = 4)]
    Venue {
        /// Subcommand to run
        #[command(subcommand)]
        command: VenueCommand,
    },

    /// Query for activity near a location
    #[command(display_order = 5)]
    Local {
        /// Subcommand to run
        #[command(subcommand)]
        command: LocalCommand,
    },
}

/// `user` subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Show a user's profile
    ///
    /// Examples:
    ///   untappdctl user info mdlayher
    ///   untappdctl user info --info mdlayher
    Info {
        /// Username to look up
        username: String,

        /// Include checkin, badge and beer totals
        #[arg(short, long)]
        info: bool,
    },

    /// List a user's friends
    Friends {
        /// Username to look up
        username: String,

        /// Paging flags
        #[command(flatten)]
        page: OffsetLimit,
    },

    /// List badges a user has earned, including badge levels
    Badges {
        /// Username to look up
        username: String,

        /// Paging flags
        #[command(flatten)]
        page: OffsetLimit,
    },

    /// List distinct beers a user has had
    Beers {
        /// Username to look up
        username: String,

        /// Paging flags
        #[command(flatten)]
        page: OffsetLimitSort,
    },

    /// List beers on a user's wish list
    #[command(visible_alias = "wish-list")]
    Wishlist {
        /// Username to look up
        username: String,

        /// Paging flags
        #[command(flatten)]
        page: OffsetLimitSort,
    },

    /// List a user's checkins, most recent first
    ///
    /// Examples:
    ///   untappdctl user checkins mdlayher
    ///   untappdctl user checkins mdlayher --max-id 200000000 --limit 50
    Checkins {
        /// Username to look up
        username: String,

        /// Checkin ID range flags
        #[command(flatten)]
        range: CheckinRange,
    },
}

/// `beer` subcommands
#[derive(Subcommand, Debug)]
pub enum BeerCommand {
    /// Show a single beer
    Info {
        /// Numeric beer ID
        id: u64,
    },

    /// List checkins of a beer
    Checkins {
        /// Numeric beer ID
        id: u64,

        /// Checkin ID range flags
        #[command(flatten)]
        range: CheckinRange,
    },

    /// Search beers by name
    Search {
        /// Search query
        query: String,

        /// Paging flags
        #[command(flatten)]
        page: OffsetLimitSort,
    },
}

/// `brewery` subcommands
#[derive(Subcommand, Debug)]
pub enum BreweryCommand {
    /// Show a single brewery
    Info {
        /// Numeric brewery ID
        id: u64,
    },

    /// List checkins of a brewery's beers
    Checkins {
        /// Numeric brewery ID
        id: u64,

        /// Checkin ID range flags
        #[command(flatten)]
        range: CheckinRange,
    },

    /// Search breweries by name
    Search {
        /// Search query
        query: String,

        /// Paging flags
        #[command(flatten)]
        page: OffsetLimit,
    },
}

/// `venue` subcommands
#[derive(Subcommand, Debug)]
pub enum VenueCommand {
    /// Show a single venue
    Info {
        /// Numeric venue ID
        id: u64,
    },

    /// List checkins at a venue
    Checkins {
        /// Numeric venue ID
        id: u64,

        /// Checkin ID range flags
        #[command(flatten)]
        range: CheckinRange,
    },
}

/// `local` subcommands
#[derive(Subcommand, Debug)]
pub enum LocalCommand {
    /// List recent checkins near a point
    ///
    /// Example:
    ///   untappdctl local checkins 42.33 -83.05 --radius 5
    Checkins {
        /// Latitude
        #[arg(allow_negative_numbers = true)]
        lat: f64,

        /// Longitude
        #[arg(allow_negative_numbers = true)]
        lng: f64,

        /// Search radius in miles (server maximum 25)
        #[arg(long)]
        radius: Option<u32>,

        /// Checkin ID range flags
        #[command(flatten)]
        range: CheckinRange,
    },
}

/// Offset paging flags
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetLimit {
    /// Number of results to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,
}

/// Offset paging flags plus a sort order
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct OffsetLimitSort {
    /// Number of results to skip
    #[arg(long, default_value_t = 0)]
    pub offset: u32,

    /// Maximum number of results
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: u32,

    /// Sort order; server default when omitted
    #[arg(long, default_value = "", hide_default_value = true, long_help = sort_help())]
    pub sort: String,
}

impl OffsetLimitSort {
    /// Validate the sort flag and return `(offset, limit, sort)`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidSort`] for an unknown sort token.
    pub fn resolve(&self) -> Result<(u32, u32, Option<Sort>)> {
        offset_limit_sort(self.offset, self.limit, &self.sort)
    }
}

/// Checkin ID paging flags
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckinRange {
    /// Only return checkins with an ID at least this large
    #[arg(long)]
    pub min_id: Option<u64>,

    /// Only return checkins with an ID at most this large
    #[arg(long)]
    pub max_id: Option<u64>,

    /// Maximum number of checkins (server maximum 50)
    #[arg(long)]
    pub limit: Option<u32>,
}

impl CheckinRange {
    /// No paging flag was given; use the endpoint's defaults
    #[must_use]
    pub const fn is_default(&self) -> bool {
        self.min_id.is_none() && self.max_id.is_none() && self.limit.is_none()
    }

    /// `(min_id, max_id, limit)` with defaults filled in
    #[must_use]
    pub fn bounds(&self) -> (u64, u64, u32) {
        (
            self.min_id.unwrap_or(0),
            self.max_id.unwrap_or(DEFAULT_MAX_ID),
            self.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}

impl Cli {
    /// Parse command-line arguments
    ///
    /// # Returns
    ///
    /// Parsed CLI arguments
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Load the config file and apply credentials from flags or environment
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or parsed.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config
            .credentials
            .merge(self.client_id.clone(), self.client_secret.clone());
        Ok(config)
    }
}

fn sort_help() -> String {
    format!(
        "Sort order; server default when omitted.\n\nOne of: {}",
        Sort::options()
    )
}
