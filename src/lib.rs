#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

//! # Library layout
//!
//! - **[`client`]** - HTTP client and per-resource services for APIv4
//! - **[`model`]** - Users, beers, breweries, venues, checkins and badges
//! - **[`sort`]** - Result orderings accepted by the beer list endpoints
//! - **[`error`]** - Error types
//! - **[`config`]** - Config file and credential handling
//! - **[`cli`]**, **[`commands`]**, **[`output`]**, **[`logger`]** - the `untappdctl` binary

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod model;
pub mod output;
pub mod sort;

/// Client type alias for convenience
pub use client::{ApiResponse, Client};

/// Error type alias for convenience
pub use error::{Error, Result};

/// Configuration type alias for convenience
pub use config::Config;

pub use sort::Sort;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name, used for the log prefix and config directory
pub const NAME: &str = "untappdctl";
