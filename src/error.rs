//! Error types for the Untappd client and CLI
//!
//! A single flat taxonomy: transport and decoding failures from the remote
//! call, user input errors, and local configuration or output errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Untappd operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the Untappd client and the CLI built on it
#[derive(Error, Debug)]
pub enum Error {
    // ═══════════════════════════════════════════════════════════════
    // Credentials
    // ═══════════════════════════════════════════════════════════════
    /// No client ID was supplied
    #[error("no client ID provided (use --client_id or UNTAPPD_ID)")]
    MissingClientId,

    /// No client secret was supplied
    #[error("no client secret provided (use --client_secret or UNTAPPD_SECRET)")]
    MissingClientSecret,

    // ═══════════════════════════════════════════════════════════════
    // Network & API
    // ═══════════════════════════════════════════════════════════════
    /// HTTP request failed before a response could be decoded
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Untappd returned an error in the response envelope
    #[error("Untappd API error: {code} {error_type}: {detail}")]
    Api {
        /// Status code from `meta.code` (or the HTTP status)
        code: u16,
        /// Machine-readable error type, e.g. `invalid_param`
        error_type: String,
        /// Human-readable detail from the server
        detail: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    // ═══════════════════════════════════════════════════════════════
    // User input
    // ═══════════════════════════════════════════════════════════════
    /// Sort token is not one of the allowed values
    #[error("invalid sort type {given:?} (options: {options})")]
    InvalidSort {
        /// Token supplied by the caller
        given: String,
        /// Comma separated list of valid tokens
        options: String,
    },

    /// Required argument is missing or blank
    #[error("missing argument: {0}")]
    MissingArgument(String),

    // ═══════════════════════════════════════════════════════════════
    // Configuration & output
    // ═══════════════════════════════════════════════════════════════
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read configuration file
    #[error("Failed to read config from {path}: {reason}")]
    ConfigRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Writing or flushing output failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            Self::InvalidResponse(format!("JSON syntax error: {err}"))
        } else {
            Self::InvalidResponse(err.to_string())
        }
    }
}
