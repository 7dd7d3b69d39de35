//! Default configuration values

/// Default Untappd APIv4 base URL
pub fn default_base_url() -> String {
    "https://api.untappd.com/v4/".to_string()
}

/// Default request timeout in seconds
pub const fn default_timeout() -> u64 {
    30
}

/// Default page size for list endpoints
pub const DEFAULT_LIMIT: u32 = 25;

/// Default page size for the user badges endpoint
pub const DEFAULT_BADGE_LIMIT: u32 = 50;

/// Upper checkin ID bound used when none is given (`i32::MAX`)
pub const DEFAULT_MAX_ID: u64 = 2_147_483_647;

/// Header carrying the remaining request allowance for the current window
pub const RATE_LIMIT_HEADER: &str = "X-Ratelimit-Remaining";
