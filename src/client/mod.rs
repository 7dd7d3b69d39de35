//! HTTP client for the Untappd APIv4
//!
//! [`Client`] signs every request with the application's client ID and
//! secret, decodes the `meta`/`response` JSON envelope and hands back the
//! decoded value together with an [`ApiResponse`] describing the HTTP
//! exchange. Endpoints are grouped into services by resource family:
//!
//! ```no_run
//! # fn main() -> untappd::Result<()> {
//! let client = untappd::Client::new("id", "secret")?;
//! let (checkins, _res) = client.user().checkins("mdlayher")?;
//! println!("{} checkins", checkins.len());
//! # Ok(())
//! # }
//! ```

use crate::config::{Config, RATE_LIMIT_HEADER};
use crate::error::{Error, Result};
use crate::sort::Sort;
use reqwest::blocking;
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub mod beer;
pub mod brewery;
pub mod local;
pub mod user;
pub mod venue;
mod wire;

pub use beer::BeerService;
pub use brewery::BreweryService;
pub use local::LocalService;
pub use user::UserService;
pub use venue::VenueService;

/// Query parameters for a single request, in the order they are sent
pub(crate) type Query = Vec<(&'static str, String)>;

/// Untappd APIv4 client
#[derive(Debug, Clone)]
pub struct Client {
    http: blocking::Client,
    base_url: Url,
    client_id: String,
    client_secret: String,
}

/// Builder for [`Client`]
#[derive(Debug)]
pub struct ClientBuilder {
    client_id: String,
    client_secret: String,
    base_url: String,
    timeout: Option<Duration>,
    http: Option<blocking::Client>,
}

/// HTTP details of a completed API call
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
}

impl Client {
    /// Create a client for the public Untappd API
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingClientId`] or [`Error::MissingClientSecret`]
    /// when either credential is empty.
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        Self::builder(client_id, client_secret).build()
    }

    /// Start building a client with custom transport settings
    pub fn builder(client_id: &str, client_secret: &str) -> ClientBuilder {
        ClientBuilder {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            base_url: crate::config::default_base_url(),
            timeout: None,
            http: None,
        }
    }

    /// Create a client from loaded configuration
    ///
    /// # Errors
    ///
    /// Fails when the configuration is invalid or lacks either credential.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::builder(
            &config.credentials.client_id,
            &config.credentials.client_secret,
        )
        .base_url(&config.base_url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
    }

    /// User endpoints
    #[must_use]
    pub const fn user(&self) -> UserService<'_> {
        UserService::new(self)
    }

    /// Beer endpoints
    #[must_use]
    pub const fn beer(&self) -> BeerService<'_> {
        BeerService::new(self)
    }

    /// Brewery endpoints
    #[must_use]
    pub const fn brewery(&self) -> BreweryService<'_> {
        BreweryService::new(self)
    }

    /// Venue endpoints
    #[must_use]
    pub const fn venue(&self) -> VenueService<'_> {
        VenueService::new(self)
    }

    /// Location-based endpoints
    #[must_use]
    pub const fn local(&self) -> LocalService<'_> {
        LocalService::new(self)
    }

    /// Base URL every endpoint is resolved against
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET an endpoint relative to the base URL and decode `response`
    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &Query,
    ) -> Result<(T, ApiResponse)> {
        let url = self
            .base_url
            .join(endpoint)
            .map_err(|e| Error::InvalidConfig(format!("invalid endpoint {endpoint:?}: {e}")))?;

        let response = self
            .http
            .get(url)
            .query(query)
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .header(ACCEPT, "application/json")
            .send()?;

        let res = ApiResponse::new(response.status(), response.headers().clone());
        let body = response.text()?;

        let value = wire::decode(res.status, &body)?;
        Ok((value, res))
    }
}

impl ClientBuilder {
    /// Override the API base URL (a trailing `/` is added when missing)
    #[must_use]
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Set a whole-request timeout on the default transport
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a caller-supplied HTTP client instead of the default transport
    #[must_use]
    pub fn http_client(mut self, http: blocking::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Validate credentials and construct the [`Client`]
    ///
    /// # Errors
    ///
    /// Fails on empty credentials, an unparseable base URL, or when the
    /// default transport cannot be built.
    pub fn build(self) -> Result<Client> {
        if self.client_id.is_empty() {
            return Err(Error::MissingClientId);
        }
        if self.client_secret.is_empty() {
            return Err(Error::MissingClientSecret);
        }

        let mut base = self.base_url;
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| Error::InvalidConfig(format!("invalid base URL {base:?}: {e}")))?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = blocking::Client::builder().user_agent(concat!(
                    "untappdctl/",
                    env!("CARGO_PKG_VERSION")
                ));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Client {
            http,
            base_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
        })
    }
}

impl ApiResponse {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap) -> Self {
        Self { status, headers }
    }

    /// HTTP status of the response
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Value of the `X-Ratelimit-Remaining` header, if present and non-empty
    #[must_use]
    pub fn rate_limit_remaining(&self) -> Option<&str> {
        self.headers
            .get(RATE_LIMIT_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
    }
}

/// Query for endpoints paged by checkin ID
pub(crate) fn min_max_id_limit(min_id: u64, max_id: u64, limit: u32) -> Query {
    vec![
        ("min_id", min_id.to_string()),
        ("max_id", max_id.to_string()),
        ("limit", limit.to_string()),
    ]
}

/// Query for endpoints paged by offset
pub(crate) fn offset_limit(offset: u32, limit: u32) -> Query {
    vec![("offset", offset.to_string()), ("limit", limit.to_string())]
}

/// Query for offset-paged endpoints that accept an ordering
pub(crate) fn offset_limit_sort(offset: u32, limit: u32, sort: Option<Sort>) -> Query {
    let mut query = offset_limit(offset, limit);
    if let Some(sort) = sort {
        query.push(("sort", sort.as_str().to_string()));
    }
    query
}

/// Query for `*/info` endpoints
pub(crate) fn compact(compact: bool) -> Query {
    if compact {
        vec![("compact", "true".to_string())]
    } else {
        Vec::new()
    }
}
