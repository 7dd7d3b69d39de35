//! API credential configuration

use serde::Deserialize;

/// Client credentials issued by Untappd for APIv4 access
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    /// Client ID
    #[serde(default)]
    pub client_id: String,

    /// Client secret
    #[serde(default)]
    pub client_secret: String,
}

impl Credentials {
    /// Check if both halves of the credential pair are set
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// Override fields with values from flags or the environment
    ///
    /// Empty overrides are ignored so a blank `UNTAPPD_ID` does not mask
    /// a value from the config file.
    pub fn merge(&mut self, client_id: Option<String>, client_secret: Option<String>) {
        if let Some(id) = client_id.filter(|s| !s.is_empty()) {
            self.client_id = id;
        }
        if let Some(secret) = client_secret.filter(|s| !s.is_empty()) {
            self.client_secret = secret;
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}
