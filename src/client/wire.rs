//! Response envelope and the per-endpoint `response` shapes

use crate::error::{Error, Result};
use crate::model::{Badge, Beer, Brewery, Checkin, Items, User, Venue};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Every APIv4 body: `{"meta": {...}, "response": {...}}`
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    meta: Meta,
    #[serde(default)]
    response: serde_json::Value,
}

#[derive(Debug, Default, Deserialize)]
struct Meta {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    error_type: String,
    #[serde(default)]
    error_detail: String,
}

/// Decode a response body, turning error envelopes into [`Error::Api`]
pub(super) fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    let envelope: Envelope = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(err) if status.is_success() => return Err(err.into()),
        Err(_) => {
            return Err(Error::Api {
                code: status.as_u16(),
                error_type: status
                    .canonical_reason()
                    .unwrap_or("http_error")
                    .to_string(),
                detail: body.trim().to_string(),
            })
        }
    };

    // Older endpoints omit meta on success; fall back to the HTTP status.
    let code = if envelope.meta.code == 0 {
        status.as_u16()
    } else {
        envelope.meta.code
    };
    if !status.is_success() || !(200..300).contains(&code) {
        return Err(Error::Api {
            code,
            error_type: envelope.meta.error_type,
            detail: envelope.meta.error_detail,
        });
    }

    Ok(serde_json::from_value(envelope.response)?)
}

/// `user/info`
#[derive(Debug, Deserialize)]
pub(super) struct UserResponse {
    pub user: User,
}

/// `user/friends`
#[derive(Debug, Deserialize)]
pub(super) struct FriendsResponse {
    #[serde(default)]
    pub items: Vec<Friend>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Friend {
    pub user: User,
}

/// `user/badges`
#[derive(Debug, Deserialize)]
pub(super) struct BadgesResponse {
    #[serde(default)]
    pub items: Vec<Badge>,
}

/// `user/beers`, `user/wishlist`, `search/beer`
#[derive(Debug, Deserialize)]
pub(super) struct BeersResponse {
    pub beers: Items<BeerItem>,
}

/// A beer listed with its brewery alongside rather than nested
#[derive(Debug, Deserialize)]
pub(super) struct BeerItem {
    pub beer: Beer,
    #[serde(default)]
    pub brewery: Brewery,
}

impl BeersResponse {
    pub fn into_beers(self) -> Vec<Beer> {
        self.beers
            .items
            .into_iter()
            .map(|item| Beer {
                brewery: item.brewery,
                ..item.beer
            })
            .collect()
    }
}

/// `beer/info`
#[derive(Debug, Deserialize)]
pub(super) struct BeerResponse {
    pub beer: Beer,
}

/// `brewery/info`
#[derive(Debug, Deserialize)]
pub(super) struct BreweryResponse {
    pub brewery: Brewery,
}

/// `search/brewery`
#[derive(Debug, Deserialize)]
pub(super) struct BrewerySearchResponse {
    pub brewery: Items<BreweryItem>,
}

#[derive(Debug, Deserialize)]
pub(super) struct BreweryItem {
    pub brewery: Brewery,
}

/// `venue/info`
#[derive(Debug, Deserialize)]
pub(super) struct VenueResponse {
    pub venue: Venue,
}

/// Every `*/checkins` endpoint and `thepub/local`
#[derive(Debug, Deserialize)]
pub(super) struct CheckinsResponse {
    pub checkins: Items<Checkin>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_becomes_api_error() {
        let body = r#"{"meta":{"code":500,"error_detail":"Invalid API key","error_type":"invalid_auth"},"response":[]}"#;
        let err = decode::<UserResponse>(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err();
        match err {
            Error::Api {
                code,
                error_type,
                detail,
            } => {
                assert_eq!(code, 500);
                assert_eq!(error_type, "invalid_auth");
                assert_eq!(detail, "Invalid API key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_json_error_body() {
        let err = decode::<UserResponse>(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>")
            .unwrap_err();
        assert!(matches!(err, Error::Api { code: 502, .. }));
    }

    #[test]
    fn test_meta_code_overrides_success_status() {
        let body = r#"{"meta":{"code":404,"error_type":"invalid_param","error_detail":"no user"},"response":[]}"#;
        let err = decode::<UserResponse>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(err, Error::Api { code: 404, .. }));
    }

    #[test]
    fn test_beer_items_carry_brewery() {
        let body = r#"{"meta":{"code":200},"response":{"beers":{"count":1,"items":[
            {"beer":{"bid":1,"beer_name":"Pliny the Elder"},"brewery":{"brewery_id":2,"brewery_name":"Russian River"}}
        ]}}}"#;
        let beers = decode::<BeersResponse>(StatusCode::OK, body)
            .unwrap()
            .into_beers();
        assert_eq!(beers.len(), 1);
        assert_eq!(beers[0].brewery.name, "Russian River");
    }

    #[test]
    fn test_malformed_success_body() {
        let err = decode::<UserResponse>(StatusCode::OK, "{").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }
}
