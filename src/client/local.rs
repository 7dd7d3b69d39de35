//! `thepub/local` endpoint

use super::wire::CheckinsResponse;
use super::{min_max_id_limit, ApiResponse, Client, Query};
use crate::config::{DEFAULT_LIMIT, DEFAULT_MAX_ID};
use crate::error::Result;
use crate::model::Checkin;

/// Queries about activity near a point
#[derive(Debug, Clone, Copy)]
pub struct LocalService<'a> {
    client: &'a Client,
}

impl<'a> LocalService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Up to 25 recent checkins near a latitude and longitude, using the
    /// server's default radius
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins(&self, lat: f64, lng: f64) -> Result<(Vec<Checkin>, ApiResponse)> {
        self.checkins_min_max_id_limit_radius(lat, lng, 0, DEFAULT_MAX_ID, DEFAULT_LIMIT, None)
    }

    /// Checkins near a point with IDs in `min_id..=max_id`.
    ///
    /// `radius` is in miles; the server caps it at 25.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins_min_max_id_limit_radius(
        &self,
        lat: f64,
        lng: f64,
        min_id: u64,
        max_id: u64,
        limit: u32,
        radius: Option<u32>,
    ) -> Result<(Vec<Checkin>, ApiResponse)> {
        let mut params: Query = vec![("lat", lat.to_string()), ("lng", lng.to_string())];
        if let Some(radius) = radius {
            params.push(("radius", radius.to_string()));
        }
        params.extend(min_max_id_limit(min_id, max_id, limit));

        let (body, res): (CheckinsResponse, _) = self.client.get("thepub/local", &params)?;
        Ok((body.checkins.items, res))
    }
}
