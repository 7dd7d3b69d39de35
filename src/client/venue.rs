//! `venue/*` endpoints

use super::wire::{CheckinsResponse, VenueResponse};
use super::{min_max_id_limit, ApiResponse, Client};
use crate::config::{DEFAULT_LIMIT, DEFAULT_MAX_ID};
use crate::error::Result;
use crate::model::{Checkin, Venue};

/// Queries about venues, addressed by numeric venue ID
#[derive(Debug, Clone, Copy)]
pub struct VenueService<'a> {
    client: &'a Client,
}

impl<'a> VenueService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Details of a single venue
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn info(&self, id: u64, compact: bool) -> Result<(Venue, ApiResponse)> {
        let (body, res): (VenueResponse, _) = self
            .client
            .get(&format!("venue/info/{id}"), &super::compact(compact))?;
        Ok((body.venue, res))
    }

    /// Up to 25 of the most recent checkins at a venue
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins(&self, id: u64) -> Result<(Vec<Checkin>, ApiResponse)> {
        self.checkins_min_max_id_limit(id, 0, DEFAULT_MAX_ID, DEFAULT_LIMIT)
    }

    /// Checkins at a venue with IDs in `min_id..=max_id`
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins_min_max_id_limit(
        &self,
        id: u64,
        min_id: u64,
        max_id: u64,
        limit: u32,
    ) -> Result<(Vec<Checkin>, ApiResponse)> {
        let (body, res): (CheckinsResponse, _) = self.client.get(
            &format!("venue/checkins/{id}"),
            &min_max_id_limit(min_id, max_id, limit),
        )?;
        Ok((body.checkins.items, res))
    }
}
