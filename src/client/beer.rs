//! `beer/*` and `search/beer` endpoints

use super::wire::{BeerResponse, BeersResponse, CheckinsResponse};
use super::{min_max_id_limit, offset_limit_sort, ApiResponse, Client, Query};
use crate::config::{DEFAULT_LIMIT, DEFAULT_MAX_ID};
use crate::error::Result;
use crate::model::{Beer, Checkin};
use crate::sort::Sort;

/// Queries about beers, addressed by numeric beer ID
#[derive(Debug, Clone, Copy)]
pub struct BeerService<'a> {
    client: &'a Client,
}

impl<'a> BeerService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Details of a single beer
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn info(&self, id: u64, compact: bool) -> Result<(Beer, ApiResponse)> {
        let (body, res): (BeerResponse, _) = self
            .client
            .get(&format!("beer/info/{id}"), &super::compact(compact))?;
        Ok((body.beer, res))
    }

    /// Up to 25 of the most recent checkins of a beer
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins(&self, id: u64) -> Result<(Vec<Checkin>, ApiResponse)> {
        self.checkins_min_max_id_limit(id, 0, DEFAULT_MAX_ID, DEFAULT_LIMIT)
    }

    /// Checkins of a beer with IDs in `min_id..=max_id`
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
            &format!("beer/checkins/{id}"),
            &min_max_id_limit(min_id, max_id, limit),
        )?;
        Ok((body.checkins.items, res))
    }

    /// Up to 25 beers matching a free-text query
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn search(&self, query: &str) -> Result<(Vec<Beer>, ApiResponse)> {
        self.search_offset_limit_sort(query, 0, DEFAULT_LIMIT, None)
    }

    /// A page of beers matching a free-text query
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn search_offset_limit_sort(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
        sort: Option<Sort>,
    ) -> Result<(Vec<Beer>, ApiResponse)> {
        let mut params: Query = vec![("q", query.to_string())];
        params.extend(offset_limit_sort(offset, limit, sort));

        let (body, res): (BeersResponse, _) = self.client.get("search/beer", &params)?;
        Ok((body.into_beers(), res))
    }
}
