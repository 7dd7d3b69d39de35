//! `brewery/*` and `search/brewery` endpoints

use super::wire::{BreweryResponse, BrewerySearchResponse, CheckinsResponse};
use super::{min_max_id_limit, offset_limit, ApiResponse, Client, Query};
use crate::config::{DEFAULT_LIMIT, DEFAULT_MAX_ID};
use crate::error::Result;
use crate::model::{Brewery, Checkin};

/// Queries about breweries, addressed by numeric brewery ID
#[derive(Debug, Clone, Copy)]
pub struct BreweryService<'a> {
    client: &'a Client,
}

impl<'a> BreweryService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Details of a single brewery
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn info(&self, id: u64, compact: bool) -> Result<(Brewery, ApiResponse)> {
        let (body, res): (BreweryResponse, _) = self
            .client
            .get(&format!("brewery/info/{id}"), &super::compact(compact))?;
        Ok((body.brewery, res))
    }

    /// Up to 25 of the most recent checkins of a brewery's beers
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins(&self, id: u64) -> Result<(Vec<Checkin>, ApiResponse)> {
        self.checkins_min_max_id_limit(id, 0, DEFAULT_MAX_ID, DEFAULT_LIMIT)
    }

    /// Checkins of a brewery's beers with IDs in `min_id..=max_id`
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
            &format!("brewery/checkins/{id}"),
            &min_max_id_limit(min_id, max_id, limit),
        )?;
        Ok((body.checkins.items, res))
    }

    /// Up to 25 breweries matching a free-text query
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn search(&self, query: &str) -> Result<(Vec<Brewery>, ApiResponse)> {
        self.search_offset_limit(query, 0, DEFAULT_LIMIT)
    }

    /// A page of breweries matching a free-text query
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn search_offset_limit(
        &self,
        query: &str,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Brewery>, ApiResponse)> {
        let mut params: Query = vec![("q", query.to_string())];
        params.extend(offset_limit(offset, limit));

        let (body, res): (BrewerySearchResponse, _) =
            self.client.get("search/brewery", &params)?;
        Ok((
            body.brewery.items.into_iter().map(|i| i.brewery).collect(),
            res,
        ))
    }
}
