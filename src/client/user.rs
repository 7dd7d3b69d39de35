//! `user/*` endpoints

use super::wire::{BadgesResponse, BeersResponse, CheckinsResponse, FriendsResponse, UserResponse};
use super::{min_max_id_limit, offset_limit, offset_limit_sort, ApiResponse, Client};
use crate::config::{DEFAULT_BADGE_LIMIT, DEFAULT_LIMIT, DEFAULT_MAX_ID};
use crate::error::Result;
use crate::model::{Badge, Beer, Checkin, User};
use crate::sort::Sort;

/// Queries about a single Untappd user, addressed by username
#[derive(Debug, Clone, Copy)]
pub struct UserService<'a> {
    client: &'a Client,
}

impl<'a> UserService<'a> {
    pub(crate) const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Profile of a user. `compact` drops the stats and recent activity.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn info(&self, username: &str, compact: bool) -> Result<(User, ApiResponse)> {
        let (body, res): (UserResponse, _) = self
            .client
            .get(&endpoint("info", username), &super::compact(compact))?;
        Ok((body.user, res))
    }

    /// Up to 25 of a user's friends
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn friends(&self, username: &str) -> Result<(Vec<User>, ApiResponse)> {
        self.friends_offset_limit(username, 0, DEFAULT_LIMIT)
    }

    /// A page of a user's friends
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn friends_offset_limit(
        &self,
        username: &str,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<User>, ApiResponse)> {
        let (body, res): (FriendsResponse, _) = self
            .client
            .get(&endpoint("friends", username), &offset_limit(offset, limit))?;
        Ok((body.items.into_iter().map(|f| f.user).collect(), res))
    }

    /// Up to 50 of the badges a user has earned
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn badges(&self, username: &str) -> Result<(Vec<Badge>, ApiResponse)> {
        self.badges_offset_limit(username, 0, DEFAULT_BADGE_LIMIT)
    }

    /// A page of the badges a user has earned
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn badges_offset_limit(
        &self,
        username: &str,
        offset: u32,
        limit: u32,
    ) -> Result<(Vec<Badge>, ApiResponse)> {
        let (body, res): (BadgesResponse, _) = self
            .client
            .get(&endpoint("badges", username), &offset_limit(offset, limit))?;
        Ok((body.items, res))
    }

    /// Up to 25 distinct beers a user has had, in server order
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn beers(&self, username: &str) -> Result<(Vec<Beer>, ApiResponse)> {
        self.beers_offset_limit_sort(username, 0, DEFAULT_LIMIT, None)
    }

    /// A page of distinct beers a user has had
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn beers_offset_limit_sort(
        &self,
        username: &str,
        offset: u32,
        limit: u32,
        sort: Option<Sort>,
    ) -> Result<(Vec<Beer>, ApiResponse)> {
        let (body, res): (BeersResponse, _) = self.client.get(
            &endpoint("beers", username),
            &offset_limit_sort(offset, limit, sort),
        )?;
        Ok((body.into_beers(), res))
    }

    /// Up to 25 beers on a user's wish list
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn wish_list(&self, username: &str) -> Result<(Vec<Beer>, ApiResponse)> {
        self.wish_list_offset_limit_sort(username, 0, DEFAULT_LIMIT, None)
    }

    /// A page of a user's wish list
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn wish_list_offset_limit_sort(
        &self,
        username: &str,
        offset: u32,
        limit: u32,
        sort: Option<Sort>,
    ) -> Result<(Vec<Beer>, ApiResponse)> {
        let (body, res): (BeersResponse, _) = self.client.get(
            &endpoint("wishlist", username),
            &offset_limit_sort(offset, limit, sort),
        )?;
        Ok((body.into_beers(), res))
    }

    /// Up to 25 of a user's most recent checkins.
    ///
    /// Use [`UserService::checkins_min_max_id_limit`] to page further back.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins(&self, username: &str) -> Result<(Vec<Checkin>, ApiResponse)> {
        self.checkins_min_max_id_limit(username, 0, DEFAULT_MAX_ID, DEFAULT_LIMIT)
    }

    /// Checkins with IDs in `min_id..=max_id`, newest first.
    ///
    /// The server caps `limit` at 50.
    ///
    /// # Errors
    ///
    /// Fails if the request cannot be sent or Untappd answers with an error envelope.
    pub fn checkins_min_max_id_limit(
        &self,
        username: &str,
        min_id: u64,
        max_id: u64,
        limit: u32,
    ) -> Result<(Vec<Checkin>, ApiResponse)> {
        let (body, res): (CheckinsResponse, _) = self.client.get(
            &endpoint("checkins", username),
            &min_max_id_limit(min_id, max_id, limit),
        )?;
        Ok((body.checkins.items, res))
    }
}

fn endpoint(kind: &str, username: &str) -> String {
    format!("user/{kind}/{}", urlencoding::encode(username))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_is_path_encoded() {
        assert_eq!(endpoint("info", "a b/c"), "user/info/a%20b%2Fc");
    }
}
