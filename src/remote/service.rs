//! Directory service abstraction.
//!
//! This module defines the [`DirectoryService`] trait that abstracts over the source of
//! user records. The session controller and the detail loader only talk to this trait,
//! so tests can substitute scripted services for the HTTP client.
//!
//! # Design Philosophy
//!
//! The trait is minimal: three read-only calls mirroring the service endpoints, plus
//! two provided combinators built from them. Implementations do no caching and no
//! retrying.
//!
//! # Implementations
//!
//! - [`HttpDirectoryClient`](super::HttpDirectoryClient): `reqwest` client for the
//!   dummyjson-style REST API (default)

use crate::domain::{Result, UserRecord};
use crate::engine::{distinct_hair_colors, filter_by_hair_color};
use async_trait::async_trait;

/// Result of a full collection fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryPage {
    /// Records in service order.
    pub users: Vec<UserRecord>,

    /// Distinct hair colors present in `users`, first-seen order.
    pub hair_colors: Vec<String>,
}

impl DirectoryPage {
    /// Builds a page, deriving the hair-color options from the records.
    #[must_use]
    pub fn from_users(users: Vec<UserRecord>) -> Self {
        let hair_colors = distinct_hair_colors(&users);
        Self { users, hair_colors }
    }
}

/// Read-only access to a remote user directory.
///
/// All operations are idempotent and side-effect free from the caller's point of view.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetches the full known collection (one bounded page) with its hair colors.
    ///
    /// # Errors
    ///
    /// Returns a remote error on transport failure, non-success status, or a
    /// malformed body. Callers loading a session treat this as an empty collection.
    async fn fetch_all(&self) -> Result<DirectoryPage>;

    /// Fetches one record.
    ///
    /// Returns `Ok(None)` when the service reports the id as missing.
    ///
    /// # Errors
    ///
    /// Returns a remote error for any other failure.
    async fn fetch_by_id(&self, id: u64) -> Result<Option<UserRecord>>;

    /// Delegates free-text search to the service.
    ///
    /// # Errors
    ///
    /// Returns a remote error on failure; unlike [`fetch_all`](Self::fetch_all), callers
    /// are expected to surface it.
    async fn search_users(&self, term: &str) -> Result<Vec<UserRecord>>;

    /// Fetches the full collection and keeps users with the given hair color.
    ///
    /// The service has no color endpoint, so the filter runs client side.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`fetch_all`](Self::fetch_all).
    async fn filter_by_hair_color(&self, color: &str) -> Result<Vec<UserRecord>> {
        let page = self.fetch_all().await?;
        Ok(filter_by_hair_color(&page.users, color))
    }

    /// Searches when a term is given (otherwise fetches everything), then applies the
    /// hair-color filter when a color is given.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying calls.
    async fn search_and_filter(
        &self,
        term: Option<&str>,
        color: Option<&str>,
    ) -> Result<Vec<UserRecord>> {
        let users = match term.filter(|t| !t.is_empty()) {
            Some(term) => self.search_users(term).await?,
            None => self.fetch_all().await?.users,
        };

        Ok(match color.filter(|c| !c.is_empty()) {
            Some(color) => filter_by_hair_color(&users, color),
            None => users,
        })
    }
}
