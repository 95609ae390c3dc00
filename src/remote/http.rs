//! `reqwest`-backed directory client.
//!
//! Talks to a dummyjson-style REST API:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | [`fetch_all`](DirectoryService::fetch_all) | `GET {base}/users?limit={page_limit}` |
//! | [`fetch_by_id`](DirectoryService::fetch_by_id) | `GET {base}/users/{id}` |
//! | [`search_users`](DirectoryService::search_users) | `GET {base}/users/search?q={term}` |
//!
//! Non-success statuses become [`DirectoryError::Status`], except a 404 from the by-id
//! endpoint, which is the explicit not-found outcome.

use super::service::{DirectoryPage, DirectoryService};
use super::wire::{decode_user, decode_users_page};
use crate::domain::{DirectoryError, Result, UserRecord};
use crate::Config;
use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use std::time::Duration;
use tracing::Instrument;

const USER_AGENT: &str = concat!("userdir/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the remote directory service.
#[derive(Debug, Clone)]
pub struct HttpDirectoryClient {
    base_url: String,
    page_limit: u32,
    client: reqwest::Client,
}

impl HttpDirectoryClient {
    /// Builds a client from configuration.
    ///
    /// Applies `request_timeout_ms` when set; otherwise requests may wait indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            page_limit: config.page_limit,
            client: builder.build()?,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response> {
        let response = self
            .client
            .get(self.endpoint(path))
            .query(query)
            .send()
            .await?;

        tracing::debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            "remote response received"
        );
        Ok(response)
    }

    async fn load_all(&self) -> Result<DirectoryPage> {
        let limit = self.page_limit.to_string();
        let response = self.get("users", &[("limit", limit.as_str())]).await?;
        let page = decode_users_page(&success_body(response).await?)?;

        tracing::debug!(
            user_count = page.users.len(),
            total = ?page.total,
            "users fetched"
        );
        Ok(DirectoryPage::from_users(page.users))
    }

    async fn load_one(&self, id: u64) -> Result<Option<UserRecord>> {
        let response = self.get(&format!("users/{id}"), &[]).await?;
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("user not found");
            return Ok(None);
        }
        let user = decode_user(&success_body(response).await?)?;
        Ok(Some(user))
    }

    async fn load_matches(&self, term: &str) -> Result<Vec<UserRecord>> {
        let response = self.get("users/search", &[("q", term)]).await?;
        let page = decode_users_page(&success_body(response).await?)?;

        tracing::debug!(match_count = page.users.len(), "search completed");
        Ok(page.users)
    }
}

/// Reads the body of a successful response, mapping other statuses to errors.
async fn success_body(response: Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(DirectoryError::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response.text().await?)
}

#[async_trait]
impl DirectoryService for HttpDirectoryClient {
    async fn fetch_all(&self) -> Result<DirectoryPage> {
        self.load_all()
            .instrument(tracing::debug_span!("fetch_all", limit = self.page_limit))
            .await
    }

    async fn fetch_by_id(&self, id: u64) -> Result<Option<UserRecord>> {
        self.load_one(id)
            .instrument(tracing::debug_span!("fetch_by_id", user_id = id))
            .await
    }

    async fn search_users(&self, term: &str) -> Result<Vec<UserRecord>> {
        self.load_matches(term)
            .instrument(tracing::debug_span!("search_users", term = %term))
            .await
    }
}
