//! Userdir: the core of a browsable user directory.
//!
//! Userdir fetches user records from a remote REST API and keeps the state behind a
//! searchable, filterable, sortable directory view:
//! - Remote directory client (list, by-id, free-text search) over `reqwest`
//! - Pure filter/sort engine (hair color, six sort keys, stable ordering)
//! - Debounced session controller that never lets a stale response win
//! - Detail-view loader with an explicit not-found outcome
//! - View model handed to whatever presentation layer renders the cards

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Presentation layer (external)                      │  ← Renders DirectoryView
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← Owns the session
//! │  - Debounce timers                                  │  ← Executes actions
//! │  - Worker task spawning                             │
//! │  - Detail loader                                    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ App Layer     │   │ Worker Layer  │   │ UI Layer      │
//! │ (app/)        │   │ (worker/)     │   │ (ui/)         │
//! │ - Events      │   │ - Requests    │   │ - View model  │
//! │ - Tickets     │   │ - Responses   │   │ - Highlights  │
//! │ - Actions     │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Engine (engine/)  ·  Remote client (remote/)       │
//! │  Domain (domain/): UserRecord, QueryState, errors   │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber, OTLP JSON file export        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`domain`]: Core domain types (`UserRecord`, `QueryState`, errors)
//! - [`engine`]: Hair-color filter and stable sort
//! - [`remote`]: `DirectoryService` trait and the HTTP client
//! - [`app`]: Session state machine with event/action model
//! - [`worker`]: Remote request execution with ticketed responses
//! - [`runtime`]: Async session driver and detail loader
//! - [`ui`]: View model types for the presentation layer
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! Configuration comes from a TOML file or a flat string map:
//!
//! ```toml
//! api_base_url = "https://dummyjson.com"
//! page_limit = 100
//! debounce_ms = 500
//! request_timeout_ms = 10000
//! trace_level = "debug"
//! trace_file = "/tmp/userdir-otlp.json"
//! ```
//!
//! # Session Flow
//!
//! 1. **Start**: fetch the base collection once (failure means an empty directory)
//! 2. **Type**: each keystroke updates the term at once and re-arms a 500 ms timer
//! 3. **Debounce fires**: empty term recomputes locally, otherwise a search request
//!    is posted to the worker under a fresh ticket
//! 4. **Response**: committed only if its ticket is still the latest
//! 5. **Render**: the presentation layer reads [`ui::DirectoryView`]
//!
//! # Examples
//!
//! ```no_run
//! use userdir::{connect, Config, SortKey};
//!
//! # async fn run() -> userdir::Result<()> {
//! let mut session = connect(&Config::default()).await?;
//!
//! session.set_search_term("ali")?;
//! session.set_sort_key(SortKey::AgeAsc)?;
//! session.settle().await?;
//!
//! for card in &session.view().cards {
//!     println!("{} ({})", card.full_name, card.age);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## Tickets Instead of Last-Write-Wins
//!
//! Every operation that supersedes earlier work draws a new ticket. Debounce timers and
//! remote responses carry their ticket back, and `handle_event` drops anything that is
//! not the latest. Cancelling the timer is an optimization on top of that rule.
//!
//! ## Pure State Machine
//!
//! `handle_event` is synchronous and performs no I/O. It returns actions, and the
//! runtime executes them, so every transition is testable without timers or sockets.

pub mod app;
pub mod domain;
pub mod engine;
pub mod observability;
pub mod remote;
pub mod runtime;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, Event, SessionState, SessionStatus};
pub use domain::{
    ActiveFilter, DirectoryError, FilterKind, QueryState, Result, SortKey, UserRecord,
};
pub use remote::{DirectoryPage, DirectoryService, HttpDirectoryClient};
pub use runtime::{load_user_detail, DetailOutcome, DirectorySession};
pub use ui::DirectoryView;

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";
const DEFAULT_PAGE_LIMIT: u32 = 100;
const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Directory configuration.
///
/// # Example
///
/// ```toml
/// api_base_url = "https://dummyjson.com"
/// page_limit = 100
/// debounce_ms = 500
/// remote_hair_filter = false
/// trace_level = "info"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the directory service, without a trailing path.
    pub api_base_url: String,

    /// Page size for the initial collection fetch. Default: 100
    pub page_limit: u32,

    /// Quiet period before a typed search term is sent. Default: 500
    pub debounce_ms: u64,

    /// Per-request timeout. `None` lets a hung request wait indefinitely.
    pub request_timeout_ms: Option<u64>,

    /// Re-fetch the collection when a hair color is picked without a search term,
    /// instead of filtering the base collection locally. Default: `false`
    pub remote_hair_filter: bool,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// File receiving OTLP JSON span exports. Disabled when unset.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_limit: DEFAULT_PAGE_LIMIT,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_ms: None,
            remote_hair_filter: false,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map (environment, query string,
    /// host-provided settings).
    ///
    /// Parsing is lenient: a missing or unparsable value falls back to its default.
    ///
    /// # Parsing Rules
    ///
    /// - `api_base_url`: non-empty string
    /// - `page_limit`: positive `u32` (falls back to 100)
    /// - `debounce_ms`: `u64` (falls back to 500)
    /// - `request_timeout_ms`: positive `u64`, otherwise no timeout
    /// - `remote_hair_filter`: `true`/`false`
    /// - `trace_level`, `trace_file`: strings
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use userdir::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_limit".to_string(), "30".to_string());
    /// map.insert("debounce_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_limit, 30);
    /// assert_eq!(config.debounce_ms, 500);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let api_base_url = map
            .get("api_base_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.api_base_url);

        let page_limit = map
            .get("page_limit")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&limit| limit > 0)
            .unwrap_or(defaults.page_limit);

        let debounce_ms = map
            .get("debounce_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        let request_timeout_ms = map
            .get("request_timeout_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&ms| ms > 0);

        let remote_hair_filter = map
            .get("remote_hair_filter")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(defaults.remote_hair_filter);

        Self {
            api_base_url,
            page_limit,
            debounce_ms,
            request_timeout_ms,
            remote_hair_filter,
            trace_level: map.get("trace_level").cloned(),
            trace_file: map.get("trace_file").map(PathBuf::from),
        }
    }

    /// Parses a TOML document. Unlike [`from_map`](Self::from_map), this is strict.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] for syntax errors, unknown keys, wrong
    /// types, or a zero `page_limit`.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| DirectoryError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading configuration file");
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn validate(&self) -> Result<()> {
        if self.page_limit == 0 {
            return Err(DirectoryError::Config(
                "page_limit must be greater than zero".to_string(),
            ));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(DirectoryError::Config(
                "api_base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builds an HTTP client from `config` and starts a session on it.
///
/// The base collection is fetched once; a failed fetch yields an empty directory
/// rather than an error.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be constructed.
pub async fn connect(config: &Config) -> Result<DirectorySession<HttpDirectoryClient>> {
    tracing::debug!(api_base_url = %config.api_base_url, "connecting user directory");
    let client = HttpDirectoryClient::new(config)?;
    Ok(DirectorySession::start(Arc::new(client), config).await)
}
