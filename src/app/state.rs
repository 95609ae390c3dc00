//! Session state and view model computation.
//!
//! This module defines [`SessionState`], the single source of truth for one directory
//! session: the base collection, the query, the visible list, status, and the ticket
//! counter that orders asynchronous work.
//!
//! # State Components
//!
//! - **Base**: collection fetched at session start, in service order
//! - **Source**: what the visible list is derived from (base or last committed
//!   remote result)
//! - **Visible**: `engine::apply(source, query)`, or the base itself right after
//!   start and clear-filters
//! - **Tickets**: `latest_ticket` identifies the only timer or response that may
//!   still change state
//!
//! # Example
//!
//! ```rust
//! use userdir::app::SessionState;
//! use userdir::{Config, DirectoryPage, UserRecord};
//!
//! let page = DirectoryPage::from_users(vec![UserRecord::new(1, "Ann", "Lee")]);
//! let state = SessionState::new(page, &Config::default());
//! let view = state.compute_view();
//! assert_eq!(view.title, "User Directory (1)");
//! ```

use super::modes::SessionStatus;
use crate::domain::{QueryState, UserRecord};
use crate::engine;
use crate::remote::DirectoryPage;
use crate::ui::{highlight_ranges, DirectoryView, EmptyState, UserCard};
use crate::Config;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Duration;

/// Banner shown when the latest search or filter request failed.
pub const REMOTE_FAILURE_MESSAGE: &str = "Failed to search/filter users. Please try again.";

/// Collection the visible list is derived from.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSource {
    /// The base collection.
    Base,

    /// The last committed remote result (search or color re-fetch).
    Remote(Vec<UserRecord>),
}

/// State of one directory session.
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Collection fetched at session start. Never refetched.
    pub base: Vec<UserRecord>,

    /// Distinct hair colors of the base collection, first-seen order.
    pub hair_colors: Vec<String>,

    pub query: QueryState,

    pub source: ResultSource,

    /// Currently displayed records.
    pub visible: Vec<UserRecord>,

    pub status: SessionStatus,

    /// User-facing error message, set only in [`SessionStatus::Error`].
    pub error: Option<String>,

    /// Ticket of the most recent superseding operation.
    pub latest_ticket: u64,

    /// Quiet period for search input.
    pub debounce: Duration,

    /// Whether a color pick without a term re-fetches remotely.
    pub remote_hair_filter: bool,
}

impl SessionState {
    /// Creates a session over a fetched page, showing it in service order.
    #[must_use]
    pub fn new(page: DirectoryPage, config: &Config) -> Self {
        tracing::debug!(
            base_len = page.users.len(),
            hair_colors = page.hair_colors.len(),
            "session state created"
        );

        Self {
            visible: page.users.clone(),
            base: page.users,
            hair_colors: page.hair_colors,
            query: QueryState::default(),
            source: ResultSource::Base,
            status: SessionStatus::Idle,
            error: None,
            latest_ticket: 0,
            debounce: config.debounce(),
            remote_hair_filter: config.remote_hair_filter,
        }
    }

    /// Draws a new ticket, superseding every outstanding timer and request.
    pub fn issue_ticket(&mut self) -> u64 {
        self.latest_ticket += 1;
        self.latest_ticket
    }

    #[must_use]
    pub const fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest_ticket
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    /// The collection the visible list is derived from.
    #[must_use]
    pub fn source_records(&self) -> &[UserRecord] {
        match &self.source {
            ResultSource::Base => &self.base,
            ResultSource::Remote(users) => users,
        }
    }

    /// Re-derives the visible list from the current source and query.
    ///
    /// In the error state the list stays empty.
    pub fn recompute_visible(&mut self) {
        if self.status == SessionStatus::Error {
            self.visible.clear();
            return;
        }
        self.visible = engine::apply(self.source_records(), &self.query);
    }

    /// Switches to the base collection and recomputes locally.
    pub fn show_base_filtered(&mut self) {
        self.source = ResultSource::Base;
        self.status = SessionStatus::Idle;
        self.error = None;
        self.recompute_visible();
    }

    /// Commits a remote result as the new source.
    pub fn commit_remote(&mut self, users: Vec<UserRecord>) {
        self.source = ResultSource::Remote(users);
        self.status = SessionStatus::Idle;
        self.error = None;
        self.recompute_visible();
    }

    /// Enters the error state with an empty visible list.
    pub fn fail(&mut self) {
        self.status = SessionStatus::Error;
        self.error = Some(REMOTE_FAILURE_MESSAGE.to_string());
        self.visible.clear();
    }

    /// Resets the query and shows the base collection in fetch order.
    pub fn reset(&mut self) {
        self.query = QueryState::default();
        self.source = ResultSource::Base;
        self.status = SessionStatus::Idle;
        self.error = None;
        self.visible.clone_from(&self.base);
    }

    /// Computes the presentation payload.
    ///
    /// Cards carry fuzzy highlight ranges over the full name while a search term is
    /// set. The empty state only appears when nothing is loading and no error is shown.
    #[must_use]
    pub fn compute_view(&self) -> DirectoryView {
        let matcher = self.query.active_search().map(|_| SkimMatcherV2::default());

        let cards: Vec<UserCard> = self
            .visible
            .iter()
            .map(|user| {
                let mut card = UserCard::from_record(user);
                if let Some(m) = matcher.as_ref() {
                    card.highlight_ranges =
                        highlight_ranges(m, &card.full_name, &self.query.search_term);
                }
                card
            })
            .collect();

        let loading = self.is_loading();
        let empty_state = (!loading && self.error.is_none() && cards.is_empty())
            .then(EmptyState::no_matches);

        DirectoryView {
            title: format!("User Directory ({})", cards.len()),
            cards,
            loading,
            error: self.error.clone(),
            hair_colors: self.hair_colors.clone(),
            active_filters: self
                .query
                .active_filters()
                .iter()
                .map(ToString::to_string)
                .collect(),
            search_term: self.query.search_term.clone(),
            sort_key: self.query.sort_key,
            empty_state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortKey;

    fn page() -> DirectoryPage {
        let mut ann = UserRecord::new(2, "Ann", "Lee");
        ann.hair.color = "Brown".to_string();
        let mut ben = UserRecord::new(1, "Ben", "Ray");
        ben.hair.color = "Black".to_string();
        DirectoryPage::from_users(vec![ann, ben])
    }

    #[test]
    fn starts_with_base_in_fetch_order() {
        let state = SessionState::new(page(), &Config::default());
        assert_eq!(state.visible.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(state.status, SessionStatus::Idle);
        assert_eq!(state.hair_colors, vec!["Brown", "Black"]);
        assert_eq!(state.debounce, Duration::from_millis(500));
    }

    #[test]
    fn tickets_increase_monotonically() {
        let mut state = SessionState::new(page(), &Config::default());
        let first = state.issue_ticket();
        let second = state.issue_ticket();
        assert!(second > first);
        assert!(state.is_current(second));
        assert!(!state.is_current(first));
    }

    #[test]
    fn error_state_keeps_visible_empty() {
        let mut state = SessionState::new(page(), &Config::default());
        state.fail();
        state.query.sort_key = SortKey::NameAsc;
        state.recompute_visible();
        assert!(state.visible.is_empty());
        assert_eq!(state.error.as_deref(), Some(REMOTE_FAILURE_MESSAGE));
    }

    #[test]
    fn view_reports_filters_and_empty_state() {
        let mut state = SessionState::new(page(), &Config::default());
        state.query.hair_color = "Green".to_string();
        state.recompute_visible();

        let view = state.compute_view();
        assert_eq!(view.title, "User Directory (0)");
        assert_eq!(view.active_filters, vec!["Hair: Green"]);
        assert_eq!(view.empty_state, Some(EmptyState::no_matches()));
        assert!(!view.loading);
    }

    #[test]
    fn view_hides_empty_state_while_loading_or_failed() {
        let mut state = SessionState::new(page(), &Config::default());
        state.fail();
        let view = state.compute_view();
        assert!(view.empty_state.is_none());
        assert_eq!(view.error.as_deref(), Some(REMOTE_FAILURE_MESSAGE));

        state.reset();
        state.visible.clear();
        state.status = SessionStatus::Searching;
        assert!(state.compute_view().empty_state.is_none());
    }

    #[test]
    fn view_highlights_names_during_search() {
        let mut state = SessionState::new(page(), &Config::default());
        state.query.search_term = "ann".to_string();
        let view = state.compute_view();
        assert_eq!(view.cards[0].highlight_ranges, vec![(0, 3)]);
        assert_eq!(view.search_term, "ann");
    }
}
