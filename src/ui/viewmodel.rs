//! View model types handed to the presentation layer.
//!
//! View models are computed from session state via
//! [`SessionState::compute_view`](crate::app::SessionState::compute_view) and contain
//! no business logic, only display-ready data. Whatever renders the directory (web
//! page, terminal, native UI) consumes these and nothing else.
//!
//! # Example
//!
//! ```rust
//! use userdir::ui::{DirectoryView, EmptyState};
//!
//! let view = DirectoryView {
//!     title: "User Directory (0)".to_string(),
//!     cards: vec![],
//!     loading: false,
//!     error: None,
//!     hair_colors: vec!["Brown".to_string()],
//!     active_filters: vec!["Hair: Green".to_string()],
//!     search_term: String::new(),
//!     sort_key: userdir::SortKey::Default,
//!     empty_state: Some(EmptyState::no_matches()),
//! };
//! assert!(view.empty_state.is_some());
//! ```

use crate::domain::{SortKey, UserRecord};

/// Everything the presentation layer needs to draw the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryView {
    /// Header text including the visible count.
    pub title: String,

    /// One card per visible user, in display order.
    pub cards: Vec<UserCard>,

    /// Whether a search or filter is outstanding.
    pub loading: bool,

    /// User-facing error banner text.
    pub error: Option<String>,

    /// Options for the hair-color control.
    pub hair_colors: Vec<String>,

    /// Removable badges, e.g. `"Search: ali"`, `"Hair: Brown"`.
    pub active_filters: Vec<String>,

    /// Current input value. Reflects keystrokes before the debounce fires.
    pub search_term: String,

    pub sort_key: SortKey,

    /// Set when nothing is loading, no error is shown, and no cards match.
    pub empty_state: Option<EmptyState>,
}

/// Display information for one user card.
#[derive(Debug, Clone, PartialEq)]
pub struct UserCard {
    pub id: u64,
    pub full_name: String,
    pub initials: String,
    pub username: String,
    pub email: String,
    pub age: u32,
    pub city: String,
    pub hair_color: String,
    pub company: String,
    pub image: String,

    /// Character ranges of `full_name` matched by the search term.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl UserCard {
    /// Builds a card with no highlighting.
    #[must_use]
    pub fn from_record(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name(),
            initials: user.initials(),
            username: user.username.clone(),
            email: user.email.clone(),
            age: user.age,
            city: user.city().to_string(),
            hair_color: user.hair_color().to_string(),
            company: user.company.name.clone(),
            image: user.image.clone(),
            highlight_ranges: vec![],
        }
    }
}

/// Message shown when no users match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Label of the control that clears all filters.
    pub action: String,
}

impl EmptyState {
    #[must_use]
    pub fn no_matches() -> Self {
        Self {
            message: "No users found matching your criteria.".to_string(),
            action: "Clear Filters".to_string(),
        }
    }
}
