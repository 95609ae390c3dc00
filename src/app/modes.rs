//! Session status state machine.
//!
//! ```text
//!            keystroke / color pick with a term
//!   Idle ───────────────────────────────────────▶ Searching
//!    ▲  ▲                                            │
//!    │  └──────────── latest response ok ────────────┤
//!    │                                               │ latest response failed
//!    └──── clear filters / next successful op ──── Error
//! ```

/// Status of the directory session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing outstanding; the visible list is current.
    #[default]
    Idle,

    /// A debounce timer or remote request is outstanding.
    ///
    /// The presentation layer shows a loading indicator.
    Searching,

    /// The latest remote operation failed.
    ///
    /// The visible list is empty and an error message is set.
    Error,
}

impl SessionStatus {
    #[must_use]
    pub const fn is_loading(self) -> bool {
        matches!(self, Self::Searching)
    }
}
