//! Domain layer for the user directory.
//!
//! This module contains the core domain types, independent of HTTP, async runtime,
//! or presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record model decoded from the directory service
//! - [`query`]: Query state, sort keys, and active-filter descriptors
//!
//! # Examples
//!
//! ```
//! use userdir::domain::{QueryState, SortKey, UserRecord};
//!
//! let user = UserRecord::new(1, "Ann", "Lee");
//! let query = QueryState {
//!     sort_key: SortKey::NameAsc,
//!     ..QueryState::default()
//! };
//! assert_eq!(user.full_name(), "Ann Lee");
//! assert!(query.active_filters().is_empty());
//! ```

pub mod error;
pub mod query;
pub mod user;

pub use error::{DirectoryError, Result};
pub use query::{ActiveFilter, FilterKind, QueryState, SortKey, UnknownSortKey, ALL_HAIR_COLORS};
pub use user::{Address, Company, Coordinates, Hair, UserRecord};
