//! Presentation boundary.
//!
//! Rendering is left to the embedding application. This module defines what the
//! session hands it:
//!
//! ```text
//! SessionState → compute_view → DirectoryView → (external renderer)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types (`DirectoryView`, `UserCard`, `EmptyState`)
//! - [`highlight`]: Fuzzy match ranges for card names

pub mod highlight;
pub mod viewmodel;

pub use highlight::highlight_ranges;
pub use viewmodel::{DirectoryView, EmptyState, UserCard};
