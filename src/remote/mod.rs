//! Remote directory client layer.
//!
//! # Modules
//!
//! - `service`: [`DirectoryService`] trait and [`DirectoryPage`]
//! - `http`: `reqwest` implementation against the REST API
//! - `wire`: response body shapes and defensive decoding

pub mod http;
pub mod service;
pub mod wire;

pub use http::HttpDirectoryClient;
pub use service::{DirectoryPage, DirectoryService};
pub use wire::UsersPage;
