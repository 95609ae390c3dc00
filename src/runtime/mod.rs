//! Async runtime around the session state machine.
//!
//! # Modules
//!
//! - [`session`]: `DirectorySession`, which owns state and executes actions
//! - [`debounce`]: Single-slot timer behind search debouncing
//! - [`detail`]: Loader for the single-user detail view

pub mod debounce;
pub mod detail;
pub mod session;

pub use detail::{load_user_detail, DetailOutcome};
pub use session::DirectorySession;
