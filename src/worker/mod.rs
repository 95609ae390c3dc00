//! Remote request execution for the session controller.
//!
//! The session never awaits the directory service itself. It posts a
//! [`WorkerMessage`] as an action, the runtime runs it on a task through
//! [`DirectoryWorker`], and the [`WorkerResponse`] comes back as an event.
//!
//! # Architecture
//!
//! - `messages`: Ticketed request/response protocol types
//! - `handler`: Worker implementation and error conversion

pub mod handler;
pub mod messages;

pub use handler::DirectoryWorker;
pub use messages::{WorkerMessage, WorkerResponse};
