//! Application layer coordinating state, events, and actions.
//!
//! This module defines the session logic, sitting between the async runtime
//! (`runtime/`) and the domain/engine/worker layers. It implements the event-driven
//! state machine behind the directory view.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Query edits → Events → Event Handler → State Mutations → Actions → Side Effects
//!                             ↑                                  ↓
//!                             └─── Timer expirations / Worker Responses
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Session status state machine
//! - [`state`]: Session state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use userdir::app::{handle_event, Event, SessionState};
//! use userdir::{Config, DirectoryPage, SortKey};
//!
//! let mut state = SessionState::new(DirectoryPage::default(), &Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::SortChanged(SortKey::NameAsc))?;
//! assert!(actions.is_empty());
//! # Ok::<(), userdir::DirectoryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::SessionStatus;
pub use state::{ResultSource, SessionState, REMOTE_FAILURE_MESSAGE};
