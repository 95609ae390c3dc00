//! Actions representing side effects to be executed by the session runtime.
//!
//! This module defines the [`Action`] type, the commands produced by the event handler
//! after a state transition. Actions bridge pure state transformations and effectful
//! operations: arming timers and talking to the remote service.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use userdir::app::Action;
//! use userdir::worker::WorkerMessage;
//!
//! let actions = vec![
//!     Action::CancelDebounce,
//!     Action::PostToWorker(WorkerMessage::Search { ticket: 4, term: "ali".into() }),
//!     Action::ScheduleDebounce { ticket: 5, delay: Duration::from_millis(500) },
//! ];
//! assert_eq!(actions.len(), 3);
//! ```

use crate::worker::WorkerMessage;
use std::time::Duration;

/// Commands executed by the runtime after `handle_event` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Arms the debounce timer, replacing any pending one.
    ///
    /// When it fires, the runtime feeds back
    /// [`Event::DebounceElapsed`](crate::app::Event::DebounceElapsed) with the same ticket.
    ScheduleDebounce {
        ticket: u64,
        delay: Duration,
    },

    /// Disarms the pending debounce timer, if any.
    CancelDebounce,

    /// Runs a remote request on a background task.
    PostToWorker(WorkerMessage),
}
