//! Request and response types exchanged with the remote worker.
//!
//! Every message carries the ticket the session issued when it posted the request.
//! The response echoes it so the session can tell whether the answer is still wanted.

use crate::domain::UserRecord;
use serde::{Deserialize, Serialize};

/// Requests executed against the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Free-text search delegated to the service.
    Search {
        ticket: u64,
        term: String,
    },

    /// Re-fetch the collection and keep one hair color.
    FilterByHairColor {
        ticket: u64,
        color: String,
    },
}

impl WorkerMessage {
    #[must_use]
    pub const fn ticket(&self) -> u64 {
        match self {
            Self::Search { ticket, .. } | Self::FilterByHairColor { ticket, .. } => *ticket,
        }
    }

    /// Short operation name for logs.
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Search { .. } => "search users",
            Self::FilterByHairColor { .. } => "filter users by hair color",
        }
    }
}

/// Completions sent back to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The request succeeded.
    UsersLoaded {
        ticket: u64,
        users: Vec<UserRecord>,
    },

    /// The request failed at the remote boundary.
    Failed {
        ticket: u64,
        /// Diagnostic message; not shown to users.
        message: String,
    },
}

impl WorkerResponse {
    #[must_use]
    pub const fn ticket(&self) -> u64 {
        match self {
            Self::UsersLoaded { ticket, .. } | Self::Failed { ticket, .. } => *ticket,
        }
    }
}
