//! Executes worker messages against a [`DirectoryService`].
//!
//! The worker never sees session state. It turns one [`WorkerMessage`] into one
//! [`WorkerResponse`], converting every error into [`WorkerResponse::Failed`] so that
//! nothing escapes the session boundary.

use crate::domain::{Result, UserRecord};
use crate::remote::DirectoryService;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::Arc;

/// Remote request executor shared by the session's spawned tasks.
pub struct DirectoryWorker<S: ?Sized> {
    service: Arc<S>,
}

impl<S: ?Sized> Clone for DirectoryWorker<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: DirectoryService + ?Sized> DirectoryWorker<S> {
    pub const fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Runs one request to completion.
    pub async fn handle(&self, message: WorkerMessage) -> WorkerResponse {
        let operation = message.operation();
        let ticket = message.ticket();

        let result = match message {
            WorkerMessage::Search { term, .. } => self.service.search_users(&term).await,
            WorkerMessage::FilterByHairColor { color, .. } => {
                self.service.filter_by_hair_color(&color).await
            }
        };

        Self::handle_remote_result(operation, ticket, result)
    }

    /// Standardizes logging and error conversion across operations.
    fn handle_remote_result(
        operation: &str,
        ticket: u64,
        result: Result<Vec<UserRecord>>,
    ) -> WorkerResponse {
        match result {
            Ok(users) => {
                tracing::debug!(
                    operation = operation,
                    ticket = ticket,
                    user_count = users.len(),
                    "remote operation successful"
                );
                WorkerResponse::UsersLoaded { ticket, users }
            }
            Err(e) => {
                tracing::warn!(
                    operation = operation,
                    ticket = ticket,
                    error = %e,
                    "remote operation failed"
                );
                WorkerResponse::Failed {
                    ticket,
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }
}
