//! Loader for the single-user detail view.

use crate::domain::UserRecord;
use crate::remote::DirectoryService;
use tracing::Instrument;

/// What the detail view should show.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailOutcome {
    Found(UserRecord),

    /// Shown as "User not found" with a way back to the list.
    NotFound,
}

impl DetailOutcome {
    #[must_use]
    pub const fn user(&self) -> Option<&UserRecord> {
        match self {
            Self::Found(user) => Some(user),
            Self::NotFound => None,
        }
    }
}

/// Loads the user named by a raw route parameter.
///
/// An empty or non-numeric id is [`DetailOutcome::NotFound`] without a remote call.
/// Remote failures are logged and also reported as not found, so this never fails.
///
/// # Examples
///
/// ```
/// # use async_trait::async_trait;
/// # use userdir::{DirectoryPage, DirectoryService, Result, UserRecord};
/// use userdir::{load_user_detail, DetailOutcome};
///
/// # struct One;
/// # #[async_trait]
/// # impl DirectoryService for One {
/// #     async fn fetch_all(&self) -> Result<DirectoryPage> { Ok(DirectoryPage::default()) }
/// #     async fn fetch_by_id(&self, id: u64) -> Result<Option<UserRecord>> {
/// #         Ok((id == 1).then(|| UserRecord::new(1, "Ann", "Lee")))
/// #     }
/// #     async fn search_users(&self, _: &str) -> Result<Vec<UserRecord>> { Ok(vec![]) }
/// # }
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let found = load_user_detail(&One, "1").await;
/// assert_eq!(found.user().map(UserRecord::full_name).as_deref(), Some("Ann Lee"));
/// assert_eq!(load_user_detail(&One, "abc").await, DetailOutcome::NotFound);
/// # });
/// ```
pub async fn load_user_detail<S>(service: &S, raw_id: &str) -> DetailOutcome
where
    S: DirectoryService + ?Sized,
{
    let Ok(id) = raw_id.parse::<u64>() else {
        tracing::debug!(raw_id = %raw_id, "invalid user id");
        return DetailOutcome::NotFound;
    };

    let result = service
        .fetch_by_id(id)
        .instrument(tracing::debug_span!("load_user_detail", id))
        .await;

    match result {
        Ok(Some(user)) => DetailOutcome::Found(user),
        Ok(None) => {
            tracing::debug!(id, "user not found");
            DetailOutcome::NotFound
        }
        Err(e) => {
            tracing::warn!(id, error = %e, "failed to load user detail");
            DetailOutcome::NotFound
        }
    }
}
