//! Wire shapes and defensive decoding for directory service responses.
//!
//! Bodies are read as text by the HTTP client and decoded here, so every malformed
//! payload surfaces as [`DirectoryError::Decode`](crate::DirectoryError::Decode)
//! instead of an opaque transport error.

use crate::domain::{Result, UserRecord};
use serde::Deserialize;

/// Body of the list and search endpoints.
///
/// Only `users` is required; the paging fields are informational.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub skip: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
}

/// Decodes a `{ users: [...] }` body.
///
/// # Errors
///
/// Returns a decode error if the body is not JSON or lacks a `users` array of
/// records.
pub fn decode_users_page(body: &str) -> Result<UsersPage> {
    Ok(serde_json::from_str(body)?)
}

/// Decodes a bare user record body.
///
/// # Errors
///
/// Returns a decode error if the body is not a user record.
pub fn decode_user(body: &str) -> Result<UserRecord> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DirectoryError;

    #[test]
    fn decodes_page_with_paging_fields() {
        let page = decode_users_page(
            r#"{"users":[{"id":1,"firstName":"Ann","lastName":"Lee"}],"total":208,"skip":0,"limit":1}"#,
        )
        .unwrap();
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.total, Some(208));
        assert_eq!(page.limit, Some(1));
    }

    #[test]
    fn decodes_page_without_paging_fields() {
        let page = decode_users_page(r#"{"users":[]}"#).unwrap();
        assert!(page.users.is_empty());
        assert_eq!(page.total, None);
    }

    #[test]
    fn rejects_missing_users_array() {
        let err = decode_users_page(r#"{"message":"oops"}"#).unwrap_err();
        assert!(matches!(err, DirectoryError::Decode(_)));
        assert!(err.is_remote());
    }

    #[test]
    fn rejects_non_json() {
        assert!(matches!(
            decode_user("<html>502</html>"),
            Err(DirectoryError::Decode(_))
        ));
    }
}
