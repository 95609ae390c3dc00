//! Filter/sort engine producing the visible user list.
//!
//! The engine is a pure function of `(base, query)`: it filters by hair color, then
//! sorts by the query's [`SortKey`](crate::domain::SortKey). Free-text search is not
//! applied here; the remote service is the source of truth for text matching, so the
//! engine only ever receives an already search-narrowed base when a term is active.
//!
//! # Modules
//!
//! - `filter`: hair-color membership filter and distinct color extraction
//! - `sort`: stable ordering by sort key

pub mod filter;
pub mod sort;

pub use filter::{distinct_hair_colors, filter_by_hair_color};
pub use sort::{compare, sort_records};

use crate::domain::{QueryState, UserRecord};

/// Applies the hair-color filter and then the sort key of `query` to `base`.
///
/// The search term of `query` is ignored.
///
/// # Examples
///
/// ```
/// use userdir::engine::apply;
/// use userdir::{QueryState, SortKey, UserRecord};
///
/// let mut ann = UserRecord::new(1, "Ann", "Lee");
/// ann.hair.color = "Brown".to_string();
/// let mut ben = UserRecord::new(2, "Ben", "Ray");
/// ben.hair.color = "Black".to_string();
///
/// let query = QueryState {
///     hair_color: "brown".to_string(),
///     sort_key: SortKey::NameDesc,
///     ..QueryState::default()
/// };
/// let visible = apply(&[ann, ben], &query);
/// assert_eq!(visible.len(), 1);
/// assert_eq!(visible[0].id, 1);
/// ```
#[must_use]
pub fn apply(base: &[UserRecord], query: &QueryState) -> Vec<UserRecord> {
    let _span = tracing::debug_span!(
        "engine_apply",
        base_len = base.len(),
        hair_color = ?query.active_hair_color(),
        sort_key = %query.sort_key
    )
    .entered();

    let mut visible = match query.active_hair_color() {
        Some(color) => filter_by_hair_color(base, color),
        None => base.to_vec(),
    };
    sort_records(&mut visible, query.sort_key);

    tracing::trace!(visible_len = visible.len(), "engine applied");
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SortKey;

    fn user(id: u64, first: &str, age: u32, hair: &str) -> UserRecord {
        let mut user = UserRecord::new(id, first, "Doe");
        user.age = age;
        user.hair.color = hair.to_string();
        user
    }

    fn base() -> Vec<UserRecord> {
        vec![
            user(4, "Dana", 30, "Brown"),
            user(2, "Ben", 22, "Black"),
            user(7, "Cleo", 41, "Brown"),
            user(1, "Ann", 30, "Blonde"),
        ]
    }

    fn ids(records: &[UserRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn apply_is_idempotent() {
        let query = QueryState {
            hair_color: "Brown".to_string(),
            sort_key: SortKey::AgeDesc,
            ..QueryState::default()
        };
        assert_eq!(apply(&base(), &query), apply(&base(), &query));
    }

    #[test]
    fn sort_key_never_changes_membership() {
        let filtered = QueryState {
            hair_color: "brown".to_string(),
            ..QueryState::default()
        };
        let mut expected = ids(&apply(&base(), &filtered));
        expected.sort_unstable();

        for key in SortKey::ALL {
            let query = QueryState {
                sort_key: key,
                ..filtered.clone()
            };
            let mut got = ids(&apply(&base(), &query));
            got.sort_unstable();
            assert_eq!(got, expected, "membership changed under {key}");
        }
    }

    #[test]
    fn color_filter_never_reorders() {
        let sorted = QueryState {
            sort_key: SortKey::AgeAsc,
            ..QueryState::default()
        };
        let all = ids(&apply(&base(), &sorted));

        let filtered = QueryState {
            hair_color: "Brown".to_string(),
            ..sorted
        };
        let subset = ids(&apply(&base(), &filtered));

        let projected: Vec<u64> = all.into_iter().filter(|id| subset.contains(id)).collect();
        assert_eq!(subset, projected);
    }

    #[test]
    fn all_means_no_color_filter() {
        let query = QueryState {
            hair_color: "all".to_string(),
            ..QueryState::default()
        };
        assert_eq!(ids(&apply(&base(), &query)), vec![1, 2, 4, 7]);
    }

    #[test]
    fn search_term_is_ignored() {
        let query = QueryState {
            search_term: "zzz".to_string(),
            ..QueryState::default()
        };
        assert_eq!(apply(&base(), &query).len(), 4);
    }

    #[test]
    fn age_ties_fall_back_to_input_order() {
        let query = QueryState {
            sort_key: SortKey::AgeAsc,
            ..QueryState::default()
        };
        assert_eq!(ids(&apply(&base(), &query)), vec![2, 4, 1, 7]);
    }
}
