//! Stable ordering of user records by [`SortKey`].
//!
//! All keys use stable slice sorts (`sort_by`, `sort_by_cached_key`): records that compare equal keep
//! their relative input order. Descending keys compare in reverse rather than
//! reversing the slice, so ties stay in input order for them too.

use crate::domain::{SortKey, UserRecord};
use std::cmp::{Ordering, Reverse};

/// Compares two records under `key`.
#[must_use]
pub fn compare(key: SortKey, a: &UserRecord, b: &UserRecord) -> Ordering {
    match key {
        SortKey::Default => a.id.cmp(&b.id),
        SortKey::NameAsc => a.full_name().cmp(&b.full_name()),
        SortKey::NameDesc => b.full_name().cmp(&a.full_name()),
        SortKey::AgeAsc => a.age.cmp(&b.age),
        SortKey::AgeDesc => b.age.cmp(&a.age),
        SortKey::CityAsc => a.city().cmp(b.city()),
    }
}

/// Sorts records in place by `key`.
///
/// # Examples
///
/// ```
/// use userdir::engine::sort_records;
/// use userdir::{SortKey, UserRecord};
///
/// let mut users: Vec<UserRecord> = [(1, 30), (2, 22), (3, 41)]
///     .into_iter()
///     .map(|(id, age)| UserRecord { age, ..UserRecord::new(id, "A", "B") })
///     .collect();
///
/// sort_records(&mut users, SortKey::AgeAsc);
/// let ages: Vec<u32> = users.iter().map(|u| u.age).collect();
/// assert_eq!(ages, vec![22, 30, 41]);
/// ```
pub fn sort_records(records: &mut [UserRecord], key: SortKey) {
    match key {
        // Full names allocate, so build each key once.
        SortKey::NameAsc => records.sort_by_cached_key(UserRecord::full_name),
        SortKey::NameDesc => records.sort_by_cached_key(|record| Reverse(record.full_name())),
        _ => records.sort_by(|a, b| compare(key, a, b)),
    }
}
