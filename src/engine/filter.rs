//! Hair-color membership filter.

use crate::domain::UserRecord;

/// Keeps the records whose hair color equals `color`, ignoring case.
///
/// Relative order is preserved.
#[must_use]
pub fn filter_by_hair_color(records: &[UserRecord], color: &str) -> Vec<UserRecord> {
    let wanted = color.to_lowercase();
    records
        .iter()
        .filter(|record| record.hair_color().to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Distinct hair colors in first-seen order.
///
/// Feeds the filter control. Values are compared exactly, so `"Brown"` and
/// `"brown"` both appear if the service returns both.
#[must_use]
pub fn distinct_hair_colors(records: &[UserRecord]) -> Vec<String> {
    let mut colors: Vec<String> = Vec::new();
    for record in records {
        let color = record.hair_color();
        if !colors.iter().any(|seen| seen == color) {
            colors.push(color.to_string());
        }
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_hair(id: u64, color: &str) -> UserRecord {
        let mut user = UserRecord::new(id, "A", "B");
        user.hair.color = color.to_string();
        user
    }

    #[test]
    fn keeps_matching_colors_in_order() {
        let users = vec![
            with_hair(3, "Brown"),
            with_hair(1, "Black"),
            with_hair(2, "brown"),
        ];
        let kept: Vec<u64> = filter_by_hair_color(&users, "BROWN")
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(kept, vec![3, 2]);
    }

    #[test]
    fn unknown_color_yields_nothing() {
        let users = vec![with_hair(1, "Black")];
        assert!(filter_by_hair_color(&users, "Green").is_empty());
    }

    #[test]
    fn distinct_colors_keep_first_seen_order() {
        let users = vec![
            with_hair(1, "Brown"),
            with_hair(2, "Black"),
            with_hair(3, "Brown"),
            with_hair(4, "Blonde"),
        ];
        assert_eq!(distinct_hair_colors(&users), vec!["Brown", "Black", "Blonde"]);
    }
}
