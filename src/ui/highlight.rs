//! Fuzzy match highlighting for card names.
//!
//! The remote service decides which users match a search term; this module only
//! works out which characters of a displayed name to emphasize, using the skim
//! fuzzy matcher.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Character ranges of `text` matched by `query`, coalesced into runs.
///
/// Returns `(start, end)` character index pairs with an exclusive end, or an empty
/// vector when the query does not fuzzy-match (the service may match on fields other
/// than the name).
///
/// # Example
///
/// ```rust
/// use fuzzy_matcher::skim::SkimMatcherV2;
/// use userdir::ui::highlight_ranges;
///
/// let matcher = SkimMatcherV2::default();
/// assert_eq!(highlight_ranges(&matcher, "Alice Smith", "ali"), vec![(0, 3)]);
/// assert!(highlight_ranges(&matcher, "Bob", "zzz").is_empty());
/// ```
#[must_use]
pub fn highlight_ranges(matcher: &SkimMatcherV2, text: &str, query: &str) -> Vec<(usize, usize)> {
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_non_adjacent_matches() {
        let matcher = SkimMatcherV2::default();
        let ranges = highlight_ranges(&matcher, "Ann Lee", "al");
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0], (0, 1));
    }

    #[test]
    fn empty_query_highlights_nothing() {
        let matcher = SkimMatcherV2::default();
        assert!(highlight_ranges(&matcher, "Ann Lee", "").is_empty());
    }
}
