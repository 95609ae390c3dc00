//! Query state driving the visible user list.
//!
//! [`QueryState`] is the explicit tuple of search term, hair-color filter, and sort
//! key owned by one directory session. It is plain data: the session controller
//! mutates it in response to events and the engine reads it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hair-color filter value that means "no filter".
pub const ALL_HAIR_COLORS: &str = "all";

/// Ordering applied to the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Ascending by user id.
    #[default]
    Default,
    NameAsc,
    NameDesc,
    AgeAsc,
    AgeDesc,
    CityAsc,
}

impl SortKey {
    /// Every key, in the order a sort control lists them.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::NameAsc,
        Self::NameDesc,
        Self::AgeAsc,
        Self::AgeDesc,
        Self::CityAsc,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::AgeAsc => "age-asc",
            Self::AgeDesc => "age-desc",
            Self::CityAsc => "city-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`SortKey`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Mutable query tuple for one directory session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Free-text search term. Empty means inactive.
    pub search_term: String,

    /// Selected hair color. Empty or [`ALL_HAIR_COLORS`] means inactive.
    pub hair_color: String,

    pub sort_key: SortKey,
}

impl QueryState {
    /// The search term, if one is active.
    #[must_use]
    pub fn active_search(&self) -> Option<&str> {
        (!self.search_term.is_empty()).then_some(self.search_term.as_str())
    }

    /// The hair color to filter by, if one is active.
    ///
    /// # Examples
    ///
    /// ```
    /// use userdir::QueryState;
    ///
    /// let mut query = QueryState::default();
    /// assert_eq!(query.active_hair_color(), None);
    ///
    /// query.hair_color = "all".to_string();
    /// assert_eq!(query.active_hair_color(), None);
    ///
    /// query.hair_color = "Brown".to_string();
    /// assert_eq!(query.active_hair_color(), Some("Brown"));
    /// ```
    #[must_use]
    pub fn active_hair_color(&self) -> Option<&str> {
        let color = self.hair_color.as_str();
        (!color.is_empty() && color != ALL_HAIR_COLORS).then_some(color)
    }

    /// Human-readable descriptors for the active filters, search first.
    #[must_use]
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut filters = Vec::with_capacity(2);
        if let Some(term) = self.active_search() {
            filters.push(ActiveFilter::Search(term.to_string()));
        }
        if let Some(color) = self.active_hair_color() {
            filters.push(ActiveFilter::HairColor(color.to_string()));
        }
        filters
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }
}

/// An active filter, as shown on a removable badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveFilter {
    Search(String),
    HairColor(String),
}

impl ActiveFilter {
    #[must_use]
    pub const fn kind(&self) -> FilterKind {
        match self {
            Self::Search(_) => FilterKind::Search,
            Self::HairColor(_) => FilterKind::HairColor,
        }
    }
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search(term) => write!(f, "Search: {term}"),
            Self::HairColor(color) => write!(f, "Hair: {color}"),
        }
    }
}

/// Which filter a removal targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterKind {
    Search,
    HairColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_keys_round_trip_through_strings() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert_eq!(
            "name".parse::<SortKey>(),
            Err(UnknownSortKey("name".to_string()))
        );
    }

    #[test]
    fn sort_key_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&SortKey::CityAsc).unwrap(),
            "\"city-asc\""
        );
    }

    #[test]
    fn descriptors_follow_active_fields() {
        let query = QueryState {
            search_term: "ali".to_string(),
            hair_color: "Brown".to_string(),
            sort_key: SortKey::AgeDesc,
        };
        let rendered: Vec<String> = query
            .active_filters()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(rendered, vec!["Search: ali", "Hair: Brown"]);

        let only_all = QueryState {
            hair_color: ALL_HAIR_COLORS.to_string(),
            ..QueryState::default()
        };
        assert!(only_all.active_filters().is_empty());
    }

    #[test]
    fn default_query_is_inactive() {
        let query = QueryState::default();
        assert!(query.is_default());
        assert_eq!(query.active_search(), None);
        assert_eq!(query.sort_key, SortKey::Default);
    }
}
