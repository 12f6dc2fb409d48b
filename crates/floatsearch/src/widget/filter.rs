//! Candidate filtering for the dropdown.
//!
//! The dropdown delegates "which candidates match this query" to a
//! [`CandidateFilter`]. The stock [`SubstringFilter`] keeps every candidate
//! that contains the query, preserving the original order; an empty query
//! matches everything.
//!
//! # Example
//!
//! ```
//! use floatsearch::widget::filter::{filter_items, CaseSensitivity};
//!
//! let items = vec!["Axel".to_string(), "Raven".to_string(), "Chuckie".to_string()];
//! let matches = filter_items(&items, "a", CaseSensitivity::CaseInsensitive);
//! assert_eq!(matches, vec!["Axel".to_string(), "Raven".to_string()]);
//! ```

use serde::{Deserialize, Serialize};

/// Controls how matching handles letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseSensitivity {
    /// Case-sensitive matching (e.g., "ax" won't match "Axel").
    CaseSensitive,
    /// Case-insensitive matching (e.g., "ax" will match "Axel").
    #[default]
    CaseInsensitive,
}

/// Decides which candidates are shown for a query.
///
/// Implementations must return a subsequence of `items`: no reordering, no
/// duplication, no invented entries.
pub trait CandidateFilter: Send + Sync {
    /// Return the candidates matching `query`, in their original order.
    fn filter(&self, items: &[String], query: &str) -> Vec<String>;
}

/// Keeps candidates that contain the query as a substring.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringFilter {
    case_sensitivity: CaseSensitivity,
}

impl SubstringFilter {
    /// Create a substring filter.
    pub fn new(case_sensitivity: CaseSensitivity) -> Self {
        Self { case_sensitivity }
    }

    /// The case handling of this filter.
    pub fn case_sensitivity(&self) -> CaseSensitivity {
        self.case_sensitivity
    }

    /// Check a single candidate against the query.
    pub fn matches(&self, item: &str, query: &str) -> bool {
        match self.case_sensitivity {
            CaseSensitivity::CaseSensitive => item.contains(query),
            CaseSensitivity::CaseInsensitive => {
                item.to_lowercase().contains(&query.to_lowercase())
            }
        }
    }
}

impl CandidateFilter for SubstringFilter {
    fn filter(&self, items: &[String], query: &str) -> Vec<String> {
        filter_items(items, query, self.case_sensitivity)
    }
}

/// Filter `items` down to those containing `query`, preserving order.
///
/// An empty query returns all items unchanged.
pub fn filter_items(items: &[String], query: &str, case_sensitivity: CaseSensitivity) -> Vec<String> {
    if query.is_empty() {
        return items.to_vec();
    }

    match case_sensitivity {
        CaseSensitivity::CaseSensitive => items
            .iter()
            .filter(|item| item.contains(query))
            .cloned()
            .collect(),
        CaseSensitivity::CaseInsensitive => {
            let query_lower = query.to_lowercase();
            items
                .iter()
                .filter(|item| item.to_lowercase().contains(&query_lower))
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> Vec<String> {
        [
            "Axel", "Raven", "Chuckie", "Ryusaki", "Mikasa", "Star Lord", "Goshiro", "Blackie",
            "Salem", "Balto", "Bell",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    fn is_subsequence(sub: &[String], full: &[String]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|wanted| rest.any(|item| item == wanted))
    }

    #[test]
    fn test_empty_query_is_identity() {
        let items = pets();
        assert_eq!(filter_items(&items, "", CaseSensitivity::CaseInsensitive), items);
        assert_eq!(filter_items(&items, "", CaseSensitivity::CaseSensitive), items);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let items = vec!["Axel".to_string(), "Raven".to_string(), "Chuckie".to_string()];
        assert_eq!(
            filter_items(&items, "a", CaseSensitivity::CaseInsensitive),
            vec!["Axel".to_string(), "Raven".to_string()]
        );
        assert_eq!(
            filter_items(&items, "CK", CaseSensitivity::CaseInsensitive),
            vec!["Chuckie".to_string()]
        );
    }

    #[test]
    fn test_case_sensitive_substring() {
        let items = pets();
        assert_eq!(
            filter_items(&items, "B", CaseSensitivity::CaseSensitive),
            vec!["Blackie".to_string(), "Balto".to_string(), "Bell".to_string()]
        );
        assert!(filter_items(&items, "b", CaseSensitivity::CaseSensitive).is_empty());
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(filter_items(&pets(), "zz", CaseSensitivity::CaseInsensitive).is_empty());
    }

    #[test]
    fn test_results_are_ordered_subsequences_with_exact_membership() {
        let items = pets();
        let filter = SubstringFilter::new(CaseSensitivity::CaseInsensitive);

        for query in ["a", "e", "ki", "L", "star ", "o", "BELL", "x", "q", " "] {
            let result = filter.filter(&items, query);
            assert!(is_subsequence(&result, &items), "query {query:?} reordered items");

            for item in &items {
                let expected = item.to_lowercase().contains(&query.to_lowercase());
                assert_eq!(result.contains(item), expected, "query {query:?}, item {item:?}");
                assert_eq!(filter.matches(item, query), expected);
            }
        }
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let items = vec!["Bell".to_string(), "bell".to_string(), "Bell".to_string()];
        assert_eq!(filter_items(&items, "BELL", CaseSensitivity::CaseInsensitive), items);
    }
}
