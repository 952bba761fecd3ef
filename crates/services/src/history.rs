//! Query parameters and pagination math for the quiz history listing.
//!
//! The listing is never cached client-side: any change to page, search, or
//! difficulty issues a fresh request.

use serde::Deserialize;

use quiz_core::model::{Difficulty, Quiz};

/// Parameters for `GET /quizzes`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryQuery {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 10,
            search: None,
            difficulty: None,
        }
    }
}

impl HistoryQuery {
    /// Encoded query pairs. Blank search strings are omitted, matching the
    /// listing endpoint's treatment of absent filters.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(search) = self.search.as_deref()
            && !search.trim().is_empty()
        {
            pairs.push(("search", search.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            pairs.push(("difficulty", difficulty.as_str().to_string()));
        }
        pairs
    }
}

/// One page of previously generated quizzes.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuizListPage {
    pub quizzes: Vec<Quiz>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl QuizListPage {
    #[must_use]
    pub fn page_count(&self) -> u32 {
        page_count(self.total, self.limit)
    }
}

/// `ceil(total / limit)`; 0 pages when the limit is 0.
#[must_use]
pub fn page_count(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_five_items_at_ten_per_page_is_three_pages() {
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn page_count_edges() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn default_query_is_first_page_of_ten() {
        let query = HistoryQuery::default();
        assert_eq!(
            query.query_pairs(),
            vec![("page", "1".to_string()), ("limit", "10".to_string())]
        );
    }

    #[test]
    fn filters_are_encoded_when_present() {
        let query = HistoryQuery {
            page: 2,
            limit: 10,
            search: Some("Turing".to_string()),
            difficulty: Some(Difficulty::Easy),
        };
        let pairs = query.query_pairs();
        assert!(pairs.contains(&("search", "Turing".to_string())));
        assert!(pairs.contains(&("difficulty", "easy".to_string())));
    }

    #[test]
    fn blank_search_is_omitted() {
        let query = HistoryQuery {
            search: Some("   ".to_string()),
            ..HistoryQuery::default()
        };
        assert!(query.query_pairs().iter().all(|(key, _)| *key != "search"));
    }

    #[test]
    fn changing_a_filter_changes_the_query() {
        // Views key their fetch resource on the whole query value, so any
        // parameter change must produce a distinct query.
        let base = HistoryQuery {
            search: Some("Turing".to_string()),
            difficulty: Some(Difficulty::Easy),
            ..HistoryQuery::default()
        };
        let changed_search = HistoryQuery {
            search: Some("Lovelace".to_string()),
            ..base.clone()
        };
        let changed_difficulty = HistoryQuery {
            difficulty: Some(Difficulty::Hard),
            ..base.clone()
        };
        assert_ne!(base, changed_search);
        assert_ne!(base, changed_difficulty);
    }
}
