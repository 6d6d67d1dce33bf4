//! Query and result envelope for discussion list fetches.

use serde::{Deserialize, Serialize};

use super::discussion::Discussion;

/// Parameters of a discussion list request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionQuery {
    /// Backend sort parameter (`recent`, `-replies`, `-created`, `created`).
    pub sort: String,
    /// Offset of the first result. `None` requests the first page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
}

impl DiscussionQuery {
    pub fn new(sort: impl Into<String>, start: Option<usize>) -> Self {
        Self {
            sort: sort.into(),
            start,
        }
    }

    /// Render as URL query pairs in a stable order.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("sort", self.sort.clone())];
        if let Some(start) = self.start {
            pairs.push(("start", start.to_string()));
        }
        pairs
    }
}

/// One page of discussions in server order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscussionPage {
    pub discussions: Vec<Discussion>,
    /// URL of the next page; present only when more results exist.
    pub more_url: Option<String>,
}

impl DiscussionPage {
    pub fn new(discussions: Vec<Discussion>, more_url: Option<String>) -> Self {
        Self {
            discussions,
            more_url: more_url.filter(|url| !url.is_empty()),
        }
    }

    pub fn has_more(&self) -> bool {
        self.more_url.is_some()
    }

    pub fn len(&self) -> usize {
        self.discussions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discussions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_omit_start_for_first_page() {
        let q = DiscussionQuery::new("recent", None);
        assert_eq!(q.to_query_pairs(), vec![("sort", "recent".to_string())]);
    }

    #[test]
    fn test_query_pairs_include_start() {
        let q = DiscussionQuery::new("-replies", Some(20));
        assert_eq!(
            q.to_query_pairs(),
            vec![("sort", "-replies".to_string()), ("start", "20".to_string())]
        );
    }

    #[test]
    fn test_empty_more_url_means_no_more_results() {
        let page = DiscussionPage::new(Vec::new(), Some(String::new()));
        assert!(!page.has_more());
        let page = DiscussionPage::new(Vec::new(), Some("/api/discussions?start=20".into()));
        assert!(page.has_more());
    }
}
