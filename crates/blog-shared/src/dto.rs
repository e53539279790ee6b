//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body returned after a token cookie was set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenIssuedResponse {
    pub success: bool,
}

/// `GET /searchBlogs?q=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchQuery {
    /// The search pattern, treating an empty `q` the same as a missing one.
    pub fn pattern(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }
}

/// `GET /comments?blogId=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    #[serde(default)]
    pub blog_id: String,
}

/// `GET /wishlist?email=`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WishlistQuery {
    #[serde(default)]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_search_is_no_pattern() {
        let empty = SearchQuery {
            q: Some(String::new()),
        };
        assert_eq!(empty.pattern(), None);
        assert_eq!(SearchQuery::default().pattern(), None);

        let some = SearchQuery {
            q: Some("rust".to_string()),
        };
        assert_eq!(some.pattern(), Some("rust"));
    }
}
