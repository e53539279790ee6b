use serde::{Deserialize, Serialize};

use super::Timestamp;

/// The writable fields of a blog post.
///
/// This is both the create payload and the full replacement set used by
/// update-by-id. Missing text fields become `null`; a missing `createdAt`
/// is stamped with the current time. Posts read back from storage without
/// one keep it `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub blog_image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    /// Owner email.
    #[serde(default)]
    pub email: Option<String>,
    /// Owner display name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author_image: Option<String>,
    #[serde(default = "stamped_now")]
    pub created_at: Option<Timestamp>,
}

impl PostFields {
    /// Create an otherwise empty post with a title, stamped now.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            blog_image: None,
            category: None,
            short_description: None,
            long_description: None,
            email: None,
            name: None,
            author_image: None,
            created_at: stamped_now(),
        }
    }
}

fn stamped_now() -> Option<Timestamp> {
    Some(Timestamp::now())
}

/// A stored blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: PostFields,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_null() {
        let fields: PostFields = serde_json::from_str(r#"{"title":"T"}"#).unwrap();

        assert_eq!(fields.title.as_deref(), Some("T"));
        assert!(fields.category.is_none());
        assert!(fields.email.is_none());
    }

    #[test]
    fn test_created_at_is_kept_when_supplied() {
        let fields: PostFields =
            serde_json::from_str(r#"{"createdAt":"2024-05-01T10:00:00Z"}"#).unwrap();

        match fields.created_at {
            Some(Timestamp::Date(at)) => assert_eq!(at.to_rfc3339(), "2024-05-01T10:00:00+00:00"),
            other => panic!("expected a date, got {other:?}"),
        }
    }

    #[test]
    fn test_created_at_defaults_to_now_and_accepts_plain_strings() {
        let fields: PostFields = serde_json::from_str(r#"{"title":"T"}"#).unwrap();
        assert!(matches!(fields.created_at, Some(Timestamp::Date(_))));

        let fields: PostFields = serde_json::from_str(r#"{"createdAt":"2024-05-01"}"#).unwrap();
        assert_eq!(
            fields.created_at,
            Some(Timestamp::Text("2024-05-01".to_string()))
        );
    }

    #[test]
    fn test_post_serializes_with_mongo_style_id() {
        let post = Post {
            id: "65f0c0ffee0000000000abcd".to_string(),
            fields: PostFields::titled("Hello"),
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["_id"], "65f0c0ffee0000000000abcd");
        assert_eq!(json["title"], "Hello");
        assert!(json.get("blogImage").is_some());
        assert!(json.get("createdAt").is_some());
    }
}
