use serde::{Deserialize, Serialize};

use super::Timestamp;

/// The writable fields of a comment.
///
/// `blog_id` is a plain string; it is never checked against the posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentFields {
    #[serde(default)]
    pub blog_id: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: CommentFields,
}
