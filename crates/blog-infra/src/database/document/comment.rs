//! Comment document for the `comments` collection.

use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};

use blog_core::domain::{Comment, CommentFields};

use super::{id_to_hex, timestamp_from_bson, timestamp_to_bson};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
    pub created_at: Option<Bson>,
}

impl From<CommentDocument> for Comment {
    fn from(document: CommentDocument) -> Self {
        Self {
            id: id_to_hex(document.id),
            fields: CommentFields {
                blog_id: document.blog_id,
                comment: document.comment,
                user_name: document.user_name,
                user_email: document.user_email,
                user_image: document.user_image,
                created_at: document.created_at.and_then(timestamp_from_bson),
            },
        }
    }
}

impl From<CommentFields> for CommentDocument {
    fn from(fields: CommentFields) -> Self {
        Self {
            id: None,
            blog_id: fields.blog_id,
            comment: fields.comment,
            user_name: fields.user_name,
            user_email: fields.user_email,
            user_image: fields.user_image,
            created_at: fields.created_at.map(timestamp_to_bson),
        }
    }
}
