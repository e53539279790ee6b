//! Post document for the `blog` collection.

use mongodb::bson::{Bson, oid::ObjectId};
use serde::{Deserialize, Serialize};

use blog_core::domain::{Post, PostFields};

use super::{id_to_hex, timestamp_from_bson, timestamp_to_bson};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub author_image: Option<String>,
    #[serde(default)]
    pub created_at: Option<Bson>,
}

/// Conversion from the stored document to the domain post.
impl From<PostDocument> for Post {
    fn from(document: PostDocument) -> Self {
        Self {
            id: id_to_hex(document.id),
            fields: PostFields {
                title: document.title,
                blog_image: document.blog_image,
                category: document.category,
                short_description: document.short_description,
                long_description: document.long_description,
                email: document.email,
                name: document.name,
                author_image: document.author_image,
                created_at: document.created_at.and_then(timestamp_from_bson),
            },
        }
    }
}

/// Conversion from caller-supplied fields to a new document without an id.
impl From<PostFields> for PostDocument {
    fn from(fields: PostFields) -> Self {
        Self {
            id: None,
            title: fields.title,
            blog_image: fields.blog_image,
            category: fields.category,
            short_description: fields.short_description,
            long_description: fields.long_description,
            email: fields.email,
            name: fields.name,
            author_image: fields.author_image,
            created_at: fields.created_at.map(timestamp_to_bson),
        }
    }
}
