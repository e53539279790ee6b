//! Wishlist document for the `wishlist` collection.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use blog_core::domain::{WishlistFields, WishlistItem};

use super::id_to_hex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub blog_id: String,
    #[serde(default)]
    pub email: String,
}

impl From<WishlistDocument> for WishlistItem {
    fn from(document: WishlistDocument) -> Self {
        Self {
            id: id_to_hex(document.id),
            fields: WishlistFields {
                blog_id: document.blog_id,
                email: document.email,
            },
        }
    }
}

impl From<WishlistFields> for WishlistDocument {
    fn from(fields: WishlistFields) -> Self {
        Self {
            id: None,
            blog_id: fields.blog_id,
            email: fields.email,
        }
    }
}
