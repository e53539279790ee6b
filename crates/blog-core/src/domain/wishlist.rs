use serde::{Deserialize, Serialize};

/// The writable fields of a wishlist entry: which post, and whose list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistFields {
    #[serde(default)]
    pub blog_id: String,
    #[serde(default)]
    pub email: String,
}

/// A stored wishlist entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: WishlistFields,
}
