//! User document for the `users` collection.
//!
//! Users are loosely shaped, so unknown fields are kept as raw BSON.

use mongodb::bson::{self, Bson, Document, oid::ObjectId};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use blog_core::domain::{User, UserFields};

use super::id_to_hex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(flatten)]
    pub extra: Document,
}

impl From<UserDocument> for User {
    fn from(document: UserDocument) -> Self {
        let extra: Map<String, Value> = document
            .extra
            .into_iter()
            .map(|(key, value)| (key, value.into_relaxed_extjson()))
            .collect();

        Self {
            id: id_to_hex(document.id),
            fields: UserFields {
                name: document.name,
                email: document.email,
                photo_url: document.photo_url,
                extra,
            },
        }
    }
}

impl From<UserFields> for UserDocument {
    fn from(fields: UserFields) -> Self {
        let extra: Document = fields
            .extra
            .into_iter()
            .map(|(key, value)| {
                let value = bson::to_bson(&value).unwrap_or(Bson::Null);
                (key, value)
            })
            .collect();

        Self {
            id: None,
            name: fields.name,
            email: fields.email,
            photo_url: fields.photo_url,
            extra,
        }
    }
}
