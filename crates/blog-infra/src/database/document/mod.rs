//! MongoDB document shapes and their conversions to domain records.
//!
//! Documents use native BSON types (`ObjectId`, BSON dates); the domain
//! types use hex strings and chrono timestamps. Timestamps are read as raw
//! BSON because older records hold them as strings.

pub mod comment;
pub mod post;
pub mod user;
pub mod wishlist;

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson, oid::ObjectId};

use blog_core::domain::Timestamp;

pub use comment::CommentDocument;
pub use post::PostDocument;
pub use user::UserDocument;
pub use wishlist::WishlistDocument;

pub(crate) fn id_to_hex(id: Option<ObjectId>) -> String {
    id.map(|oid| oid.to_hex()).unwrap_or_default()
}

/// Render a driver-reported id. Ids generated by the driver are ObjectIds;
/// anything else falls back to its relaxed extended-JSON text.
pub(crate) fn bson_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn to_bson_datetime(at: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis(at.timestamp_millis())
}

pub(crate) fn from_bson_datetime(at: bson::DateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(at.timestamp_millis())
}

pub(crate) fn timestamp_to_bson(at: Timestamp) -> Bson {
    match at {
        Timestamp::Date(at) => Bson::DateTime(to_bson_datetime(at)),
        Timestamp::Text(text) => Bson::String(text),
    }
}

/// A stored date stays a date and a stored string stays that string. Other
/// BSON values are rendered as relaxed extended JSON text.
pub(crate) fn timestamp_from_bson(value: Bson) -> Option<Timestamp> {
    match value {
        Bson::Null | Bson::Undefined => None,
        Bson::DateTime(at) => Some(
            from_bson_datetime(at)
                .map(Timestamp::Date)
                .unwrap_or_else(|| Timestamp::Text(at.to_string())),
        ),
        Bson::String(text) => Some(Timestamp::Text(text)),
        other => Some(Timestamp::Text(other.into_relaxed_extjson().to_string())),
    }
}
