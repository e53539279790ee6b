//! Query documents sent to MongoDB.
//!
//! Kept as plain functions so the exact filters can be checked without a
//! running server.

use mongodb::bson::{self, Document, doc, oid::ObjectId};

use blog_core::domain::PostFields;
use blog_core::error::RepoError;

use super::document::PostDocument;

/// `{ _id: ObjectId(id) }`. A string that is not an ObjectId is a storage
/// failure, never an empty match.
pub fn by_id(id: &str) -> Result<Document, RepoError> {
    let oid = parse_object_id(id)?;
    Ok(doc! { "_id": oid })
}

pub fn parse_object_id(id: &str) -> Result<ObjectId, RepoError> {
    ObjectId::parse_str(id).map_err(|e| RepoError::InvalidId(format!("{id}: {e}")))
}

pub fn all() -> Document {
    doc! {}
}

/// Unanchored, case-insensitive regex on `title`. No pattern matches all.
pub fn title_matches(pattern: Option<&str>) -> Document {
    match pattern {
        Some(pattern) => doc! { "title": { "$regex": pattern, "$options": "i" } },
        None => doc! {},
    }
}

pub fn by_blog_id(blog_id: &str) -> Document {
    doc! { "blogId": blog_id }
}

pub fn by_email(email: &str) -> Document {
    doc! { "email": email }
}

pub fn newest_first() -> Document {
    doc! { "createdAt": -1 }
}

/// `$set` of every writable post field, nulls included, so an update
/// replaces all of them.
pub fn replace_post_fields(fields: PostFields) -> Result<Document, RepoError> {
    let set = bson::to_document(&PostDocument::from(fields))
        .map_err(|e| RepoError::Query(e.to_string()))?;
    Ok(doc! { "$set": set })
}
