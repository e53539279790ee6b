//! Storage gateway ports - one trait per collection.
//!
//! Every method maps to exactly one call against the document store.

use async_trait::async_trait;

use crate::domain::{
    Comment, CommentFields, Post, PostFields, User, UserFields, WishlistFields, WishlistItem,
};
use crate::error::RepoError;
use crate::ports::{DeleteOutcome, InsertOutcome, UpdateOutcome};

/// Number of posts returned by [`PostRepository::find_recent`] in the API.
pub const RECENT_POSTS_LIMIT: i64 = 6;

/// Blog post repository.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert(&self, fields: PostFields) -> Result<InsertOutcome, RepoError>;

    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by id. A well-formed id with no record yields `None`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError>;

    /// Replace the post's fields, creating the post under `id` if absent.
    async fn upsert(&self, id: &str, fields: PostFields) -> Result<UpdateOutcome, RepoError>;

    /// Newest posts first by `createdAt`, at most `limit` of them.
    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>, RepoError>;

    /// Unique non-null categories across all posts.
    async fn distinct_categories(&self) -> Result<Vec<String>, RepoError>;

    /// Posts whose title matches `pattern` case-insensitively anywhere in
    /// the string. `None` matches every post.
    async fn search_by_title(&self, pattern: Option<&str>) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, fields: CommentFields) -> Result<InsertOutcome, RepoError>;

    async fn find_by_blog_id(&self, blog_id: &str) -> Result<Vec<Comment>, RepoError>;
}

/// Wishlist repository.
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn insert(&self, fields: WishlistFields) -> Result<InsertOutcome, RepoError>;

    async fn find_by_email(&self, email: &str) -> Result<Vec<WishlistItem>, RepoError>;

    async fn delete(&self, id: &str) -> Result<DeleteOutcome, RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, fields: UserFields) -> Result<InsertOutcome, RepoError>;

    async fn find_all(&self) -> Result<Vec<User>, RepoError>;
}
