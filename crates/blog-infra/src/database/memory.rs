//! In-memory repositories - used when no database is configured, and as the
//! storage fake in tests.
//!
//! Records live in insertion order, like a collection scan without an index.
//! Identifiers are 24 hex characters so they look and validate like the
//! ObjectIds the real store hands out.
//! Note: Data is lost on process restart.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::Utc;
use regex::RegexBuilder;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{
    Comment, CommentFields, Post, PostFields, User, UserFields, WishlistFields, WishlistItem,
};
use blog_core::error::RepoError;
use blog_core::ports::{
    CommentRepository, DeleteOutcome, InsertOutcome, PostRepository, UpdateOutcome,
    UserRepository, WishlistRepository,
};

/// Generate an ObjectId-shaped identifier: a 4-byte timestamp followed by
/// 8 random bytes, hex encoded.
fn new_record_id() -> String {
    let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
    let random = Uuid::new_v4().simple().to_string();
    format!("{seconds:08x}{}", &random[..16])
}

/// Validate an id and bring it to the lowercase form ObjectIds print in.
fn parse_record_id(id: &str) -> Result<String, RepoError> {
    if id.len() == 24 && id.bytes().all(|b| b.is_ascii_hexdigit()) {
        Ok(id.to_ascii_lowercase())
    } else {
        Err(RepoError::InvalidId(id.to_string()))
    }
}

/// A single in-memory collection.
struct Records<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> Records<T> {
    fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    async fn push(&self, item: T) {
        self.items.write().await.push(item);
    }

    async fn filtered(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let items = self.items.read().await;
        items.iter().filter(|item| keep(item)).cloned().collect()
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    posts: Records<Post>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: Records::new(),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, fields: PostFields) -> Result<InsertOutcome, RepoError> {
        let id = new_record_id();
        self.posts
            .push(Post {
                id: id.clone(),
                fields,
            })
            .await;
        Ok(InsertOutcome::acknowledged(id))
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.posts.filtered(|_| true).await)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, RepoError> {
        let id = parse_record_id(id)?;
        Ok(self.posts.filtered(|post| post.id == id).await.pop())
    }

    async fn upsert(&self, id: &str, fields: PostFields) -> Result<UpdateOutcome, RepoError> {
        let id = parse_record_id(id)?;
        let mut posts = self.posts.items.write().await;

        if let Some(existing) = posts.iter_mut().find(|post| post.id == id) {
            let modified = existing.fields != fields;
            existing.fields = fields;
            return Ok(UpdateOutcome {
                acknowledged: true,
                matched_count: 1,
                modified_count: u64::from(modified),
                upserted_count: 0,
                upserted_id: None,
            });
        }

        posts.push(Post {
            id: id.clone(),
            fields,
        });
        Ok(UpdateOutcome {
            acknowledged: true,
            matched_count: 0,
            modified_count: 0,
            upserted_count: 1,
            upserted_id: Some(id),
        })
    }

    async fn find_recent(&self, limit: i64) -> Result<Vec<Post>, RepoError> {
        let mut posts = self.posts.filtered(|_| true).await;
        posts.sort_by(|a, b| b.fields.created_at.cmp(&a.fields.created_at));
        posts.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(posts)
    }

    async fn distinct_categories(&self) -> Result<Vec<String>, RepoError> {
        let posts = self.posts.items.read().await;
        let categories: BTreeSet<String> = posts
            .iter()
            .filter_map(|post| post.fields.category.clone())
            .collect();
        Ok(categories.into_iter().collect())
    }

    async fn search_by_title(&self, pattern: Option<&str>) -> Result<Vec<Post>, RepoError> {
        let Some(pattern) = pattern else {
            return self.find_all().await;
        };

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(self
            .posts
            .filtered(|post| {
                post.fields
                    .title
                    .as_deref()
                    .is_some_and(|title| regex.is_match(title))
            })
            .await)
    }
}

/// In-memory comment repository.
pub struct InMemoryCommentRepository {
    comments: Records<Comment>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Records::new(),
        }
    }
}

impl Default for InMemoryCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn insert(&self, fields: CommentFields) -> Result<InsertOutcome, RepoError> {
        let id = new_record_id();
        self.comments
            .push(Comment {
                id: id.clone(),
                fields,
            })
            .await;
        Ok(InsertOutcome::acknowledged(id))
    }

    async fn find_by_blog_id(&self, blog_id: &str) -> Result<Vec<Comment>, RepoError> {
        Ok(self
            .comments
            .filtered(|comment| comment.fields.blog_id == blog_id)
            .await)
    }
}

/// In-memory wishlist repository.
pub struct InMemoryWishlistRepository {
    items: Records<WishlistItem>,
}

impl InMemoryWishlistRepository {
    pub fn new() -> Self {
        Self {
            items: Records::new(),
        }
    }
}

impl Default for InMemoryWishlistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WishlistRepository for InMemoryWishlistRepository {
    async fn insert(&self, fields: WishlistFields) -> Result<InsertOutcome, RepoError> {
        let id = new_record_id();
        self.items
            .push(WishlistItem {
                id: id.clone(),
                fields,
            })
            .await;
        Ok(InsertOutcome::acknowledged(id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Vec<WishlistItem>, RepoError> {
        Ok(self
            .items
            .filtered(|item| item.fields.email == email)
            .await)
    }

    async fn delete(&self, id: &str) -> Result<DeleteOutcome, RepoError> {
        let id = parse_record_id(id)?;
        let mut items = self.items.items.write().await;
        let before = items.len();
        if let Some(position) = items.iter().position(|item| item.id == id) {
            items.remove(position);
        }

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: (before - items.len()) as u64,
        })
    }
}

/// In-memory user repository.
pub struct InMemoryUserRepository {
    users: Records<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Records::new(),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, fields: UserFields) -> Result<InsertOutcome, RepoError> {
        let id = new_record_id();
        self.users
            .push(User {
                id: id.clone(),
                fields,
            })
            .await;
        Ok(InsertOutcome::acknowledged(id))
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.users.filtered(|_| true).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn post_at(title: &str, category: &str, minutes: i64) -> PostFields {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        PostFields {
            category: Some(category.to_string()),
            created_at: Some((base + TimeDelta::minutes(minutes)).into()),
            ..PostFields::titled(title)
        }
    }

    #[test]
    fn test_record_ids_look_like_object_ids() {
        let id = new_record_id();
        assert_eq!(parse_record_id(&id).unwrap(), id);
        assert_ne!(id, new_record_id());
        assert!(matches!(
            parse_record_id("not-an-id"),
            Err(RepoError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_insert_then_find_by_id() {
        let repo = InMemoryPostRepository::new();
        let outcome = repo.insert(PostFields::titled("Hello")).await.unwrap();

        assert!(outcome.acknowledged);
        let post = repo.find_by_id(&outcome.inserted_id).await.unwrap().unwrap();
        assert_eq!(post.fields.title.as_deref(), Some("Hello"));
    }

    #[tokio::test]
    async fn test_find_by_unknown_id_is_none() {
        let repo = InMemoryPostRepository::new();
        let found = repo.find_by_id(&new_record_id()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_malformed_id_fails() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(
            repo.find_by_id("xyz").await,
            Err(RepoError::InvalidId(_))
        ));
    }

    #[tokio::test]
    async fn test_upsert_creates_then_replaces() {
        let repo = InMemoryPostRepository::new();
        let id = new_record_id();

        let created = repo.upsert(&id, PostFields::titled("First")).await.unwrap();
        assert_eq!(created.upserted_id.as_deref(), Some(id.as_str()));
        assert_eq!(created.matched_count, 0);
        assert_eq!(created.upserted_count, 1);

        let replacement = PostFields {
            category: Some("tech".to_string()),
            ..PostFields::titled("Second")
        };
        let replaced = repo.upsert(&id, replacement.clone()).await.unwrap();
        assert_eq!(replaced.matched_count, 1);
        assert_eq!(replaced.modified_count, 1);
        assert!(replaced.upserted_id.is_none());

        let post = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(post.fields, replacement);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_ids_are_matched_case_insensitively() {
        let repo = InMemoryPostRepository::new();
        let upper = "65F0C0FFEE0000000000ABCD";

        let created = repo.upsert(upper, PostFields::titled("Upper")).await.unwrap();
        assert_eq!(
            created.upserted_id.as_deref(),
            Some("65f0c0ffee0000000000abcd")
        );

        let post = repo
            .find_by_id("65f0c0ffee0000000000abcd")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(post.id, "65f0c0ffee0000000000abcd");

        let replaced = repo.upsert(upper, PostFields::titled("Again")).await.unwrap();
        assert_eq!(replaced.matched_count, 1);
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_find_recent_is_newest_first_and_bounded() {
        let repo = InMemoryPostRepository::new();
        for minute in [5, 1, 9, 3, 7, 2, 8, 4] {
            repo.insert(post_at(&format!("p{minute}"), "misc", minute))
                .await
                .unwrap();
        }

        let recent = repo.find_recent(6).await.unwrap();
        let titles: Vec<_> = recent
            .iter()
            .map(|p| p.fields.title.clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["p9", "p8", "p7", "p5", "p4", "p3"]);
    }

    #[tokio::test]
    async fn test_distinct_categories() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post_at("a", "tech", 0)).await.unwrap();
        repo.insert(post_at("b", "travel", 1)).await.unwrap();
        repo.insert(post_at("c", "tech", 2)).await.unwrap();
        repo.insert(PostFields::titled("uncategorised")).await.unwrap();

        let categories = repo.distinct_categories().await.unwrap();
        assert_eq!(categories, vec!["tech".to_string(), "travel".to_string()]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let repo = InMemoryPostRepository::new();
        repo.insert(PostFields::titled("Learning FOOd photography"))
            .await
            .unwrap();
        repo.insert(PostFields::titled("buffoon")).await.unwrap();
        repo.insert(PostFields::titled("Other")).await.unwrap();

        let hits = repo.search_by_title(Some("foo")).await.unwrap();
        assert_eq!(hits.len(), 2);

        let everything = repo.search_by_title(None).await.unwrap();
        assert_eq!(everything.len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_search_pattern_is_a_storage_error() {
        let repo = InMemoryPostRepository::new();
        assert!(matches!(
            repo.search_by_title(Some("(")).await,
            Err(RepoError::Query(_))
        ));
    }

    #[tokio::test]
    async fn test_comments_filtered_by_blog_id() {
        let repo = InMemoryCommentRepository::new();
        for blog_id in ["a", "b", "a"] {
            repo.insert(CommentFields {
                blog_id: blog_id.to_string(),
                comment: Some("nice".to_string()),
                user_name: None,
                user_email: None,
                user_image: None,
                created_at: None,
            })
            .await
            .unwrap();
        }

        assert_eq!(repo.find_by_blog_id("a").await.unwrap().len(), 2);
        assert!(repo.find_by_blog_id("missing").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_wishlist_insert_list_delete() {
        let repo = InMemoryWishlistRepository::new();
        let mine = repo
            .insert(WishlistFields {
                blog_id: "b1".to_string(),
                email: "me@example.com".to_string(),
            })
            .await
            .unwrap();
        repo.insert(WishlistFields {
            blog_id: "b1".to_string(),
            email: "you@example.com".to_string(),
        })
        .await
        .unwrap();

        assert_eq!(repo.find_by_email("me@example.com").await.unwrap().len(), 1);

        let deleted = repo.delete(&mine.inserted_id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);
        let again = repo.delete(&mine.inserted_id).await.unwrap();
        assert_eq!(again.deleted_count, 0);
        assert!(repo.find_by_email("me@example.com").await.unwrap().is_empty());
    }
}
