//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::error::RepoError;
use blog_core::ports::{CommentRepository, PostRepository, UserRepository, WishlistRepository};
use blog_infra::database::{
    DatabaseConfig, InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository,
    InMemoryWishlistRepository,
};

#[cfg(feature = "mongo")]
use blog_infra::database::{
    DatabaseConnections, MongoCommentRepository, MongoPostRepository, MongoUserRepository,
    MongoWishlistRepository,
};

use crate::middleware::auth::TokenCookie;

/// Shared application state.
///
/// One long-lived storage handle per collection; the request handlers
/// never construct their own.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub wishlist: Arc<dyn WishlistRepository>,
    pub users: Arc<dyn UserRepository>,
    pub token_cookie: TokenCookie,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    ///
    /// A configured database that cannot be reached is an error; the
    /// in-memory store is used only when no database is configured.
    pub async fn new(
        db_config: Option<&DatabaseConfig>,
        token_cookie: TokenCookie,
    ) -> Result<Self, RepoError> {
        let Some(config) = db_config else {
            tracing::warn!("No database configured. Running in in-memory mode; data is lost on restart.");
            return Ok(Self::in_memory(token_cookie));
        };

        let state = Self::connect(config, token_cookie).await?;
        tracing::info!("Application state initialized");
        Ok(state)
    }

    #[cfg(feature = "mongo")]
    async fn connect(config: &DatabaseConfig, token_cookie: TokenCookie) -> Result<Self, RepoError> {
        let db = DatabaseConnections::init(config).await.map_err(|e| {
            tracing::error!(database = %config.database, "Failed to connect to database: {}", e);
            RepoError::Connection(e.to_string())
        })?;
        Ok(Self::mongo(&db, token_cookie))
    }

    #[cfg(not(feature = "mongo"))]
    async fn connect(config: &DatabaseConfig, _token_cookie: TokenCookie) -> Result<Self, RepoError> {
        tracing::error!(
            database = %config.database,
            "A database is configured but this build has no mongo support"
        );
        Err(RepoError::Connection(
            "built without the mongo feature".to_string(),
        ))
    }

    #[cfg(feature = "mongo")]
    fn mongo(db: &DatabaseConnections, token_cookie: TokenCookie) -> Self {
        Self {
            posts: Arc::new(MongoPostRepository::new(db.posts())),
            comments: Arc::new(MongoCommentRepository::new(db.comments())),
            wishlist: Arc::new(MongoWishlistRepository::new(db.wishlist())),
            users: Arc::new(MongoUserRepository::new(db.users())),
            token_cookie,
        }
    }

    /// State backed entirely by in-memory repositories.
    pub fn in_memory(token_cookie: TokenCookie) -> Self {
        Self {
            posts: Arc::new(InMemoryPostRepository::new()),
            comments: Arc::new(InMemoryCommentRepository::new()),
            wishlist: Arc::new(InMemoryWishlistRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
            token_cookie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use blog_core::domain::PostFields;

    #[actix_web::test]
    async fn test_without_database_uses_in_memory_store() {
        let state = AppState::new(None, TokenCookie::new(false)).await.unwrap();

        let outcome = state.posts.insert(PostFields::titled("kept")).await.unwrap();
        let post = state.posts.find_by_id(&outcome.inserted_id).await.unwrap();
        assert_eq!(post.unwrap().fields.title.as_deref(), Some("kept"));
    }

    #[cfg(feature = "mongo")]
    #[actix_web::test]
    async fn test_unreachable_database_is_an_error() {
        let config = DatabaseConfig {
            uri: "mongodb://127.0.0.1:1/?directConnection=true".to_string(),
            database: "blogDB".to_string(),
            app_name: "blog-server-test".to_string(),
            connect_timeout: std::time::Duration::from_millis(200),
        };

        let result = AppState::new(Some(&config), TokenCookie::new(false)).await;

        assert!(matches!(result, Err(RepoError::Connection(_))));
    }
}
