use std::time::Duration;

#[cfg(feature = "mongo")]
use mongodb::{
    Client, Collection, Database,
    bson::doc,
    options::ClientOptions,
};

#[cfg(feature = "mongo")]
use super::document::{CommentDocument, PostDocument, UserDocument, WishlistDocument};

pub const BLOG_COLLECTION: &str = "blog";
pub const WISHLIST_COLLECTION: &str = "wishlist";
pub const COMMENT_COLLECTION: &str = "comments";
pub const USER_COLLECTION: &str = "users";

/// Configuration for the document database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database: String,
    pub app_name: String,
    pub connect_timeout: Duration,
}

/// Connected MongoDB client plus the database holding the four collections.
///
/// The client is internally pooled and cheap to clone; every repository
/// gets its own typed collection handle from here.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let posts = MongoPostRepository::new(db.posts());
/// ```
#[cfg(feature = "mongo")]
pub struct DatabaseConnections {
    pub client: Client,
    pub database: Database,
}

#[cfg(feature = "mongo")]
impl DatabaseConnections {
    /// Build the client and confirm the deployment answers a ping.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        tracing::info!("Initializing database connection...");

        let mut options = ClientOptions::parse(&config.uri).await?;
        options.app_name = Some(config.app_name.clone());
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        database.run_command(doc! { "ping": 1 }).await?;
        tracing::info!(database = %config.database, "Database connected");

        Ok(Self { client, database })
    }

    pub fn posts(&self) -> Collection<PostDocument> {
        self.database.collection(BLOG_COLLECTION)
    }

    pub fn wishlist(&self) -> Collection<WishlistDocument> {
        self.database.collection(WISHLIST_COLLECTION)
    }

    pub fn comments(&self) -> Collection<CommentDocument> {
        self.database.collection(COMMENT_COLLECTION)
    }

    pub fn users(&self) -> Collection<UserDocument> {
        self.database.collection(USER_COLLECTION)
    }
}
