//! Storage gateway implementations - MongoDB and an in-memory fallback.

mod connections;
mod memory;

#[cfg(feature = "mongo")]
pub mod document;
#[cfg(feature = "mongo")]
pub mod filters;
#[cfg(feature = "mongo")]
mod mongo_base;
#[cfg(feature = "mongo")]
mod mongo_repo;

pub use connections::{
    BLOG_COLLECTION, COMMENT_COLLECTION, DatabaseConfig, USER_COLLECTION, WISHLIST_COLLECTION,
};
pub use memory::{
    InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository,
    InMemoryWishlistRepository,
};

#[cfg(feature = "mongo")]
pub use connections::DatabaseConnections;
#[cfg(feature = "mongo")]
pub use mongo_base::MongoRepository;
#[cfg(feature = "mongo")]
pub use mongo_repo::{
    MongoCommentRepository, MongoPostRepository, MongoUserRepository, MongoWishlistRepository,
};
