//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory storage only
//! - `mongo` - MongoDB storage via the official driver
//! - `auth` - JWT token service

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{
    DatabaseConfig, InMemoryCommentRepository, InMemoryPostRepository, InMemoryUserRepository,
    InMemoryWishlistRepository,
};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};

// Re-exports - MongoDB
#[cfg(feature = "mongo")]
pub use database::{
    DatabaseConnections, MongoCommentRepository, MongoPostRepository, MongoUserRepository,
    MongoWishlistRepository,
};
