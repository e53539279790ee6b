//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod outcome;
mod repository;

pub use auth::{AuthError, IdentityClaims, TokenService};
pub use outcome::{DeleteOutcome, InsertOutcome, UpdateOutcome};
pub use repository::{
    CommentRepository, PostRepository, RECENT_POSTS_LIMIT, UserRepository, WishlistRepository,
};
