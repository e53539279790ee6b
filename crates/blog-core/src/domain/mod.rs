//! Domain entities - the records stored in the four collections.
//!
//! Each entity is split into the caller-supplied fields (`*Fields`) and the
//! stored record, which adds the storage-assigned identifier.

mod comment;
mod post;
mod timestamp;
mod user;
mod wishlist;

pub use comment::{Comment, CommentFields};
pub use post::{Post, PostFields};
pub use timestamp::Timestamp;
pub use user::{User, UserFields};
pub use wishlist::{WishlistFields, WishlistItem};
