//! Observability module - request IDs and log redaction.

mod pii;
mod request_id;

pub use pii::mask_email;
pub use request_id::{RequestId, RequestIdMiddleware};
