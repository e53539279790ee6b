//! Authentication ports.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The identity embedded in an issued token and trusted on later requests
/// without going back to storage.
///
/// `email` is the only field the server itself reads (for the wishlist
/// ownership check). Every other field the client supplied rides along in
/// `extra` and comes back unchanged from verification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdentityClaims {
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IdentityClaims {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// Token service trait for signed, time-limited identity tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for the given identity.
    fn issue(&self, claims: &IdentityClaims) -> Result<String, AuthError>;

    /// Validate a token and recover the identity it carries.
    fn verify(&self, token: &str) -> Result<IdentityClaims, AuthError>;

    /// Lifetime of an issued token, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing token cookie")]
    MissingToken,

    #[error("Signing failed: {0}")]
    Signing(String),
}
