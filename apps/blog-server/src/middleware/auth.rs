//! Access gate: the token cookie and the authenticated identity extractor.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use std::future::{Ready, ready};
use std::sync::Arc;

use blog_core::ports::{AuthError, IdentityClaims, TokenService};

use crate::observability::RequestId;

/// Name of the cookie carrying the token.
pub const TOKEN_COOKIE: &str = "token";

/// How the token cookie is written.
///
/// Always HTTP-only. In production the cookie is `Secure` and
/// `SameSite=None` so the separately hosted client can send it back;
/// locally it is `SameSite=Strict` over plain HTTP.
#[derive(Debug, Clone, Copy)]
pub struct TokenCookie {
    pub secure: bool,
}

impl TokenCookie {
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    pub fn build(&self, token: String, max_age_seconds: i64) -> Cookie<'static> {
        let same_site = if self.secure {
            SameSite::None
        } else {
            SameSite::Strict
        };

        Cookie::build(TOKEN_COOKIE, token)
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(same_site)
            .max_age(Duration::seconds(max_age_seconds))
            .finish()
    }
}

/// Authenticated caller identity extractor.
///
/// Use this in handlers to require a valid token cookie:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, {}!", identity.email)
/// }
/// ```
/// Extraction runs before the handler body, so a rejected request never
/// reaches storage.
#[derive(Debug, Clone)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    /// Ownership check: does this identity own resources filed under `email`?
    pub fn owns(&self, email: Option<&str>) -> bool {
        email == Some(self.email.as_str())
    }
}

impl From<IdentityClaims> for Identity {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            email: claims.email,
        }
    }
}

/// Error type for authentication failures.
#[derive(Debug)]
pub struct AuthenticationError {
    pub error: AuthError,
    pub request_id: Option<String>,
}

impl std::fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl actix_web::ResponseError for AuthenticationError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        match &self.error {
            AuthError::Signing(_) => actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => actix_web::http::StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        use blog_shared::ErrorResponse;

        let mut error = match &self.error {
            AuthError::Signing(_) => ErrorResponse::internal_error(),
            _ => ErrorResponse::unauthorized(),
        };
        if let Some(request_id) = &self.request_id {
            error = error.with_request_id(request_id.clone());
        }

        actix_web::HttpResponse::build(self.status_code()).json(error)
    }
}

impl FromRequest for Identity {
    type Error = AuthenticationError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let reject = |error: AuthError| {
            tracing::debug!(reason = %error, path = %req.path(), "Rejected unauthenticated request");
            let request_id = req
                .extensions()
                .get::<RequestId>()
                .map(|id| id.as_str().to_string());
            ready(Err(AuthenticationError { error, request_id }))
        };

        let token_service = match req.app_data::<actix_web::web::Data<Arc<dyn TokenService>>>() {
            Some(service) => service,
            None => {
                tracing::error!("TokenService not found in app data");
                return reject(AuthError::InvalidToken(
                    "Server configuration error".to_string(),
                ));
            }
        };

        let cookie = match req.cookie(TOKEN_COOKIE) {
            Some(cookie) => cookie,
            None => return reject(AuthError::MissingToken),
        };

        match token_service.verify(cookie.value()) {
            Ok(claims) => ready(Ok(Identity::from(claims))),
            Err(e) => reject(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_development_cookie_attributes() {
        let cookie = TokenCookie::new(false).build("abc".to_string(), 60);

        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
    }

    #[test]
    fn test_production_cookie_is_secure() {
        let cookie = TokenCookie::new(true).build("abc".to_string(), 60);

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(60)));
    }

    #[test]
    fn test_ownership_requires_exact_email() {
        let identity = Identity::from(IdentityClaims::with_email("a@x.com"));

        assert!(identity.owns(Some("a@x.com")));
        assert!(!identity.owns(Some("b@x.com")));
        assert!(!identity.owns(None));
    }
}
