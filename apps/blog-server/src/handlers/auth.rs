//! Token issuance.

use actix_web::{HttpResponse, web};
use std::sync::Arc;

use blog_core::ports::{IdentityClaims, TokenService};
use blog_shared::dto::TokenIssuedResponse;

use crate::middleware::error::AppResult;
use crate::observability::mask_email;
use crate::state::AppState;

/// POST /jwt
///
/// Signs whatever identity the client supplies and hands it back as the
/// token cookie. Nothing is checked against the user records.
pub async fn issue_token(
    state: web::Data<AppState>,
    token_service: web::Data<Arc<dyn TokenService>>,
    body: web::Json<IdentityClaims>,
) -> AppResult<HttpResponse> {
    let identity = body.into_inner();

    let token = token_service.issue(&identity)?;
    let cookie = state
        .token_cookie
        .build(token, token_service.expiration_seconds());

    tracing::info!(user_email = %mask_email(&identity.email), "Issued token cookie");

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(TokenIssuedResponse { success: true }))
}
