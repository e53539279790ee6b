//! User record handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::UserFields;

use crate::middleware::error::AppResult;
use crate::observability::mask_email;
use crate::state::AppState;

/// POST /users
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<UserFields>,
) -> AppResult<HttpResponse> {
    let fields = body.into_inner();
    let masked = mask_email(fields.email.as_deref().unwrap_or_default());

    let outcome = state.users.insert(fields).await?;
    tracing::info!(user_id = %outcome.inserted_id, user_email = %masked, "User record created");

    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.users.find_all().await?;
    Ok(HttpResponse::Ok().json(users))
}
