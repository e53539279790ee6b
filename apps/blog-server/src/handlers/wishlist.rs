//! Wishlist handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::WishlistFields;
use blog_shared::dto::WishlistQuery;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::observability::mask_email;
use crate::state::AppState;

/// POST /wishlist
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<WishlistFields>,
) -> AppResult<HttpResponse> {
    let outcome = state.wishlist.insert(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /wishlist?email= - Protected route, owner only
pub async fn list(
    identity: Identity,
    state: web::Data<AppState>,
    query: web::Query<WishlistQuery>,
) -> AppResult<HttpResponse> {
    if !identity.owns(query.email.as_deref()) {
        tracing::warn!(
            user_email = %mask_email(&identity.email),
            requested_email = %mask_email(query.email.as_deref().unwrap_or_default()),
            "Wishlist ownership check failed"
        );
        return Err(AppError::Forbidden);
    }

    let items = state.wishlist.find_by_email(&identity.email).await?;
    Ok(HttpResponse::Ok().json(items))
}

/// DELETE /wishlist/{id}
pub async fn delete(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let outcome = state.wishlist.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}
