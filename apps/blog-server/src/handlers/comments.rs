//! Comment handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::CommentFields;
use blog_shared::dto::CommentQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /comments
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CommentFields>,
) -> AppResult<HttpResponse> {
    let outcome = state.comments.insert(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /comments?blogId=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<CommentQuery>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.find_by_blog_id(&query.blog_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}
