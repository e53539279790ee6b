//! Blog post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostFields;
use blog_core::ports::RECENT_POSTS_LIMIT;
use blog_shared::dto::SearchQuery;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::observability::mask_email;
use crate::state::AppState;

/// POST /blogs - Protected route
pub async fn create(
    identity: Identity,
    state: web::Data<AppState>,
    body: web::Json<PostFields>,
) -> AppResult<HttpResponse> {
    let outcome = state.posts.insert(body.into_inner()).await?;

    tracing::info!(
        post_id = %outcome.inserted_id,
        user_email = %mask_email(&identity.email),
        "Post created"
    );

    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /blogs
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /blogs/{id}
///
/// A missing post is `200 null`, not a 404.
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.find_by_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// PUT /blogs/{id}
///
/// Replaces every post field; creates the post under `id` if it does not
/// exist yet.
pub async fn replace(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<PostFields>,
) -> AppResult<HttpResponse> {
    let outcome = state
        .posts
        .upsert(&path.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(outcome))
}

/// GET /recentBlogs
pub async fn recent(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_recent(RECENT_POSTS_LIMIT).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /categories
pub async fn categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.posts.distinct_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// GET /searchBlogs?q=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.posts.search_by_title(query.pattern()).await?;
    Ok(HttpResponse::Ok().json(posts))
}
