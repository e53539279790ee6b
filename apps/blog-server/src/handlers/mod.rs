//! HTTP handlers and route configuration.

mod auth;
mod blogs;
mod comments;
mod health;
mod users;
mod wishlist;

use actix_web::{error, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        error::Error::from(AppError::BadRequest(err.to_string()))
    }))
    // Liveness
    .route("/", web::get().to(health::root))
    .route("/health", web::get().to(health::health_check))
    // Auth
    .route("/jwt", web::post().to(auth::issue_token))
    // Posts
    .route("/blogs", web::post().to(blogs::create))
    .route("/blogs", web::get().to(blogs::list))
    .route("/blogs/{id}", web::get().to(blogs::get))
    .route("/blogs/{id}", web::put().to(blogs::replace))
    .route("/recentBlogs", web::get().to(blogs::recent))
    .route("/categories", web::get().to(blogs::categories))
    .route("/searchBlogs", web::get().to(blogs::search))
    // Comments
    .route("/comments", web::post().to(comments::create))
    .route("/comments", web::get().to(comments::list))
    // Wishlist
    .route("/wishlist", web::post().to(wishlist::create))
    .route("/wishlist", web::get().to(wishlist::list))
    .route("/wishlist/{id}", web::delete().to(wishlist::delete))
    // Users
    .route("/users", web::post().to(users::create))
    .route("/users", web::get().to(users::list))
    .default_service(web::to(health::not_found));
}
