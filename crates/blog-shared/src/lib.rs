//! # Blog Shared
//!
//! Wire types shared between the server and its clients: query strings,
//! small response bodies and the problem-details error format.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
