//! # Blog Core
//!
//! The domain layer of the blog backend.
//! Entities, storage outcomes and the ports the infrastructure must implement.
//! No database or HTTP dependencies live here.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
