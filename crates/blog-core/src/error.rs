//! Storage-level error types.

use thiserror::Error;

/// Repository errors.
///
/// None of these are retried. The HTTP layer maps every variant to a
/// generic server error after logging it.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Malformed identifier: {0}")]
    InvalidId(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
