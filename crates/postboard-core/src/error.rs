//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Credentials do not match")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// A single readiness probe did not get a response from the store.
#[derive(Debug, Clone, Error)]
#[error("Store unreachable: {0}")]
pub struct Unreachable(pub String);

/// Fatal startup failures. Every variant terminates the process.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Connection pool could not be constructed: {0}")]
    Pool(String),

    #[error("Store still unreachable after {attempts} attempts")]
    Failed {
        attempts: u32,
        #[source]
        last: Unreachable,
    },

    #[error("Schema initialization failed: {0}")]
    Schema(String),

    #[error("Seeding failed: {0}")]
    Seed(String),
}
