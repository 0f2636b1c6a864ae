//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`:
//! the SQL store, the in-memory store, Argon2 hashing and the runtime sleeper.
//!
//! ## Feature Flags
//!
//! - `mysql` (default) - MySQL store via SeaORM
//!
//! Without `mysql` only the in-memory store is built.

pub mod auth;
pub mod memory;
pub mod sleeper;

#[cfg(feature = "mysql")]
pub mod database;

// Re-exports - In-Memory
pub use memory::{InMemoryPostStore, InMemoryUserStore};

pub use auth::Argon2PasswordService;
pub use sleeper::TokioSleeper;

// Re-exports - SQL
#[cfg(feature = "mysql")]
pub use database::{DatabaseConfig, SqlPostRepository, SqlStore, SqlUserRepository};
