//! Ports the startup sequence drives against the backing store.

use std::time::Duration;

use async_trait::async_trait;

use super::PostRepository;
use crate::error::{RepoError, Unreachable};

/// A single, non-retrying round-trip against the store.
#[async_trait]
pub trait ReadinessProbe: Send + Sync {
    async fn probe(&self) -> Result<(), Unreachable>;
}

/// Idempotent "create if absent" schema setup.
#[async_trait]
pub trait SchemaInitializer: Send + Sync {
    async fn ensure_schema(&self) -> Result<(), RepoError>;
}

/// Everything the bootstrap sequence needs from one backing store.
pub trait BootstrapStore: Send + Sync {
    fn prober(&self) -> &dyn ReadinessProbe;
    fn schema(&self) -> &dyn SchemaInitializer;
    fn posts(&self) -> &dyn PostRepository;
}

/// Identifier assignment for new rows.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> String;
}

/// Random UUID v4 identifiers in their 36-character hyphenated form.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Suspends the calling task between retry attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}
