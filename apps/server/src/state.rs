//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::bootstrap::{Bootstrap, BootstrapReport};
use postboard_core::error::BootstrapError;
use postboard_core::ports::{
    IdGenerator, PasswordService, PostRepository, ReadinessProbe, UserRepository, UuidGenerator,
};
use postboard_infra::{Argon2PasswordService, InMemoryPostStore, InMemoryUserStore, TokioSleeper};

#[cfg(feature = "mysql")]
use postboard_infra::SqlStore;

use crate::config::{AppConfig, StoreKind};
use crate::views::Views;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub users: Arc<dyn UserRepository>,
    pub probe: Arc<dyn ReadinessProbe>,
    pub passwords: Arc<dyn PasswordService>,
    pub ids: Arc<dyn IdGenerator>,
    pub views: Views,
    pub store: StoreKind,
}

impl AppState {
    /// Run the startup sequence against the configured store and build the
    /// state from the store it hands back. Nothing is served on failure.
    pub async fn bootstrap(config: &AppConfig, views: Views) -> Result<Self, BootstrapError> {
        let mut bootstrap = Bootstrap::new(config.retry, TokioSleeper, UuidGenerator);

        let state = match config.store {
            StoreKind::Memory => {
                let (store, report) = bootstrap
                    .run(async { Ok(InMemoryPostStore::new()) })
                    .await?;
                log_report(&report);

                let store = Arc::new(store);
                Self::new(
                    store.clone(),
                    Arc::new(InMemoryUserStore::new()),
                    store,
                    views,
                    StoreKind::Memory,
                )
            }

            #[cfg(feature = "mysql")]
            StoreKind::MySql => {
                let (store, report) = bootstrap.run(SqlStore::connect(&config.database)).await?;
                log_report(&report);

                Self::new(
                    Arc::new(store.post_repository()),
                    Arc::new(store.user_repository()),
                    Arc::new(store),
                    views,
                    StoreKind::MySql,
                )
            }

            #[cfg(not(feature = "mysql"))]
            StoreKind::MySql => {
                return Err(BootstrapError::Pool(
                    "built without the `mysql` feature; set STORE=memory".to_string(),
                ));
            }
        };

        tracing::info!(store = %state.store, "Application state initialized");
        Ok(state)
    }

    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        probe: Arc<dyn ReadinessProbe>,
        views: Views,
        store: StoreKind,
    ) -> Self {
        Self {
            posts,
            users,
            probe,
            passwords: Arc::new(Argon2PasswordService::new()),
            ids: Arc::new(UuidGenerator),
            views,
            store,
        }
    }

    /// Fresh in-memory state, as used by handler tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryPostStore::new());
        Self::new(
            store.clone(),
            Arc::new(InMemoryUserStore::new()),
            store,
            Views::new().expect("templates compile"),
            StoreKind::Memory,
        )
    }
}

fn log_report(report: &BootstrapReport) {
    tracing::info!(
        attempts = report.attempts,
        seed = ?report.seed,
        "Store ready"
    );
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use postboard_core::bootstrap::RetryPolicy;
    use postboard_core::domain::SEED_POST_COUNT;

    use super::*;

    #[actix_web::test]
    async fn test_memory_bootstrap_seeds_posts() {
        let config = AppConfig {
            store: StoreKind::Memory,
            retry: RetryPolicy::new(1, Duration::from_millis(1)),
            ..AppConfig::from_lookup(|_| None)
        };

        let state = AppState::bootstrap(&config, Views::new().unwrap())
            .await
            .unwrap();

        assert_eq!(state.posts.count().await.unwrap(), SEED_POST_COUNT as u64);
        assert_eq!(state.users.count().await.unwrap(), 0);
        assert!(state.probe.probe().await.is_ok());
    }

    #[cfg(not(feature = "mysql"))]
    #[actix_web::test]
    async fn test_mysql_store_needs_the_feature() {
        let config = AppConfig {
            store: StoreKind::MySql,
            ..AppConfig::from_lookup(|_| None)
        };

        let result = AppState::bootstrap(&config, Views::new().unwrap()).await;

        assert!(matches!(result, Err(BootstrapError::Pool(_))));
    }
}
