//! Startup sequence: pool, reachability, schema, seed.
//!
//! Runs once per process before any request handling is exposed. Every
//! failure is fatal; only the reachability step is retried.

mod retry;
mod seed;

#[cfg(test)]
pub(crate) mod testing;

use std::fmt;
use std::future::Future;

pub use retry::{RetryController, RetryDecision, RetryPolicy};
pub use seed::{SeedLoader, SeedOutcome};

use crate::error::BootstrapError;
use crate::ports::{BootstrapStore, IdGenerator, Sleeper};

/// Bootstrap progress. Transitions are strictly sequential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Uninitialized,
    PoolConstructed,
    Reachable,
    SchemaReady,
    Seeded,
    Ready,
    Failed,
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapState::Uninitialized => "uninitialized",
            BootstrapState::PoolConstructed => "pool_constructed",
            BootstrapState::Reachable => "reachable",
            BootstrapState::SchemaReady => "schema_ready",
            BootstrapState::Seeded => "seeded",
            BootstrapState::Ready => "ready",
            BootstrapState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Summary of a successful bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Probe attempts needed to reach the store.
    pub attempts: u32,
    pub seed: SeedOutcome,
}

/// Sequences pool construction, retrying readiness, schema and seeding.
pub struct Bootstrap<S, G> {
    retry: RetryController<S>,
    seeder: SeedLoader<G>,
    history: Vec<BootstrapState>,
}

impl<S: Sleeper, G: IdGenerator> Bootstrap<S, G> {
    pub fn new(policy: RetryPolicy, sleeper: S, ids: G) -> Self {
        Self {
            retry: RetryController::new(policy, sleeper),
            seeder: SeedLoader::new(ids),
            history: vec![BootstrapState::Uninitialized],
        }
    }

    /// Current state.
    pub fn state(&self) -> BootstrapState {
        self.history
            .last()
            .copied()
            .unwrap_or(BootstrapState::Uninitialized)
    }

    /// Every state visited so far, in order.
    pub fn history(&self) -> &[BootstrapState] {
        &self.history
    }

    /// Run the sequence. `connect` constructs the store (and its pool)
    /// without touching the network. On success the live store is handed
    /// back to the caller; on failure the state ends in `Failed`.
    pub async fn run<St, Fut>(&mut self, connect: Fut) -> Result<(St, BootstrapReport), BootstrapError>
    where
        St: BootstrapStore,
        Fut: Future<Output = Result<St, BootstrapError>>,
    {
        match self.drive(connect).await {
            Ok(ready) => Ok(ready),
            Err(err) => {
                tracing::error!(error = %err, state = %self.state(), "Bootstrap failed");
                self.advance(BootstrapState::Failed);
                Err(err)
            }
        }
    }

    async fn drive<St, Fut>(&mut self, connect: Fut) -> Result<(St, BootstrapReport), BootstrapError>
    where
        St: BootstrapStore,
        Fut: Future<Output = Result<St, BootstrapError>>,
    {
        let store = connect.await?;
        self.advance(BootstrapState::PoolConstructed);

        let attempts = self.retry.wait_until_ready(store.prober()).await?;
        self.advance(BootstrapState::Reachable);

        store
            .schema()
            .ensure_schema()
            .await
            .map_err(|e| BootstrapError::Schema(e.to_string()))?;
        self.advance(BootstrapState::SchemaReady);

        let seed = self.seeder.seed(store.posts()).await?;
        self.advance(BootstrapState::Seeded);

        self.advance(BootstrapState::Ready);
        Ok((store, BootstrapReport { attempts, seed }))
    }

    fn advance(&mut self, next: BootstrapState) {
        tracing::info!(from = %self.state(), to = %next, "Bootstrap transition");
        self.history.push(next);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::testing::{FakeStore, RecordingSleeper, ScriptedProbe, SequentialIds};
    use super::*;
    use crate::domain::SEED_POST_COUNT;
    use crate::ports::PostRepository;

    fn bootstrap(
        retries: u32,
        delay_ms: u64,
    ) -> (Bootstrap<RecordingSleeper, SequentialIds>, RecordingSleeper) {
        let sleeper = RecordingSleeper::default();
        let bootstrap = Bootstrap::new(
            RetryPolicy::new(retries, Duration::from_millis(delay_ms)),
            sleeper.clone(),
            SequentialIds::default(),
        );
        (bootstrap, sleeper)
    }

    #[tokio::test]
    async fn test_reaches_ready_after_transient_failures_and_seeds_once() {
        let (mut first, sleeper) = bootstrap(3, 10);
        let store = FakeStore::new(ScriptedProbe::failing(2));

        let (store, report) = first.run(async move { Ok(store) }).await.unwrap();

        assert_eq!(first.state(), BootstrapState::Ready);
        assert_eq!(
            first.history(),
            &[
                BootstrapState::Uninitialized,
                BootstrapState::PoolConstructed,
                BootstrapState::Reachable,
                BootstrapState::SchemaReady,
                BootstrapState::Seeded,
                BootstrapState::Ready,
            ]
        );
        assert_eq!(report.attempts, 3);
        assert_eq!(report.seed, SeedOutcome::Seeded(SEED_POST_COUNT));
        assert_eq!(sleeper.slept(), vec![Duration::from_millis(10); 2]);
        assert_eq!(store.posts.count().await.unwrap(), SEED_POST_COUNT as u64);

        // Restart against the same store: no duplication.
        let (mut second, _) = bootstrap(3, 10);
        let (store, report) = second.run(async move { Ok(store) }).await.unwrap();

        assert_eq!(second.state(), BootstrapState::Ready);
        assert_eq!(
            report.seed,
            SeedOutcome::Skipped {
                existing: SEED_POST_COUNT as u64
            }
        );
        assert_eq!(store.posts.count().await.unwrap(), SEED_POST_COUNT as u64);
        assert_eq!(store.schema_calls(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_retries_fail_before_schema() {
        let (mut bootstrap, sleeper) = bootstrap(3, 10);
        let store = std::sync::Arc::new(FakeStore::new(ScriptedProbe::never()));

        let handle = SharedStore(store.clone());

        let err = bootstrap
            .run(async move { Ok(handle) })
            .await
            .err()
            .unwrap();

        assert!(matches!(err, BootstrapError::Failed { attempts: 3, .. }));
        assert_eq!(
            bootstrap.history(),
            &[
                BootstrapState::Uninitialized,
                BootstrapState::PoolConstructed,
                BootstrapState::Failed,
            ]
        );
        assert_eq!(store.probe.calls(), 3);
        assert_eq!(sleeper.slept().len(), 2);
        assert_eq!(store.schema_calls(), 0);
        assert!(store.posts.rows().is_empty());
    }

    #[tokio::test]
    async fn test_schema_error_is_fatal_and_skips_seed() {
        let (mut bootstrap, _) = bootstrap(3, 10);
        let store = std::sync::Arc::new(FakeStore::with_broken_schema(ScriptedProbe::failing(0)));

        let handle = SharedStore(store.clone());

        let err = bootstrap
            .run(async move { Ok(handle) })
            .await
            .err()
            .unwrap();

        assert!(matches!(err, BootstrapError::Schema(_)));
        assert_eq!(bootstrap.state(), BootstrapState::Failed);
        assert!(!bootstrap.history().contains(&BootstrapState::SchemaReady));
        assert_eq!(store.posts.insert_calls(), 0);
    }

    #[tokio::test]
    async fn test_pool_construction_error_never_probes() {
        let (mut bootstrap, _) = bootstrap(3, 10);

        let err = bootstrap
            .run(async { Err::<FakeStore, _>(BootstrapError::Pool("bad url".to_string())) })
            .await
            .err()
            .unwrap();

        assert!(matches!(err, BootstrapError::Pool(_)));
        assert_eq!(
            bootstrap.history(),
            &[BootstrapState::Uninitialized, BootstrapState::Failed]
        );
    }

    /// Lets a test keep inspecting a store after the bootstrap consumed it.
    struct SharedStore(std::sync::Arc<FakeStore>);

    impl BootstrapStore for SharedStore {
        fn prober(&self) -> &dyn crate::ports::ReadinessProbe {
            self.0.prober()
        }

        fn schema(&self) -> &dyn crate::ports::SchemaInitializer {
            self.0.schema()
        }

        fn posts(&self) -> &dyn PostRepository {
            self.0.posts()
        }
    }
}
