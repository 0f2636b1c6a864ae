//! The SQL store as seen by the startup sequence: probe, schema, posts.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DbConn, Statement};

use postboard_core::error::{BootstrapError, RepoError, Unreachable};
use postboard_core::ports::{BootstrapStore, PostRepository, ReadinessProbe, SchemaInitializer};

use super::connections::{DatabaseConfig, connect_lazy, connect_lazy_url};
use super::sql_base::map_db_err;
use super::sql_repo::{SqlPostRepository, SqlUserRepository};

pub(crate) const CREATE_POSTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS posts (
    id CHAR(36) PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    content TEXT NOT NULL,
    likes INT NOT NULL DEFAULT 0,
    comments INT NOT NULL DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

pub(crate) const CREATE_USERS_TABLE: &str = "CREATE TABLE IF NOT EXISTS users (
    id CHAR(36) PRIMARY KEY,
    user_name VARCHAR(100) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL
)";

pub(crate) const PROBE_QUERY: &str = "SELECT 1";

/// Owns the connection pool once it has been constructed. Every clone and
/// every repository handed out shares the same pool.
#[derive(Clone)]
pub struct SqlStore {
    db: Arc<DbConn>,
    posts: SqlPostRepository,
}

impl SqlStore {
    pub fn new(db: DbConn) -> Self {
        let db = Arc::new(db);
        Self {
            posts: SqlPostRepository::new(Arc::clone(&db)),
            db,
        }
    }

    /// Construct the pool for `config`. No connection is opened.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, BootstrapError> {
        let db = connect_lazy(config)
            .await
            .map_err(|e| BootstrapError::Pool(e.to_string()))?;
        Ok(Self::new(db))
    }

    /// Construct the pool for an explicit URL (any backend SeaORM supports).
    pub async fn connect_url(
        url: &str,
        max_connections: u32,
        acquire_timeout: std::time::Duration,
    ) -> Result<Self, BootstrapError> {
        let db = connect_lazy_url(url, max_connections, acquire_timeout)
            .await
            .map_err(|e| BootstrapError::Pool(e.to_string()))?;
        Ok(Self::new(db))
    }

    /// Take the pool back. `None` while a clone or repository still holds it.
    #[cfg(test)]
    pub(crate) fn into_conn(self) -> Option<DbConn> {
        let Self { db, posts } = self;
        drop(posts);
        Arc::try_unwrap(db).ok()
    }

    pub fn post_repository(&self) -> SqlPostRepository {
        self.posts.clone()
    }

    pub fn user_repository(&self) -> SqlUserRepository {
        SqlUserRepository::new(Arc::clone(&self.db))
    }

    fn statement(&self, sql: &str) -> Statement {
        Statement::from_string(self.db.get_database_backend(), sql)
    }
}

#[async_trait]
impl ReadinessProbe for SqlStore {
    async fn probe(&self) -> Result<(), Unreachable> {
        self.db
            .query_one(self.statement(PROBE_QUERY))
            .await
            .map(|_| ())
            .map_err(|e| Unreachable(e.to_string()))
    }
}

#[async_trait]
impl SchemaInitializer for SqlStore {
    async fn ensure_schema(&self) -> Result<(), RepoError> {
        for ddl in [CREATE_POSTS_TABLE, CREATE_USERS_TABLE] {
            self.db
                .execute(self.statement(ddl))
                .await
                .map_err(map_db_err)?;
        }

        tracing::info!("Schema ensured");
        Ok(())
    }
}

impl BootstrapStore for SqlStore {
    fn prober(&self) -> &dyn ReadinessProbe {
        self
    }

    fn schema(&self) -> &dyn SchemaInitializer {
        self
    }

    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }
}
