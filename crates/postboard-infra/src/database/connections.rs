use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Connection settings for the MySQL store.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: String,
    pub database: String,
    pub port: u16,
    pub max_connections: u32,
    /// Upper bound on waiting for a pooled connection, which also bounds a
    /// single readiness probe.
    pub acquire_timeout: Duration,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "mysql".to_string(),
            user: "crud_user".to_string(),
            password: "crud_pass".to_string(),
            database: "crud_db".to_string(),
            port: 3306,
            max_connections: 10,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

impl DatabaseConfig {
    /// Connection URL understood by SeaORM.
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }

    /// Connection URL with the password masked, safe for logs.
    pub fn redacted_url(&self) -> String {
        format!(
            "mysql://{}:***@{}:{}/{}",
            self.user, self.host, self.port, self.database
        )
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

/// Build the connection pool without opening any connection.
///
/// Connections are established on first use, up to `max_connections`;
/// further callers wait up to `acquire_timeout` for one to free up.
pub async fn connect_lazy(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    tracing::info!(
        url = %config.redacted_url(),
        max_connections = config.max_connections,
        "Constructing database pool"
    );
    connect_lazy_url(&config.url(), config.max_connections, config.acquire_timeout).await
}

/// Same as [`connect_lazy`] for an arbitrary database URL.
pub async fn connect_lazy_url(
    url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbConn, DbErr> {
    let opts = ConnectOptions::new(url)
        .max_connections(max_connections)
        .connect_timeout(acquire_timeout)
        .acquire_timeout(acquire_timeout)
        .idle_timeout(Duration::from_secs(300))
        .connect_lazy(true)
        .sqlx_logging(true)
        .to_owned();

    Database::connect(opts).await
}
