//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use postboard_core::bootstrap::RetryPolicy;

#[cfg(feature = "mysql")]
use postboard_infra::database::DatabaseConfig;

/// Which store backs the posts and users tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    MySql,
    Memory,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::MySql => "mysql",
            StoreKind::Memory => "memory",
        }
    }
}

/// MySQL when compiled in, otherwise memory.
impl Default for StoreKind {
    #[cfg(feature = "mysql")]
    fn default() -> Self {
        StoreKind::MySql
    }

    #[cfg(not(feature = "mysql"))]
    fn default() -> Self {
        StoreKind::Memory
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mysql" => Ok(StoreKind::MySql),
            "memory" | "in-memory" => Ok(StoreKind::Memory),
            _ => Err(()),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub retry: RetryPolicy,
    #[cfg(feature = "mysql")]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset or unparseable values use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = RetryPolicy::default();
        let retry = RetryPolicy::new(
            parse_var(&lookup, "DB_RETRIES").unwrap_or(defaults.max_attempts),
            parse_var(&lookup, "DB_RETRY_DELAY_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.delay),
        );

        #[cfg(feature = "mysql")]
        let database = {
            let defaults = DatabaseConfig::default();
            DatabaseConfig {
                host: lookup("DB_HOST").unwrap_or(defaults.host),
                user: lookup("DB_USER").unwrap_or(defaults.user),
                password: lookup("DB_PASSWORD").unwrap_or(defaults.password),
                database: lookup("DB_NAME").unwrap_or(defaults.database),
                port: parse_var(&lookup, "DB_PORT").unwrap_or(defaults.port),
                max_connections: parse_var(&lookup, "DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.max_connections),
                acquire_timeout: parse_var(&lookup, "DB_ACQUIRE_TIMEOUT_SECS")
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.acquire_timeout),
            }
        };

        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT").unwrap_or(5000),
            store: parse_var(&lookup, "STORE").unwrap_or_default(),
            retry,
            #[cfg(feature = "mysql")]
            database,
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.trim().parse().ok())
}
