//! SQL store: pool construction, entities, repositories, bootstrap adapter.

mod connections;
pub mod entity;
mod sql_base;
mod sql_repo;
mod store;

pub use connections::{DatabaseConfig, connect_lazy, connect_lazy_url};
pub use sql_base::SqlBaseRepository;
pub use sql_repo::{SqlPostRepository, SqlUserRepository};
pub use store::SqlStore;
