//! In-memory stores, selected with `STORE=memory`.

mod posts;
mod users;

pub use posts::InMemoryPostStore;
pub use users::InMemoryUserStore;
