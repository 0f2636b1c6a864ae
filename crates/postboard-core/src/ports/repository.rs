use async_trait::async_trait;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity as a single statement.
    async fn insert(&self, entity: T) -> Result<(), RepoError>;

    /// Delete an entity by its ID. `RepoError::NotFound` when nothing matched.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, String> {
    /// All posts, newest first.
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError>;

    /// Replace the content of one post. `RepoError::NotFound` when no row matched.
    async fn update_content(&self, id: String, content: String) -> Result<(), RepoError>;

    /// Current number of posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Insert a batch as one atomic operation: either every row lands or none does.
    async fn insert_many(&self, posts: Vec<Post>) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, String> {
    async fn list(&self) -> Result<Vec<User>, RepoError>;

    /// Change the display name. `RepoError::NotFound` when no row matched.
    async fn rename(&self, id: String, user_name: String) -> Result<(), RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;
}
