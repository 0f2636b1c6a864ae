//! In-memory user store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::User;
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, UserRepository};

/// Users keyed by id. Email uniqueness is checked on insert, the way the
/// SQL `UNIQUE` index would.
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, String> for InMemoryUserStore {
    async fn find_by_id(&self, id: String) -> Result<Option<User>, RepoError> {
        Ok(self.users.read().await.get(&id).cloned())
    }

    async fn insert(&self, entity: User) -> Result<(), RepoError> {
        let mut users = self.users.write().await;

        if users.contains_key(&entity.id) {
            return Err(RepoError::Constraint(format!(
                "Duplicate entry '{}' for key 'PRIMARY'",
                entity.id
            )));
        }
        if users.values().any(|u| u.email == entity.email) {
            return Err(RepoError::Constraint(format!(
                "Duplicate entry '{}' for key 'email'",
                entity.email
            )));
        }

        users.insert(entity.id.clone(), entity);
        Ok(())
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut users = self.users.write().await;
        users.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn list(&self) -> Result<Vec<User>, RepoError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.user_name.cmp(&b.user_name));
        Ok(users)
    }

    async fn rename(&self, id: String, user_name: String) -> Result<(), RepoError> {
        let mut users = self.users.write().await;
        let user = users.get_mut(&id).ok_or(RepoError::NotFound)?;
        user.user_name = user_name;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.users.read().await.len() as u64)
    }
}
