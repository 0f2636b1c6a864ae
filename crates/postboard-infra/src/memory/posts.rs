//! In-memory post store - used when no SQL server is configured.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use postboard_core::domain::Post;
use postboard_core::error::{RepoError, Unreachable};
use postboard_core::ports::{
    BaseRepository, BootstrapStore, PostRepository, ReadinessProbe, SchemaInitializer,
};

struct Row {
    post: Post,
    seq: u64,
}

#[derive(Default)]
struct Table {
    rows: HashMap<String, Row>,
    next_seq: u64,
}

impl Table {
    fn push(&mut self, mut post: Post) {
        post.created_at = Some(Utc::now());
        let seq = self.next_seq;
        self.next_seq += 1;
        self.rows.insert(post.id.clone(), Row { post, seq });
    }
}

/// Posts held in a HashMap behind an async RwLock.
///
/// The store stamps `created_at` on insert. An insertion sequence breaks
/// timestamp ties so newest-first listing is stable.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    table: RwLock<Table>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, String> for InMemoryPostStore {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).map(|row| row.post.clone()))
    }

    async fn insert(&self, entity: Post) -> Result<(), RepoError> {
        self.insert_many(vec![entity]).await
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        table.rows.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostStore {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        let table = self.table.read().await;
        let mut rows: Vec<&Row> = table.rows.values().collect();
        rows.sort_by(|a, b| {
            b.post
                .created_at
                .cmp(&a.post.created_at)
                .then(b.seq.cmp(&a.seq))
        });
        Ok(rows.into_iter().map(|row| row.post.clone()).collect())
    }

    async fn update_content(&self, id: String, content: String) -> Result<(), RepoError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(RepoError::NotFound)?;
        row.post.content = content;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.table.read().await.rows.len() as u64)
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<(), RepoError> {
        // Hold the write lock across validation and insert so the batch is atomic.
        let mut table = self.table.write().await;

        {
            let mut batch_ids = HashSet::new();
            for post in &posts {
                if table.rows.contains_key(&post.id) || !batch_ids.insert(post.id.as_str()) {
                    return Err(RepoError::Constraint(format!(
                        "Duplicate entry '{}' for key 'PRIMARY'",
                        post.id
                    )));
                }
            }
        }

        for post in posts {
            table.push(post);
        }
        Ok(())
    }
}

#[async_trait]
impl ReadinessProbe for InMemoryPostStore {
    async fn probe(&self) -> Result<(), Unreachable> {
        Ok(())
    }
}

#[async_trait]
impl SchemaInitializer for InMemoryPostStore {
    async fn ensure_schema(&self) -> Result<(), RepoError> {
        Ok(())
    }
}

impl BootstrapStore for InMemoryPostStore {
    fn prober(&self) -> &dyn ReadinessProbe {
        self
    }

    fn schema(&self) -> &dyn SchemaInitializer {
        self
    }

    fn posts(&self) -> &dyn PostRepository {
        self
    }
}
