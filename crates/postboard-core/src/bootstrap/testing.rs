//! Test doubles for the bootstrap ports.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::Post;
use crate::error::{RepoError, Unreachable};
use crate::ports::{
    BaseRepository, BootstrapStore, IdGenerator, PostRepository, ReadinessProbe,
    SchemaInitializer, Sleeper,
};

/// Fails a fixed number of times, then answers.
pub(crate) struct ScriptedProbe {
    failures: u32,
    calls: AtomicU32,
}

impl ScriptedProbe {
    pub(crate) fn failing(failures: u32) -> Self {
        Self {
            failures,
            calls: AtomicU32::new(0),
        }
    }

    pub(crate) fn never() -> Self {
        Self::failing(u32::MAX)
    }

    pub(crate) fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReadinessProbe for ScriptedProbe {
    async fn probe(&self) -> Result<(), Unreachable> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(Unreachable("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Records requested delays instead of waiting.
#[derive(Clone, Default)]
pub(crate) struct RecordingSleeper {
    slept: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    pub(crate) fn slept(&self) -> Vec<Duration> {
        self.slept.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.lock().unwrap().push(duration);
    }
}

#[derive(Default)]
pub(crate) struct SequentialIds {
    next: AtomicU32,
}

impl IdGenerator for SequentialIds {
    fn generate_id(&self) -> String {
        format!("post-{:04}", self.next.fetch_add(1, Ordering::SeqCst))
    }
}

/// Vec-backed post repository with an injectable insert fault.
#[derive(Default)]
pub(crate) struct FakePosts {
    rows: Mutex<Vec<Post>>,
    insert_calls: AtomicU32,
    fail_insert: AtomicBool,
}

impl FakePosts {
    pub(crate) fn with_rows(n: usize) -> Self {
        let posts = Self::default();
        {
            let mut rows = posts.rows.lock().unwrap();
            for i in 0..n {
                rows.push(Post {
                    id: format!("existing-{i}"),
                    name: "Existing".to_string(),
                    content: "Already here".to_string(),
                    likes: 0,
                    comments: 0,
                    created_at: None,
                });
            }
        }
        posts
    }

    pub(crate) fn failing_insert() -> Self {
        let posts = Self::default();
        posts.fail_insert.store(true, Ordering::SeqCst);
        posts
    }

    pub(crate) fn heal(&self) {
        self.fail_insert.store(false, Ordering::SeqCst);
    }

    pub(crate) fn rows(&self) -> Vec<Post> {
        self.rows.lock().unwrap().clone()
    }

    pub(crate) fn insert_calls(&self) -> u32 {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseRepository<Post, String> for FakePosts {
    async fn find_by_id(&self, id: String) -> Result<Option<Post>, RepoError> {
        Ok(self.rows().into_iter().find(|p| p.id == id))
    }

    async fn insert(&self, entity: Post) -> Result<(), RepoError> {
        self.insert_many(vec![entity]).await
    }

    async fn delete(&self, id: String) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for FakePosts {
    async fn list_recent(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.rows())
    }

    async fn update_content(&self, id: String, content: String) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let post = rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        post.content = content;
        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.rows.lock().unwrap().len() as u64)
    }

    async fn insert_many(&self, posts: Vec<Post>) -> Result<(), RepoError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert.load(Ordering::SeqCst) {
            return Err(RepoError::Query("connection reset mid-insert".to_string()));
        }
        self.rows.lock().unwrap().extend(posts);
        Ok(())
    }
}

/// A whole store: scripted probe, countable schema calls, fake posts.
pub(crate) struct FakeStore {
    pub(crate) probe: ScriptedProbe,
    pub(crate) posts: FakePosts,
    schema_calls: AtomicU32,
    schema_fails: bool,
}

impl FakeStore {
    pub(crate) fn new(probe: ScriptedProbe) -> Self {
        Self {
            probe,
            posts: FakePosts::default(),
            schema_calls: AtomicU32::new(0),
            schema_fails: false,
        }
    }

    pub(crate) fn with_broken_schema(probe: ScriptedProbe) -> Self {
        Self {
            schema_fails: true,
            ..Self::new(probe)
        }
    }

    pub(crate) fn schema_calls(&self) -> u32 {
        self.schema_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SchemaInitializer for FakeStore {
    async fn ensure_schema(&self) -> Result<(), RepoError> {
        self.schema_calls.fetch_add(1, Ordering::SeqCst);
        if self.schema_fails {
            return Err(RepoError::Query("CREATE command denied".to_string()));
        }
        Ok(())
    }
}

impl BootstrapStore for FakeStore {
    fn prober(&self) -> &dyn ReadinessProbe {
        &self.probe
    }

    fn schema(&self) -> &dyn SchemaInitializer {
        self
    }

    fn posts(&self) -> &dyn PostRepository {
        &self.posts
    }
}
