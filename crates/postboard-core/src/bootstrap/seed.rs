//! One-time seeding of the canonical posts.

use crate::domain::{Post, seed_posts};
use crate::error::BootstrapError;
use crate::ports::{IdGenerator, PostRepository};

/// Result of a seeding pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and this many rows were inserted.
    Seeded(usize),
    /// The table already held rows; nothing was written.
    Skipped { existing: u64 },
}

/// Inserts the canonical dataset into an empty post table.
pub struct SeedLoader<G> {
    ids: G,
}

impl<G: IdGenerator> SeedLoader<G> {
    pub fn new(ids: G) -> Self {
        Self { ids }
    }

    /// Count first, then insert the whole batch in one statement only when
    /// the count is exactly zero.
    pub async fn seed(&self, posts: &dyn PostRepository) -> Result<SeedOutcome, BootstrapError> {
        let existing = posts
            .count()
            .await
            .map_err(|e| BootstrapError::Seed(e.to_string()))?;

        if existing != 0 {
            tracing::info!(existing, "Posts already present, skipping seed");
            return Ok(SeedOutcome::Skipped { existing });
        }

        let batch: Vec<Post> = seed_posts()
            .into_iter()
            .map(|post| post.into_post(self.ids.generate_id()))
            .collect();
        let inserted = batch.len();

        posts
            .insert_many(batch)
            .await
            .map_err(|e| BootstrapError::Seed(e.to_string()))?;

        tracing::info!(inserted, "Seeded canonical posts");
        Ok(SeedOutcome::Seeded(inserted))
    }
}
