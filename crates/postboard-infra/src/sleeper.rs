//! Runtime-backed retry delay.

use std::time::Duration;

use async_trait::async_trait;

use postboard_core::ports::Sleeper;

/// Yields to the tokio runtime for the requested delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
