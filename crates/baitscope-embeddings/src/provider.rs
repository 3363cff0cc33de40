//! Embedding provider trait and the bounded-retry wrapper.
//!
//! The provider is the only place the analysis pipeline touches external
//! I/O. Every call goes through [`embed_with_retry`], which enforces a hard
//! per-attempt timeout and bounded exponential backoff; exhaustion surfaces
//! as [`EmbeddingError::Unavailable`], never as a hang.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::time::{sleep, timeout};
use tracing::warn;

use crate::error::{EmbeddingError, EmbeddingResult};

/// Trait for text-to-vector conversion.
///
/// Implementations must be thread-safe (`Send + Sync`) and return vectors of
/// a fixed dimension.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for one text. Input longer than
    /// [`max_input_chars`](Self::max_input_chars) is truncated by the caller
    /// before submission.
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>>;

    /// Whether the provider is configured and expected to be reachable.
    fn is_available(&self) -> bool;

    /// Identifier used in logs.
    fn model_id(&self) -> &str;

    /// Provider input limit in characters.
    fn max_input_chars(&self) -> usize {
        8191
    }
}

/// Retry behavior for embedding calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    /// Backoff before the second attempt; doubles per attempt.
    #[serde(with = "duration_millis")]
    pub base_delay: Duration,
    /// Backoff ceiling.
    #[serde(with = "duration_millis")]
    pub max_delay: Duration,
    /// Hard deadline per attempt.
    #[serde(with = "duration_millis")]
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Delay before `attempt` (1-based); no delay before the first.
    fn backoff(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let factor = 1u32 << (attempt - 2).min(16);
        (self.base_delay * factor).min(self.max_delay)
    }

    /// A policy with no sleeping, for tests.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            attempt_timeout: Duration::from_secs(1),
        }
    }
}

/// Serialize `Duration` as integer milliseconds.
mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Truncate text to the provider limit on a char boundary.
fn truncate_input(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Embed with bounded retries and a per-attempt timeout.
///
/// Transient failures back off exponentially; after `max_attempts` the call
/// resolves to [`EmbeddingError::Unavailable`]. An unavailable provider
/// short-circuits without attempting.
pub async fn embed_with_retry(
    provider: &dyn EmbeddingProvider,
    text: &str,
    policy: &RetryPolicy,
) -> EmbeddingResult<Vec<f32>> {
    if !provider.is_available() {
        return Err(EmbeddingError::Unavailable);
    }
    if text.trim().is_empty() {
        return Err(EmbeddingError::EmptyInput);
    }
    let input = truncate_input(text, provider.max_input_chars());

    for attempt in 1..=policy.max_attempts.max(1) {
        sleep(policy.backoff(attempt)).await;
        match timeout(policy.attempt_timeout, provider.embed(input)).await {
            Ok(Ok(vector)) => return Ok(vector),
            Ok(Err(err)) => {
                warn!(
                    model = provider.model_id(),
                    attempt,
                    error = %err,
                    "embedding attempt failed"
                );
            }
            Err(_) => {
                warn!(
                    model = provider.model_id(),
                    attempt,
                    timeout = ?policy.attempt_timeout,
                    "embedding attempt timed out"
                );
            }
        }
    }
    Err(EmbeddingError::Unavailable)
}
