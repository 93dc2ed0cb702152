//! External analysis backend interface

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure modes of an analysis backend call.
///
/// These are explicit variants rather than panics or opaque errors so the
/// analyzer's degrade-and-continue behavior is a normal branch.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,
}

/// A completion service used for expensive per-opportunity analysis.
///
/// Implementations wrap whatever external service performs the analysis; the
/// engine only depends on this contract. Calls are blocking from the batch's
/// perspective and are counted against its shared wall-clock budget.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        max_tokens: u32,
        temperature: f32,
        timeout: Option<Duration>,
    ) -> Result<String, BackendError>;
}
