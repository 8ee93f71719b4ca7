//! Completion oracle implementations

use async_trait::async_trait;

pub mod openai;

// Re-export for convenience
pub use openai::OpenAiClient;

/// A remote text-completion service.
///
/// Returns `Ok(None)` when the service answered but produced no text.
#[async_trait]
pub trait CompletionOracle: Send + Sync
{   async fn complete(
      &self
    , request: crate::request::CompletionRequest
    ) -> Result<Option<String>, crate::error::Error>;
}
