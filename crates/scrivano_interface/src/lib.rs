//! Generation-service trait definitions for the Scrivano content pipeline.
//!
//! The generation service is an external collaborator: the pipeline hands
//! it a fully assembled [`Prompt`] and receives a raw [`ContentBody`] back,
//! or a `ServiceError` on quota, network, or timeout failure. Every
//! failure kind is retryable *by the caller*; the pipeline itself never
//! retries silently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use scrivano_core::{ContentBody, Prompt};
use scrivano_error::ScrivanoResult;

/// Core trait every generation backend must implement.
///
/// Implementations may block or suspend; cancellation and timeouts
/// propagate from the caller through the `await`. No pipeline lock is held
/// while a call to this boundary is in flight.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use scrivano_core::{ContentBody, Prompt};
/// use scrivano_error::ScrivanoResult;
/// use scrivano_interface::GenerationClient;
///
/// struct EchoClient;
///
/// #[async_trait]
/// impl GenerationClient for EchoClient {
///     async fn generate(&self, prompt: &Prompt) -> ScrivanoResult<ContentBody> {
///         Ok(ContentBody::Text(prompt.user().clone()))
///     }
///
///     fn provider_name(&self) -> &'static str {
///         "echo"
///     }
///
///     fn model_name(&self) -> &str {
///         "echo-1"
///     }
/// }
/// ```
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Generate raw content for an assembled prompt.
    ///
    /// The returned body is unvalidated; the caller runs it through the
    /// content validator before accepting it.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` with sub-kind quota, network, or timeout.
    async fn generate(&self, prompt: &Prompt) -> ScrivanoResult<ContentBody>;

    /// Provider name (e.g. "openai", "gemini").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g. "gpt-4o-mini").
    fn model_name(&self) -> &str;
}
