//! ChatProvider trait definition.
//!
//! The core abstraction a completion backend implements. Uses native async
//! fn in traits (RPITIT, Rust 2024 edition); object safety for runtime
//! handle sharing is provided by [`super::box_provider::BoxChatProvider`].

use parley_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat completion backends.
///
/// Implementations live in `parley-infra`. A provider is read-only after
/// construction and must not perform network I/O until [`complete`] is
/// called, so constructing one is cheap and side-effect-free beyond
/// credential binding.
///
/// [`complete`]: ChatProvider::complete
pub trait ChatProvider: Send + Sync {
    /// Human-readable provider name, for logs.
    fn name(&self) -> &str;

    /// Send one completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
