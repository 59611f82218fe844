//! Completion invocation.
//!
//! Turns the current context buffer into exactly one provider request and
//! maps the outcome into a [`Reply`] or an [`LlmError`]. The buffer itself
//! is never mutated here; the caller decides whether to commit the
//! assistant message, which keeps the conversation consistent when a turn
//! fails.

use parley_types::error::ValidationError;
use parley_types::llm::{CompletionRequest, LlmError, Message, MessageRole, Usage};

use crate::context::ContextBuffer;
use crate::llm::box_provider::BoxChatProvider;

/// A successful completion: the assistant message plus attribution data.
#[derive(Debug, Clone)]
pub struct Reply {
    /// The assistant turn, ready to append to the buffer.
    pub message: Message,
    /// Model identifier the provider reported for this reply.
    pub model: String,
    pub usage: Usage,
}

/// Issue one completion request for the buffer's conversation.
///
/// The buffer is serialized in order: the system prompt travels in the
/// request's dedicated `system` field and the turns in `messages`. The
/// model, temperature, and token cap are left to the provider's
/// configuration.
///
/// There is no retry here: a failed invocation is reported as-is, since
/// retrying silently could duplicate billed requests.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyConversation`] (as an
/// [`LlmError::Validation`]) before any network I/O when the buffer has no
/// user or assistant messages; otherwise whatever the provider boundary
/// classified the failure as.
pub async fn invoke(
    provider: &BoxChatProvider,
    buffer: &ContextBuffer,
) -> Result<Reply, LlmError> {
    if buffer.is_empty() {
        return Err(ValidationError::EmptyConversation.into());
    }

    let request = CompletionRequest {
        model: String::new(),
        messages: buffer.turns().to_vec(),
        system: buffer.system().map(|m| m.content.clone()),
        max_tokens: None,
        temperature: None,
    };

    tracing::debug!(
        provider = provider.name(),
        turns = buffer.size(),
        "sending completion request"
    );

    let response = provider.complete(&request).await?;

    tracing::debug!(
        model = %response.model,
        input_tokens = response.usage.input_tokens,
        output_tokens = response.usage.output_tokens,
        "completion received"
    );

    Ok(Reply {
        message: Message::new(MessageRole::Assistant, response.content),
        model: response.model,
        usage: response.usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use parley_types::llm::CompletionResponse;

    use crate::llm::provider::ChatProvider;

    /// Test double that records every request it receives.
    struct MockProvider {
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<CompletionRequest>>>,
        outcome: fn() -> Result<CompletionResponse, LlmError>,
    }

    /// Handles for observing a boxed mock from the outside.
    struct MockHandles {
        calls: Arc<AtomicUsize>,
        last_request: Arc<Mutex<Option<CompletionRequest>>>,
    }

    impl MockProvider {
        fn boxed(
            outcome: fn() -> Result<CompletionResponse, LlmError>,
        ) -> (BoxChatProvider, MockHandles) {
            let calls = Arc::new(AtomicUsize::new(0));
            let last_request = Arc::new(Mutex::new(None));
            let handles = MockHandles {
                calls: Arc::clone(&calls),
                last_request: Arc::clone(&last_request),
            };
            let provider = BoxChatProvider::new(Self {
                calls,
                last_request,
                outcome,
            });
            (provider, handles)
        }
    }

    impl ChatProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            (self.outcome)()
        }
    }

    fn ok_response() -> Result<CompletionResponse, LlmError> {
        Ok(CompletionResponse {
            id: "cmpl-1".to_string(),
            content: "Hi there!".to_string(),
            model: "openai/gpt-4o".to_string(),
            usage: Usage {
                input_tokens: 12,
                output_tokens: 4,
            },
        })
    }

    fn transport_failure() -> Result<CompletionResponse, LlmError> {
        Err(LlmError::Transport("connection refused".to_string()))
    }

    fn chat_buffer() -> ContextBuffer {
        ContextBuffer::new(Some("Be helpful.".to_string()))
            .append(MessageRole::User, "Hello")
            .unwrap()
    }

    #[tokio::test]
    async fn test_invoke_empty_buffer_skips_network() {
        let (provider, handles) = MockProvider::boxed(ok_response);

        let buffer = ContextBuffer::new(Some("Be helpful.".to_string()));
        let err = invoke(&provider, &buffer).await.unwrap_err();

        assert!(matches!(
            err,
            LlmError::Validation(ValidationError::EmptyConversation)
        ));
        // The provider was never reached.
        assert_eq!(handles.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invoke_success_wraps_assistant_message() {
        let (provider, handles) = MockProvider::boxed(ok_response);
        let reply = invoke(&provider, &chat_buffer()).await.unwrap();

        assert_eq!(reply.message.role, MessageRole::Assistant);
        assert_eq!(reply.message.content, "Hi there!");
        assert_eq!(reply.model, "openai/gpt-4o");
        assert_eq!(reply.usage.output_tokens, 4);
        assert_eq!(handles.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_invoke_serializes_system_separately() {
        let (provider, handles) = MockProvider::boxed(ok_response);

        let buffer = chat_buffer()
            .append(MessageRole::Assistant, "Hi!")
            .unwrap()
            .append(MessageRole::User, "How are you?")
            .unwrap();
        invoke(&provider, &buffer).await.unwrap();

        let request = handles.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.system.as_deref(), Some("Be helpful."));
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[0].content, "Hello");
        assert_eq!(request.messages[2].content, "How are you?");
        assert!(request
            .messages
            .iter()
            .all(|m| m.role != MessageRole::System));
        // Empty model defers to the provider's configured default.
        assert!(request.model.is_empty());
    }

    #[tokio::test]
    async fn test_invoke_failure_leaves_buffer_unchanged() {
        // An unreachable endpoint surfaces as a transport failure and
        // the caller's buffer is untouched.
        let (provider, _handles) = MockProvider::boxed(transport_failure);
        let buffer = chat_buffer();
        let size_before = buffer.size();

        let err = invoke(&provider, &buffer).await.unwrap_err();

        assert!(matches!(err, LlmError::Transport(_)));
        assert_eq!(buffer.size(), size_before);
        assert_eq!(buffer.turns()[0].content, "Hello");
    }
}
