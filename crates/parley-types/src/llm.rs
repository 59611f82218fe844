//! LLM request/response types for Parley.
//!
//! These types model the data shapes for talking to an OpenAI-compatible
//! completion endpoint: conversation messages, completion requests and
//! responses, usage tracking, and the invocation error taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single conversational turn.
///
/// Immutable once created; ownership lives with the context buffer
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    /// Create a message with the given role and content.
    ///
    /// Content validity (non-empty for user/assistant turns) is enforced
    /// by the context buffer, not here.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Request to a chat provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier; empty means "use the provider's configured default".
    pub model: String,
    /// Conversation turns in chronological order (no system message here).
    pub messages: Vec<Message>,
    /// System prompt, carried separately from the turn list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response from a chat provider for a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    /// Model that actually served the request, as reported by the provider.
    pub model: String,
    pub usage: Usage,
}

/// Token usage for a completion request/response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from a single completion invocation.
///
/// Provider-specific failures are mapped into these variants at the
/// provider boundary so nothing above it depends on third-party error
/// types. All variants are recoverable: a failed invocation never corrupts
/// conversation state and the user may retry the same turn.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// Caller misuse, rejected before any network I/O.
    #[error("invalid conversation: {0}")]
    Validation(#[from] ValidationError),

    /// Network or connectivity failure reaching the endpoint.
    #[error("transport error: {0}")]
    Transport(String),

    /// The endpoint rejected the credential.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider-reported rate limit or quota exhaustion.
    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    /// The response did not have the expected shape.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Any other provider-reported failure.
    #[error("provider error: {message}")]
    Provider { message: String },
}
