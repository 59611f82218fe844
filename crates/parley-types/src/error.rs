use thiserror::Error;

use crate::llm::MessageRole;

/// Errors in the startup configuration.
///
/// All variants are fatal: they surface before any conversation turn is
/// accepted and prevent the session from starting.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .names.join(", "))]
    MissingEnv { names: Vec<&'static str> },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("model catalog error: {0}")]
    Catalog(String),
}

/// Caller misuse of conversation operations.
///
/// Always rejected before any network call, and always recoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty content for {role} message")]
    EmptyContent { role: MessageRole },

    #[error("the system prompt is set at buffer creation and cannot be appended")]
    SystemAppend,

    #[error("conversation has no user or assistant messages")]
    EmptyConversation,
}
