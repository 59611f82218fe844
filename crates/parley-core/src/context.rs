//! Bounded conversation context for a chat session.
//!
//! [`ContextBuffer`] holds the optional system prompt and the ordered
//! user/assistant turns of the active conversation. Operations return the
//! next buffer state instead of mutating a shared list, which keeps
//! truncation and append trivially unit-testable and leaves the caller's
//! state untouched when an operation is rejected.

use parley_types::error::ValidationError;
use parley_types::llm::{Message, MessageRole};

/// Default maximum number of conversation turns sent per request.
pub const DEFAULT_CONTEXT_LIMIT: usize = 20;

/// Ordered, bounded sequence of conversation messages.
///
/// The system message is stored apart from the turn list, so it is always
/// first in iteration order and can never be evicted by [`truncate`].
/// Insertion order of the turns is the conversation.
///
/// [`truncate`]: ContextBuffer::truncate
#[derive(Debug, Clone, Default)]
pub struct ContextBuffer {
    system: Option<Message>,
    turns: Vec<Message>,
}

impl ContextBuffer {
    /// Create a buffer containing only the optional system message.
    ///
    /// An empty or whitespace-only prompt means no system message.
    pub fn new(system_prompt: Option<String>) -> Self {
        let system = system_prompt
            .filter(|prompt| !prompt.trim().is_empty())
            .map(|content| Message::new(MessageRole::System, content));
        Self {
            system,
            turns: Vec::new(),
        }
    }

    /// The buffer with a conversation turn appended at the end.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyContent`] for empty user/assistant
    /// content and [`ValidationError::SystemAppend`] for the system role,
    /// which is set once at creation. The original buffer is unchanged
    /// when the append is rejected.
    pub fn append(
        &self,
        role: MessageRole,
        content: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if role == MessageRole::System {
            return Err(ValidationError::SystemAppend);
        }
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ValidationError::EmptyContent { role });
        }
        let mut next = self.clone();
        next.turns.push(Message::new(role, content));
        Ok(next)
    }

    /// The buffer reduced to the system message plus the most recent
    /// `limit` turns.
    ///
    /// Drops the oldest excess turns from the front; surviving turns keep
    /// their chronological order. An equivalent state comes back when
    /// already at or under the limit. `limit = 0` drops every turn; the
    /// system message survives any limit.
    pub fn truncate(&self, limit: usize) -> Self {
        if self.turns.len() <= limit {
            return self.clone();
        }
        let excess = self.turns.len() - limit;
        tracing::debug!(dropped = excess, limit, "truncated conversation context");
        Self {
            system: self.system.clone(),
            turns: self.turns[excess..].to_vec(),
        }
    }

    /// An empty conversation keeping the system message.
    ///
    /// The system prompt is session configuration, not history, so the
    /// "clear conversation" action leaves it in place.
    pub fn reset(&self) -> Self {
        Self {
            system: self.system.clone(),
            turns: Vec::new(),
        }
    }

    /// Number of conversation turns (the system message is not counted).
    pub fn size(&self) -> usize {
        self.turns.len()
    }

    /// Whether the buffer holds no conversation turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The system message, when one was set at creation.
    pub fn system(&self) -> Option<&Message> {
        self.system.as_ref()
    }

    /// The conversation turns in chronological order.
    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// Iterate the full conversation: system message first, then turns.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.system.iter().chain(self.turns.iter())
    }
}
