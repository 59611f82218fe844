//! Per-session statistics for the chat UI.
//!
//! Tracks what the sidebar shows: how many turns have completed and which
//! model produced each assistant reply. Conversation content lives in the
//! context buffer; nothing here is persisted.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Statistics for a single chat session.
///
/// Created at session start and discarded with the session. A "turn" is
/// one user message answered by one assistant reply.
#[derive(Debug, Clone)]
pub struct SessionStats {
    id: Uuid,
    started_at: DateTime<Utc>,
    turn_count: u32,
    replies_by_model: HashMap<String, u32>,
}

impl SessionStats {
    /// Start tracking a new session.
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            turn_count: 0,
            replies_by_model: HashMap::new(),
        }
    }

    /// Session identifier (UUID v7, time-sortable).
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Completed turns in this session.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Record a completed turn answered by the given model.
    pub fn record_reply(&mut self, model: &str) {
        self.turn_count += 1;
        *self.replies_by_model.entry(model.to_string()).or_insert(0) += 1;
    }

    /// Reply counts per model, sorted by model name for stable display.
    pub fn replies_by_model(&self) -> Vec<(&str, u32)> {
        let mut counts: Vec<(&str, u32)> = self
            .replies_by_model
            .iter()
            .map(|(model, count)| (model.as_str(), *count))
            .collect();
        counts.sort_by_key(|(model, _)| *model);
        counts
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_stats() {
        let stats = SessionStats::new();
        assert_eq!(stats.turn_count(), 0);
        assert!(stats.replies_by_model().is_empty());
    }

    #[test]
    fn test_record_reply_counts_turns_and_models() {
        let mut stats = SessionStats::new();
        stats.record_reply("openai/gpt-4o");
        stats.record_reply("openai/gpt-4o");
        stats.record_reply("mistralai/mistral-large");

        assert_eq!(stats.turn_count(), 3);
        assert_eq!(
            stats.replies_by_model(),
            vec![("mistralai/mistral-large", 1), ("openai/gpt-4o", 2)]
        );
    }

    #[test]
    fn test_session_ids_are_unique() {
        assert_ne!(SessionStats::new().id(), SessionStats::new().id());
    }
}
