//! Coordinator data models

use crate::results::SearchResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One prior turn in the conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Speaker role ("user", "assistant", ...)
    pub role: String,
    /// Turn text
    pub content: String,
    /// When the turn happened, if the caller tracks it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Turn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            timestamp: None,
        }
    }
}

/// Caller-supplied conversation context. An omitted context
/// deserializes to an empty history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationContext {
    /// Ordered sequence of prior turns
    pub history: Vec<Turn>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of prior turns
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

/// Aggregated output of a coordinated search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentResponse {
    /// Results in agent registration order
    pub results: Vec<SearchResult>,
}

impl AgentResponse {
    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults_to_empty_history() {
        let context: ConversationContext = serde_json::from_str("{}").unwrap();
        assert!(context.is_empty());
    }

    #[test]
    fn test_context_deserializes_history() {
        let raw = r#"{"history":[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]}"#;
        let context: ConversationContext = serde_json::from_str(raw).unwrap();
        assert_eq!(context.len(), 2);
        assert_eq!(context.history[0].role, "user");
    }

    #[test]
    fn test_turn_serializes_without_null_timestamp() {
        let turn = Turn::new("user", "hi");
        let value = serde_json::to_value(&turn).unwrap();
        assert!(value.get("timestamp").is_none());
    }
}
