//! Search result type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// A single search result.
///
/// The shape is owned by the backing provider; fields the gateway does
/// not model are preserved in `extra` and round-trip unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// The URL of the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Content snippet/description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Provider-assigned relevance score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Agent that returned this result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Provider fields the gateway does not model
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SearchResult {
    /// Create a new result with a title and URL
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Add content to the result
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Tag the result with the agent that produced it
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the hostname from the URL
    pub fn hostname(&self) -> Option<String> {
        let url = self.url.as_deref()?;
        Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let result = SearchResult::new("Rust", "https://www.rust-lang.org/")
            .with_content("A language empowering everyone")
            .with_source("knowledge_base");

        assert_eq!(result.title.as_deref(), Some("Rust"));
        assert_eq!(result.hostname().as_deref(), Some("www.rust-lang.org"));
        assert_eq!(result.source.as_deref(), Some("knowledge_base"));
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        let raw = r#"{"title":"Doc","url":"https://example.com/doc","chunk_id":42,"embedding_model":"ada-002"}"#;
        let result: SearchResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.extra["chunk_id"], 42);

        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["chunk_id"], 42);
        assert_eq!(back["embedding_model"], "ada-002");
        assert!(back.get("score").is_none());
    }
}
