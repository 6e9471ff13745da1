//! OpenAI-compatible chat-completions client

use crate::config::ProviderSettings;
use crate::network::HttpClient;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use tracing::debug;

/// One message in a chat-completions request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Client for an OpenAI-compatible chat-completions API
pub struct LlmClient {
    client: HttpClient,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
}

impl LlmClient {
    pub fn new(client: HttpClient, settings: &ProviderSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
            model: settings.model.clone(),
            temperature: settings.temperature,
        }
    }

    /// Model name this client is configured for
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one chat completion and return the assistant text
    pub async fn chat_completion(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.temperature,
        });

        let mut headers = HashMap::new();
        if let Some(ref key) = self.api_key {
            headers.insert("Authorization".to_string(), format!("Bearer {}", key));
        }

        debug!("Requesting completion from {} (model {})", url, self.model);
        let response = self
            .client
            .post_json_with_headers(&url, &body, &headers)
            .await?;

        if !response.is_success() {
            bail!("{}", response.error_message());
        }

        let value: serde_json::Value = response.json()?;
        match value
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(|t| t.as_str())
        {
            Some(text) => Ok(text.to_string()),
            None => bail!("malformed provider response: no completion content"),
        }
    }
}
