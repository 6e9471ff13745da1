//! Document QA service
//!
//! Wraps the LLM client behind the doc-QA route's downstream call.

use crate::llm::{ChatMessage, LlmClient};
use anyhow::Result;
use serde_json::json;
use tracing::debug;

const SYSTEM_PROMPT: &str = "You are a documentation assistant. Answer the \
user's question using the indexed documentation. If the documentation does \
not cover the question, say so.";

/// Service answering free-form questions over the indexed documents
pub struct QaService {
    llm: LlmClient,
}

impl QaService {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Answer a single question
    pub async fn answer(&self, input: &str) -> Result<serde_json::Value> {
        let messages = [ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(input)];

        let text = self.llm.chat_completion(&messages).await?;
        debug!("QA answer produced ({} chars)", text.len());

        Ok(json!({
            "answer": text,
            "model": self.llm.model(),
        }))
    }
}
