//! LLM provider module
//!
//! Client for OpenAI-compatible chat-completions APIs.

mod openai;

pub use openai::{ChatMessage, LlmClient};
