//! Agent Gateway: an HTTP gateway for LLM document QA and coordinated
//! search agents.
//!
//! Two services share this crate: a document-QA endpoint that forwards
//! caller input to a hosted chat-completions provider, and a search
//! endpoint that delegates a query to a set of search agents and
//! aggregates their results.

pub mod agents;
pub mod config;
pub mod coordinator;
pub mod llm;
pub mod network;
pub mod qa;
pub mod results;
pub mod web;

pub use agents::{AgentRegistry, SearchAgent};
pub use config::Settings;
pub use coordinator::{AgentResponse, ConversationContext, Coordinator};
pub use results::SearchResult;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for outbound provider requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 30;
