//! Agent trait and types

use crate::results::SearchResult;
use async_trait::async_trait;

/// Main agent trait that all search agents must implement.
///
/// The two implementations diverge on failure policy: the
/// knowledge-base agent propagates errors to the caller, the web
/// search agent swallows them and resolves to empty results.
#[async_trait]
pub trait SearchAgent: Send + Sync {
    /// Agent name used for registration and result tagging
    fn name(&self) -> &str;

    /// Execute a search against the agent's backing source
    async fn search(&self, query: &str) -> anyhow::Result<Vec<SearchResult>>;
}
