//! Web search agent
//!
//! Placeholder for a live web search backend. Logs the query and
//! resolves to an empty result list; internal failures are swallowed
//! rather than propagated, unlike the knowledge-base agent.

use super::traits::SearchAgent;
use crate::results::SearchResult;
use anyhow::{bail, Result};
use async_trait::async_trait;
use tracing::{info, warn};

/// Stub search agent for the (not yet wired up) web backend
pub struct WebSearchAgent;

impl WebSearchAgent {
    pub fn new() -> Self {
        Self
    }

    /// The eventual backend call. No web provider is wired up yet.
    async fn fetch(&self, _query: &str) -> Result<Vec<SearchResult>> {
        bail!("web search backend is not configured")
    }
}

impl Default for WebSearchAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchAgent for WebSearchAgent {
    fn name(&self) -> &str {
        "web_search"
    }

    /// Never errors: failures map to an empty result list so a missing
    /// web backend does not take down the whole coordination.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        info!("Web search requested for '{}'", query);

        match self.fetch(query).await {
            Ok(results) => Ok(results),
            Err(e) => {
                warn!("Web search failed, returning empty results: {}", e);
                Ok(vec![])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_always_resolves_empty() {
        let agent = WebSearchAgent::new();

        for query in ["hello", "", "   ", "{\"not\":\"a query\"}", "\u{0}"] {
            let results = agent.search(query).await.unwrap();
            assert!(results.is_empty());
        }
    }
}
