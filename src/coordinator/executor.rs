//! Coordinated search execution

use super::models::{AgentResponse, ConversationContext};
use crate::agents::AgentRegistry;
use crate::results::SearchResult;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

/// Coordinator that delegates a query to the registered search agents.
///
/// Aggregation policy: every agent is queried concurrently; result
/// lists are concatenated in registration order, without ranking or
/// deduplication. The first agent error aborts the coordination.
pub struct Coordinator {
    registry: Arc<AgentRegistry>,
}

impl Coordinator {
    /// Create a new coordinator over an agent registry
    pub fn new(registry: Arc<AgentRegistry>) -> Self {
        Self { registry }
    }

    /// Names of the agents this coordinator delegates to
    pub fn agent_names(&self) -> Vec<&str> {
        self.registry.names()
    }

    /// Execute a coordinated search
    pub async fn coordinate(
        &self,
        query: &str,
        context: &ConversationContext,
    ) -> anyhow::Result<AgentResponse> {
        if query.trim().is_empty() || self.registry.is_empty() {
            return Ok(AgentResponse::default());
        }

        info!(
            "Coordinating search '{}' across {} agents ({} history turns)",
            query,
            self.registry.len(),
            context.len()
        );

        let futures: Vec<_> = self
            .registry
            .iter_ordered()
            .map(|agent| {
                let agent = agent.clone();
                let query = query.to_string();
                async move {
                    let start = Instant::now();
                    let outcome = agent.search(&query).await;
                    (agent.name().to_string(), outcome, start.elapsed())
                }
            })
            .collect();

        let outcomes = join_all(futures).await;

        let mut results: Vec<SearchResult> = Vec::new();
        for (name, outcome, elapsed) in outcomes {
            match outcome {
                Ok(agent_results) => {
                    debug!(
                        "Agent {} returned {} results in {:?}",
                        name,
                        agent_results.len(),
                        elapsed
                    );
                    results.extend(agent_results);
                }
                Err(e) => {
                    error!("Agent {} failed after {:?}: {}", name, elapsed, e);
                    return Err(e);
                }
            }
        }

        Ok(AgentResponse { results })
    }
}
