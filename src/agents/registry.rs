//! Agent registry for managing available search agents

use super::traits::SearchAgent;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of all available search agents.
///
/// Registration order is preserved; the coordinator aggregates results
/// in that order.
pub struct AgentRegistry {
    /// Agents by name
    agents: HashMap<String, Arc<dyn SearchAgent>>,
    /// Registration order
    order: Vec<String>,
}

impl AgentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            agents: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an agent. Re-registering a name replaces the agent but
    /// keeps its original position.
    pub fn register(&mut self, agent: Arc<dyn SearchAgent>) {
        let name = agent.name().to_string();
        if !self.agents.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.agents.insert(name, agent);
    }

    /// Get an agent by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn SearchAgent>> {
        self.agents.get(name)
    }

    /// Get all agents in registration order
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Arc<dyn SearchAgent>> {
        self.order.iter().filter_map(|name| self.agents.get(name))
    }

    /// Get all agent names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.order.iter().map(|s| s.as_str()).collect()
    }

    /// Check if an agent exists
    pub fn contains(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// Get number of registered agents
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::web_search::WebSearchAgent;

    #[test]
    fn test_registry() {
        let mut registry = AgentRegistry::new();
        registry.register(Arc::new(WebSearchAgent::new()));

        assert!(registry.contains("web_search"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names(), vec!["web_search"]);
    }

    #[test]
    fn test_reregister_keeps_position() {
        let mut registry = AgentRegistry::new();
        registry.register(Arc::new(WebSearchAgent::new()));
        registry.register(Arc::new(WebSearchAgent::new()));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.iter_ordered().count(), 1);
    }
}
