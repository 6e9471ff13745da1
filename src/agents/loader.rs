//! Agent loader for initializing agents from configuration

use super::knowledge_base::KnowledgeBaseAgent;
use super::registry::AgentRegistry;
use super::web_search::WebSearchAgent;
use crate::config::Settings;
use crate::network::HttpClient;
use std::sync::Arc;
use tracing::info;

/// Loader for initializing agents from settings
pub struct AgentLoader;

impl AgentLoader {
    /// Build the agent registry from settings. The knowledge-base agent
    /// is always present; the web search agent can be toggled off.
    pub fn load(settings: &Settings, client: &HttpClient) -> AgentRegistry {
        let mut registry = AgentRegistry::new();

        registry.register(Arc::new(KnowledgeBaseAgent::new(
            client.clone(),
            settings.search.endpoint.clone(),
        )));

        if settings.search.enable_web_agent {
            registry.register(Arc::new(WebSearchAgent::new()));
        }

        info!("Loaded {} search agents", registry.len());
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_agents() {
        let settings = Settings::default();
        let client = HttpClient::new().unwrap();
        let registry = AgentLoader::load(&settings, &client);

        assert_eq!(registry.names(), vec!["knowledge_base", "web_search"]);
    }

    #[test]
    fn test_web_agent_toggle() {
        let mut settings = Settings::default();
        settings.search.enable_web_agent = false;
        let client = HttpClient::new().unwrap();
        let registry = AgentLoader::load(&settings, &client);

        assert_eq!(registry.names(), vec!["knowledge_base"]);
    }
}
