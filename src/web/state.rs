//! Application state shared across handlers

use crate::agents::AgentRegistry;
use crate::config::Settings;
use crate::coordinator::Coordinator;
use crate::llm::LlmClient;
use crate::network::HttpClient;
use crate::qa::QaService;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Document-QA service
    pub qa: Arc<QaService>,
    /// Search coordinator
    pub coordinator: Arc<Coordinator>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, registry: AgentRegistry, client: HttpClient) -> Self {
        let llm = LlmClient::new(client, &settings.provider);
        let qa = Arc::new(QaService::new(llm));
        let coordinator = Arc::new(Coordinator::new(Arc::new(registry)));

        Self {
            settings: Arc::new(settings),
            qa,
            coordinator,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
