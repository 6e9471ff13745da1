//! Settings structures for the agent gateway configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub provider: ProviderSettings,
    pub search: SearchSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            server: ServerSettings::default(),
            provider: ProviderSettings::default(),
            search: SearchSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables (AGENT_GATEWAY_* prefix, plus
    /// OPENAI_API_KEY which is passed through unmodified)
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("AGENT_GATEWAY_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Ok(val) = std::env::var("AGENT_GATEWAY_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("AGENT_GATEWAY_QA_PORT") {
            if let Ok(port) = val.parse() {
                self.server.qa_port = port;
            }
        }
        if let Ok(val) = std::env::var("AGENT_GATEWAY_SEARCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.search_port = port;
            }
        }
        if let Ok(val) = std::env::var("OPENAI_API_KEY") {
            self.provider.api_key = Some(val);
        }
        if let Ok(val) = std::env::var("AGENT_GATEWAY_PROVIDER_URL") {
            self.provider.base_url = val;
        }
        if let Ok(val) = std::env::var("AGENT_GATEWAY_MODEL") {
            self.provider.model = val;
        }
        if let Ok(val) = std::env::var("AGENT_GATEWAY_SEARCH_ENDPOINT") {
            self.search.endpoint = val;
        }
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug mode
    pub debug: bool,
    /// Instance name used in logs and the health endpoint
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "agent-gateway".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address shared by both services
    pub bind_address: String,
    /// Port for the document-QA service
    pub qa_port: u16,
    /// Port for the search-coordinator service
    pub search_port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            qa_port: 3000,
            search_port: 3001,
        }
    }
}

/// LLM provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the OpenAI-compatible API
    pub base_url: String,
    /// API key (usually supplied via OPENAI_API_KEY)
    pub api_key: Option<String>,
    /// Model name passed through to the provider
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Request timeout in seconds for all outbound calls
    pub request_timeout: f64,
    /// Optional proxy URL for outbound requests
    pub proxy: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            proxy: None,
        }
    }
}

/// Search coordination settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Internal search endpoint queried by the knowledge-base agent
    pub endpoint: String,
    /// Whether to register the web search agent alongside the
    /// knowledge-base agent
    pub enable_web_agent: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8100/api/search".to_string(),
            enable_web_agent: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.qa_port, 3000);
        assert_eq!(settings.server.search_port, 3001);
        assert!(settings.provider.api_key.is_none());
        assert!(settings.search.enable_web_agent);
    }

    #[test]
    fn test_merge_env_overrides() {
        std::env::set_var("AGENT_GATEWAY_QA_PORT", "9000");
        std::env::set_var("AGENT_GATEWAY_MODEL", "gpt-4o");
        std::env::set_var("OPENAI_API_KEY", "sk-env");

        let mut settings = Settings::default();
        settings.merge_env();

        assert_eq!(settings.server.qa_port, 9000);
        assert_eq!(settings.provider.model, "gpt-4o");
        assert_eq!(settings.provider.api_key.as_deref(), Some("sk-env"));

        std::env::remove_var("AGENT_GATEWAY_QA_PORT");
        std::env::remove_var("AGENT_GATEWAY_MODEL");
        std::env::remove_var("OPENAI_API_KEY");
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
server:
  qa_port: 8080
provider:
  model: gpt-4o
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(settings.server.qa_port, 8080);
        assert_eq!(settings.server.search_port, 3001);
        assert_eq!(settings.provider.model, "gpt-4o");
        assert_eq!(settings.general.instance_name, "agent-gateway");
    }
}
