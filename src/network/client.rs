//! HTTP client for making requests to external providers

use crate::config::ProviderSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

/// User agent sent on all outbound requests
const USER_AGENT: &str = concat!("agent-gateway/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper with gateway-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&ProviderSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &ProviderSettings) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .user_agent(USER_AGENT)
            .gzip(true);

        if let Some(ref proxy_url) = settings.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        }

        let client = builder.build()?;

        Ok(Self { client })
    }

    /// Simple GET request
    pub async fn get(&self, url: &str) -> Result<ProviderResponse> {
        let response = self.client.get(url).send().await?;
        Self::parse_response(response).await
    }

    /// POST with JSON body
    pub async fn post_json(
        &self,
        url: &str,
        json: &serde_json::Value,
    ) -> Result<ProviderResponse> {
        let response = self.client.post(url).json(json).send().await?;
        Self::parse_response(response).await
    }

    /// POST with JSON body and extra headers (e.g. authorization)
    pub async fn post_json_with_headers(
        &self,
        url: &str,
        json: &serde_json::Value,
        headers: &HashMap<String, String>,
    ) -> Result<ProviderResponse> {
        let mut req_builder = self.client.post(url).json(json);
        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }
        let response = req_builder.send().await?;
        Self::parse_response(response).await
    }

    /// Parse response into ProviderResponse
    async fn parse_response(response: Response) -> Result<ProviderResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let text = response.text().await?;

        Ok(ProviderResponse { status, text, url })
    }
}

/// HTTP response from a provider request
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ProviderResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Best-effort extraction of an error message from the body.
    ///
    /// Providers report failures as `{"error": "..."}` or
    /// `{"error": {"message": "..."}}`; fall back to the raw body, then
    /// to the status code.
    pub fn error_message(&self) -> String {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&self.text) {
            if let Some(msg) = value.get("error").and_then(|e| e.as_str()) {
                return msg.to_string();
            }
            if let Some(msg) = value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                return msg.to_string();
            }
        }
        if !self.text.trim().is_empty() {
            return self.text.trim().to_string();
        }
        format!("HTTP error: {}", self.status)
    }
}
