//! Knowledge-base search agent
//!
//! Queries the internal document search endpoint over HTTP. Upstream
//! failures are reported to the caller: a non-success status becomes an
//! error carrying the message extracted from the response body, and
//! transport failures are logged and propagated.

use super::traits::SearchAgent;
use crate::network::HttpClient;
use crate::results::SearchResult;
use anyhow::{bail, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error};

/// Response shape of the internal search endpoint
#[derive(Debug, Deserialize)]
struct SearchEndpointResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

/// Search agent backed by the internal document search endpoint
pub struct KnowledgeBaseAgent {
    client: HttpClient,
    endpoint: String,
}

impl KnowledgeBaseAgent {
    pub fn new(client: HttpClient, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl SearchAgent for KnowledgeBaseAgent {
    fn name(&self) -> &str {
        "knowledge_base"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let body = json!({ "query": query });

        let response = match self.client.post_json(&self.endpoint, &body).await {
            Ok(response) => response,
            Err(e) => {
                error!("Knowledge base request to {} failed: {}", self.endpoint, e);
                return Err(e);
            }
        };

        if !response.is_success() {
            bail!("{}", response.error_message());
        }

        let parsed: SearchEndpointResponse = response.json()?;
        debug!(
            "Knowledge base returned {} results for '{}'",
            parsed.results.len(),
            query
        );

        Ok(parsed
            .results
            .into_iter()
            .map(|r| r.with_source(self.name()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn agent_for(server: &MockServer) -> KnowledgeBaseAgent {
        let client = HttpClient::new().unwrap();
        KnowledgeBaseAgent::new(client, format!("{}/api/search", server.uri()))
    }

    #[tokio::test]
    async fn test_search_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .and(body_json(json!({ "query": "rust" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "title": "The Rust Book", "url": "https://doc.rust-lang.org/book/" }
                ]
            })))
            .mount(&server)
            .await;

        let results = agent_for(&server).search("rust").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title.as_deref(), Some("The Rust Book"));
        assert_eq!(results[0].source.as_deref(), Some("knowledge_base"));
    }

    #[tokio::test]
    async fn test_search_upstream_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(
                ResponseTemplate::new(502).set_body_json(json!({ "error": "index offline" })),
            )
            .mount(&server)
            .await;

        let err = agent_for(&server).search("rust").await.unwrap_err();
        assert_eq!(err.to_string(), "index offline");
    }

    #[tokio::test]
    async fn test_search_empty_results() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;

        let results = agent_for(&server).search("nothing").await.unwrap();
        assert!(results.is_empty());
    }
}
