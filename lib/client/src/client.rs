use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::response::SearchResponse;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use solrq_core::CompositeQuery;
use tracing::{debug, info, warn};

/// Search client bound to one core.
///
/// Each [`SolrClient::search`] call is one POST with no retry. The client is
/// cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct SolrClient {
    config: ClientConfig,
    query_url: String,
    http: reqwest::Client,
}

impl SolrClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig("base_url is empty".to_string()));
        }
        if config.core.trim().is_empty() {
            return Err(Error::InvalidConfig("core is empty".to_string()));
        }

        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        let query_url = config.query_url();

        Ok(Self {
            config,
            query_url,
            http,
        })
    }

    /// Client with the default timeout
    pub fn connect(base_url: impl Into<String>, core: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(base_url, core))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    /// Serialize `query`, POST it to the core's `/query` endpoint and return
    /// the engine's JSON response unmodified.
    pub async fn search(&self, query: &CompositeQuery) -> Result<SearchResponse> {
        let body = query.to_value()?;
        debug!("POST {} body: {}", self.query_url, body);

        let response = self
            .http
            .post(&self.query_url)
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!("Search request to {} failed: {}", self.query_url, e);
                Error::Transport(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            warn!("Failed to read search response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            warn!("Search failed: HTTP {}", status);
            return Err(Error::Response {
                status: status.as_u16(),
                body: text,
            });
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => {
                let response = SearchResponse::new(map);
                info!(
                    "Search on {} returned {} hits",
                    self.config.core,
                    response.num_found().unwrap_or(0)
                );
                Ok(response)
            }
            _ => {
                warn!("Search response is not a JSON object");
                Err(Error::Response {
                    status: status.as_u16(),
                    body: text,
                })
            }
        }
    }
}
