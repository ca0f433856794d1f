//! Second-stage rerank directive
//!
//! The rerank query is never spliced into the directive. The directive refers
//! to it through the `$rq` parameter and the raw text travels in `params.rq`.

use crate::error::{ensure_finite, ensure_non_empty, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

fn default_rerank_docs() -> usize {
    100
}

fn default_rerank_weight() -> f64 {
    0.5
}

/// Rerank the top `rerank_docs` first-stage hits with `query`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RerankConfig {
    pub query: String,
    #[serde(rename = "reRankDocs", default = "default_rerank_docs")]
    pub rerank_docs: usize,
    /// Blend weight applied by the engine to the second-stage score
    #[serde(rename = "reRankWeight", default = "default_rerank_weight")]
    pub rerank_weight: f64,
}

impl RerankConfig {
    pub fn new(query: impl Into<String>, rerank_docs: usize, rerank_weight: f64) -> Result<Self> {
        let config = Self {
            query: query.into(),
            rerank_docs,
            rerank_weight,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_empty("rerank.query", &self.query)?;
        if self.rerank_docs == 0 {
            return Err(Error::InvalidRerankDocs(self.rerank_docs));
        }
        ensure_finite("rerank.reRankWeight", self.rerank_weight)
    }

    /// The `{!rerank ..}` local-params directive
    pub fn directive(&self) -> String {
        format!(
            "{{!rerank reRankQuery=$rq reRankDocs={} reRankWeight={}}}",
            self.rerank_docs, self.rerank_weight
        )
    }

    pub fn to_wire(&self) -> Result<Value> {
        self.validate()?;
        Ok(json!({
            "query": self.directive(),
            "params": { "rq": self.query }
        }))
    }
}
