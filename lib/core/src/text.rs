//! Text query embedded as an `edismax` sub-query

use crate::error::{ensure_finite, ensure_non_empty, Result};
use crate::lexical::LexicalParams;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw user text scored with edismax
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextQuery {
    pub query: String,
    /// Query fields with boosts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qf: Option<String>,
    /// Minimum match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mm: Option<String>,
    /// Relevance weight of the text clause
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost: Option<f64>,
}

impl TextQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            qf: None,
            mm: None,
            boost: None,
        }
    }

    pub fn with_qf(mut self, qf: impl Into<String>) -> Self {
        self.qf = Some(qf.into());
        self
    }

    pub fn with_mm(mut self, mm: impl Into<String>) -> Self {
        self.mm = Some(mm.into());
        self
    }

    pub fn with_boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_empty("text_query.query", &self.query)?;
        if let Some(boost) = self.boost {
            ensure_finite("text_query.boost", boost)?;
        }
        Ok(())
    }

    /// Build `{"edismax": {"query": .., ..}}`.
    ///
    /// Keys are layered in order: the query text, this query's own `qf`,
    /// `mm` and `boost`, then every set lexical knob. Lexical keys win on
    /// collision.
    pub fn to_wire(&self, lexical: Option<&LexicalParams>) -> Result<Value> {
        self.validate()?;

        let mut edismax = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        if let Some(lexical) = lexical {
            edismax.extend(lexical.to_wire()?);
        }

        let mut wire = Map::new();
        wire.insert("edismax".to_string(), Value::Object(edismax));
        Ok(Value::Object(wire))
    }
}

impl From<&str> for TextQuery {
    fn from(query: &str) -> Self {
        TextQuery::new(query)
    }
}

impl From<String> for TextQuery {
    fn from(query: String) -> Self {
        TextQuery::new(query)
    }
}
