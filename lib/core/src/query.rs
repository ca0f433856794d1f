//! The top-level search request and its wire serialization

use crate::error::{ensure_non_empty, Error, Result};
use crate::lexical::LexicalParams;
use crate::rerank::RerankConfig;
use crate::text::TextQuery;
use crate::vector::VectorQuery;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const MATCH_ALL: &str = "*:*";

/// A complete search request: base query, filters, optional text and vector
/// sub-queries, lexical tuning, pagination, projection, sort and rerank.
///
/// Serialization with [`CompositeQuery::to_value`] is pure: equal queries
/// always produce equal wire objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompositeQuery {
    /// Base query, match-all unless narrowed
    pub query: String,
    /// Filter clauses, applied in order
    pub filters: Vec<String>,
    pub text_query: Option<TextQuery>,
    pub lexical: Option<LexicalParams>,
    pub vector_query: Option<VectorQuery>,
    pub limit: i64,
    pub offset: i64,
    /// Field projection
    pub fields: Vec<String>,
    pub sort: Option<String>,
    pub rerank: Option<RerankConfig>,
}

impl Default for CompositeQuery {
    fn default() -> Self {
        Self {
            query: MATCH_ALL.to_string(),
            filters: Vec::new(),
            text_query: None,
            lexical: None,
            vector_query: None,
            limit: 10,
            offset: 0,
            fields: vec!["*".to_string(), "score".to_string()],
            sort: None,
            rerank: None,
        }
    }
}

impl CompositeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<TextQuery>) -> Self {
        self.text_query = Some(text.into());
        self
    }

    pub fn with_lexical(mut self, lexical: LexicalParams) -> Self {
        self.lexical = Some(lexical);
        self
    }

    pub fn with_vector(mut self, vector: VectorQuery) -> Self {
        self.vector_query = Some(vector);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_rerank(mut self, rerank: RerankConfig) -> Self {
        self.rerank = Some(rerank);
        self
    }

    /// Check every invariant of the query tree
    pub fn validate(&self) -> Result<()> {
        ensure_non_empty("query", &self.query)?;
        for filter in &self.filters {
            ensure_non_empty("filter", filter)?;
        }
        if self.limit <= 0 {
            return Err(Error::InvalidLimit(self.limit));
        }
        if self.offset < 0 {
            return Err(Error::InvalidOffset(self.offset));
        }
        if let Some(text) = &self.text_query {
            text.validate()?;
        }
        if let Some(lexical) = &self.lexical {
            lexical.validate()?;
        }
        if let Some(vector) = &self.vector_query {
            vector.validate()?;
        }
        if let Some(rerank) = &self.rerank {
            rerank.validate()?;
        }
        Ok(())
    }

    /// Serialize into the engine's JSON query DSL.
    ///
    /// Optional parts are omitted rather than sent as `null` or empty
    /// collections: no filters means no `filter` key, unset lexical knobs
    /// mean no `params` key.
    pub fn to_value(&self) -> Result<Value> {
        self.validate()?;

        let mut wire = Map::new();
        wire.insert("query".to_string(), Value::from(self.query.as_str()));

        if !self.filters.is_empty() {
            wire.insert("filter".to_string(), Value::from(self.filters.clone()));
        }

        wire.insert("limit".to_string(), Value::from(self.limit));
        wire.insert("offset".to_string(), Value::from(self.offset));
        wire.insert("fields".to_string(), Value::from(self.fields.clone()));

        if let Some(sort) = &self.sort {
            wire.insert("sort".to_string(), Value::from(sort.as_str()));
        }

        if let Some(lexical) = &self.lexical {
            let mut params = lexical.to_wire()?;
            if !params.is_empty() {
                params.insert("defType".to_string(), Value::from("edismax"));
                wire.insert("params".to_string(), Value::Object(params));
            }
        }

        let mut queries = Map::new();
        if let Some(text) = &self.text_query {
            queries.insert(
                "text_query".to_string(),
                text.to_wire(self.lexical.as_ref())?,
            );
        }
        if let Some(vector) = &self.vector_query {
            queries.insert("vector_query".to_string(), vector.to_wire()?);
        }
        if !queries.is_empty() {
            wire.insert("queries".to_string(), Value::Object(queries));
        }

        if let Some(rerank) = &self.rerank {
            wire.insert("rerank".to_string(), rerank.to_wire()?);
        }

        Ok(Value::Object(wire))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_value()?)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_value()?)?)
    }

    /// Parse a query document using this struct's own field names
    /// (not the wire DSL). Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let query: Self = serde_json::from_str(s)?;
        query.validate()?;
        Ok(query)
    }
}
