use crate::error::{ensure_non_empty, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn default_top_k() -> usize {
    10
}

/// K-nearest-neighbor search against a dense vector field
///
/// The vector must have the dimensionality configured for `field` in the
/// collection schema. This is the caller's obligation: the query model has no
/// schema access and the engine rejects mismatched vectors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorQuery {
    /// Dense vector field name
    pub field: String,
    /// Query vector, already embedded
    pub vector: Vec<f64>,
    /// Number of nearest neighbors to return
    #[serde(rename = "topK", default = "default_top_k")]
    pub top_k: usize,
}

impl VectorQuery {
    /// Create a vector query, validating it eagerly
    pub fn new(field: impl Into<String>, vector: Vec<f64>, top_k: usize) -> Result<Self> {
        let query = Self {
            field: field.into(),
            vector,
            top_k,
        };
        query.validate()?;
        Ok(query)
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.vector.len()
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_empty("vector_query.field", &self.field)?;
        if self.vector.is_empty() {
            return Err(Error::EmptyVector);
        }
        if let Some(index) = self.vector.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonFiniteVector { index });
        }
        if self.top_k == 0 {
            return Err(Error::InvalidTopK(self.top_k));
        }
        Ok(())
    }

    /// Wire shape: `{"knn": {"field": .., "vector": [..], "topK": ..}}`
    pub fn to_wire(&self) -> Result<Value> {
        self.validate()?;
        let knn = serde_json::to_value(self)?;
        Ok(serde_json::json!({ "knn": knn }))
    }
}
