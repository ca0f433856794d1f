use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;

/// The engine's JSON response, passed through untouched.
///
/// Hits carry whatever fields the query projected, so the body stays a
/// generic JSON object. The accessors below only read from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResponse(Map<String, Value>);

impl SearchResponse {
    pub fn new(body: Map<String, Value>) -> Self {
        Self(body)
    }

    /// `response.numFound`, if present
    pub fn num_found(&self) -> Option<u64> {
        self.0.get("response")?.get("numFound")?.as_u64()
    }

    /// `response.docs`, or an empty slice when absent
    pub fn docs(&self) -> &[Value] {
        self.0
            .get("response")
            .and_then(|r| r.get("docs"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl Deref for SearchResponse {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<SearchResponse> for Value {
    fn from(response: SearchResponse) -> Self {
        Value::Object(response.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> SearchResponse {
        match value {
            Value::Object(map) => SearchResponse::new(map),
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_accessors() {
        let r = response(json!({
            "responseHeader": {"status": 0},
            "response": {"numFound": 2, "docs": [{"id": "1"}, {"id": "2"}]}
        }));
        assert_eq!(r.num_found(), Some(2));
        assert_eq!(r.docs().len(), 2);
        assert_eq!(r["responseHeader"]["status"], 0);
    }

    #[test]
    fn test_missing_response_section() {
        let r = response(json!({"error": {"msg": "boom"}}));
        assert_eq!(r.num_found(), None);
        assert!(r.docs().is_empty());
    }
}
