//! Lexical (edismax) relevance parameters
//!
//! Every knob is optional; an unset knob is left to the engine default and
//! never appears on the wire. Wire names follow the field names, with a single
//! exception: `q_op` travels as `q.op`.

use crate::error::{ensure_finite, Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default boolean operator applied between query terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum QueryOperator {
    And,
    Or,
}

/// One boost query or several
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BoostQuery {
    Single(String),
    Many(Vec<String>),
}

impl From<&str> for BoostQuery {
    fn from(bq: &str) -> Self {
        BoostQuery::Single(bq.to_string())
    }
}

impl From<String> for BoostQuery {
    fn from(bq: String) -> Self {
        BoostQuery::Single(bq)
    }
}

impl From<Vec<String>> for BoostQuery {
    fn from(bqs: Vec<String>) -> Self {
        BoostQuery::Many(bqs)
    }
}

/// Extended DisMax tuning parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexicalParams {
    /// Query fields with boosts, e.g. `title^5 description^1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qf: Option<String>,
    /// Minimum match expression, e.g. `2<75%`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mm: Option<String>,
    /// Phrase fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf: Option<String>,
    /// Phrase slop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ps: Option<u32>,
    /// Bigram phrase fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf2: Option<String>,
    /// Bigram phrase slop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ps2: Option<u32>,
    /// Trigram phrase fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pf3: Option<String>,
    /// Trigram phrase slop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ps3: Option<u32>,
    /// Tie breaker, within `0.0..=1.0`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tie: Option<f64>,
    /// Additive boost query (or queries)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bq: Option<BoostQuery>,
    /// Additive boost function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bf: Option<String>,
    /// Multiplicative boost function
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boost: Option<String>,
    /// Query phrase slop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qs: Option<u32>,
    #[serde(rename = "q.op", default, skip_serializing_if = "Option::is_none")]
    pub q_op: Option<QueryOperator>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<bool>,
    #[serde(rename = "lowercaseOperators", default, skip_serializing_if = "Option::is_none")]
    pub lowercase_operators: Option<bool>,
    /// Split on whitespace
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sow: Option<bool>,
}

impl LexicalParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_qf(mut self, qf: impl Into<String>) -> Self {
        self.qf = Some(qf.into());
        self
    }

    pub fn with_mm(mut self, mm: impl Into<String>) -> Self {
        self.mm = Some(mm.into());
        self
    }

    pub fn with_pf(mut self, pf: impl Into<String>) -> Self {
        self.pf = Some(pf.into());
        self
    }

    pub fn with_ps(mut self, ps: u32) -> Self {
        self.ps = Some(ps);
        self
    }

    pub fn with_pf2(mut self, pf2: impl Into<String>) -> Self {
        self.pf2 = Some(pf2.into());
        self
    }

    pub fn with_ps2(mut self, ps2: u32) -> Self {
        self.ps2 = Some(ps2);
        self
    }

    pub fn with_pf3(mut self, pf3: impl Into<String>) -> Self {
        self.pf3 = Some(pf3.into());
        self
    }

    pub fn with_ps3(mut self, ps3: u32) -> Self {
        self.ps3 = Some(ps3);
        self
    }

    /// Set the tie breaker, rejecting values outside `0.0..=1.0`
    pub fn with_tie(mut self, tie: f64) -> Result<Self> {
        check_tie(tie)?;
        self.tie = Some(tie);
        Ok(self)
    }

    pub fn with_bq(mut self, bq: impl Into<BoostQuery>) -> Self {
        self.bq = Some(bq.into());
        self
    }

    pub fn with_bf(mut self, bf: impl Into<String>) -> Self {
        self.bf = Some(bf.into());
        self
    }

    pub fn with_boost(mut self, boost: impl Into<String>) -> Self {
        self.boost = Some(boost.into());
        self
    }

    pub fn with_qs(mut self, qs: u32) -> Self {
        self.qs = Some(qs);
        self
    }

    pub fn with_q_op(mut self, op: QueryOperator) -> Self {
        self.q_op = Some(op);
        self
    }

    pub fn with_stopwords(mut self, stopwords: bool) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    pub fn with_lowercase_operators(mut self, lowercase: bool) -> Self {
        self.lowercase_operators = Some(lowercase);
        self
    }

    pub fn with_sow(mut self, sow: bool) -> Self {
        self.sow = Some(sow);
        self
    }

    /// True when no knob is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(tie) = self.tie {
            check_tie(tie)?;
        }
        Ok(())
    }

    /// Flatten the set knobs into a wire object keyed by their wire names.
    ///
    /// Used for both the top-level `params` object and the embedded
    /// `edismax` text sub-query, so the `q.op` rename applies to both.
    pub fn to_wire(&self) -> Result<Map<String, Value>> {
        self.validate()?;
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            // A struct always serializes to an object
            _ => Ok(Map::new()),
        }
    }
}

fn check_tie(tie: f64) -> Result<()> {
    ensure_finite("tie", tie)?;
    if (0.0..=1.0).contains(&tie) {
        Ok(())
    } else {
        Err(Error::InvalidTieBreaker(tie))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_params_produce_empty_wire() {
        let params = LexicalParams::new();
        assert!(params.is_empty());
        assert!(params.to_wire().unwrap().is_empty());
    }

    #[test]
    fn test_q_op_uses_dotted_key() {
        let params = LexicalParams::new().with_q_op(QueryOperator::And);
        let wire = params.to_wire().unwrap();
        assert_eq!(wire.get("q.op"), Some(&json!("AND")));
        assert!(!wire.contains_key("q_op"));
    }

    #[test]
    fn test_only_set_fields_are_emitted() {
        let params = LexicalParams::new()
            .with_qf("title^5 content^1")
            .with_ps(2)
            .with_lowercase_operators(false)
            .with_tie(0.1)
            .unwrap();

        assert_eq!(
            Value::Object(params.to_wire().unwrap()),
            json!({
                "qf": "title^5 content^1",
                "ps": 2,
                "tie": 0.1,
                "lowercaseOperators": false
            })
        );
    }

    #[test]
    fn test_boost_query_single_or_many() {
        let single = LexicalParams::new().with_bq("category:Science^2");
        assert_eq!(single.to_wire().unwrap()["bq"], json!("category:Science^2"));

        let many = LexicalParams::new().with_bq(vec![
            "category:Science^2".to_string(),
            "tags:ai^3".to_string(),
        ]);
        assert_eq!(
            many.to_wire().unwrap()["bq"],
            json!(["category:Science^2", "tags:ai^3"])
        );
    }

    #[test]
    fn test_tie_out_of_range_rejected() {
        assert!(matches!(
            LexicalParams::new().with_tie(1.5),
            Err(Error::InvalidTieBreaker(_))
        ));
        assert!(LexicalParams::new().with_tie(-0.1).is_err());
        assert!(LexicalParams::new().with_tie(f64::NAN).is_err());
        assert!(LexicalParams::new().with_tie(0.0).is_ok());
        assert!(LexicalParams::new().with_tie(1.0).is_ok());
    }

    #[test]
    fn test_tie_set_directly_is_caught_on_serialize() {
        let params = LexicalParams {
            tie: Some(1.5),
            ..Default::default()
        };
        assert!(matches!(params.to_wire(), Err(Error::InvalidTieBreaker(_))));
    }

    #[test]
    fn test_deserialize_wire_names() {
        let params: LexicalParams = serde_json::from_value(json!({
            "mm": "75%",
            "q.op": "OR",
            "lowercaseOperators": true
        }))
        .unwrap();
        assert_eq!(params.mm.as_deref(), Some("75%"));
        assert_eq!(params.q_op, Some(QueryOperator::Or));
        assert_eq!(params.lowercase_operators, Some(true));
    }
}
