//! # solrq Core
//!
//! Query model for the Solr JSON query DSL.
//!
//! This crate provides the query primitives and their serialization:
//!
//! - [`LexicalParams`] - edismax tuning knobs (`qf`, `mm`, `pf`, `tie`, `q.op`, ...)
//! - [`TextQuery`] - raw text scored with edismax
//! - [`VectorQuery`] - dense vector k-NN search
//! - [`RerankConfig`] - second-stage rerank directive
//! - [`CompositeQuery`] - the full request, serialized with [`CompositeQuery::to_value`]
//!
//! Nothing here performs I/O. Invalid values (negative offsets, `topK` of zero,
//! a tie breaker outside `0.0..=1.0`, ...) fail with an [`Error`] instead of
//! reaching the engine.
//!
//! ## Example
//!
//! ```rust
//! use solrq_core::{CompositeQuery, LexicalParams, TextQuery, VectorQuery};
//!
//! let query = CompositeQuery::new()
//!     .with_filter("category:Technology")
//!     .with_text(TextQuery::new("machine learning").with_qf("title^5 content^1"))
//!     .with_lexical(LexicalParams::new().with_mm("75%"))
//!     .with_vector(VectorQuery::new("content_vector", vec![0.1, 0.2, 0.3], 5).unwrap());
//!
//! let wire = query.to_value().unwrap();
//! assert_eq!(wire["queries"]["text_query"]["edismax"]["mm"], "75%");
//! assert_eq!(wire["queries"]["vector_query"]["knn"]["topK"], 5);
//! ```

pub mod error;
pub mod lexical;
pub mod text;
pub mod vector;
pub mod rerank;
pub mod query;

pub use error::{Error, Result};
pub use lexical::{BoostQuery, LexicalParams, QueryOperator};
pub use text::TextQuery;
pub use vector::VectorQuery;
pub use rerank::RerankConfig;
pub use query::{CompositeQuery, MATCH_ALL};
