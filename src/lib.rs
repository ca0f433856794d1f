//! # solrq
//!
//! Typed query construction and retrieval for Solr hybrid search.
//!
//! solrq builds Solr JSON query DSL requests from typed parts instead of
//! hand-written JSON, validates them locally, and posts them to a core.
//!
//! ## Quick Start
//!
//! ### From the command line
//!
//! ```bash
//! solrq --url http://localhost:8983/solr --core vector_collection \
//!     --text "machine learning" --qf "title^5 content^1" --mm 75% --limit 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use solrq::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let query = CompositeQuery::new()
//!     .with_filter("category:Technology")
//!     .with_text(TextQuery::new("machine learning").with_qf("title^5 content^1"))
//!     .with_lexical(LexicalParams::new().with_mm("75%").with_q_op(QueryOperator::And))
//!     .with_vector(VectorQuery::new("content_vector", vec![0.1, 0.2, 0.3], 5)?)
//!     .with_rerank(RerankConfig::new("semantic relevance boost", 50, 0.3)?)
//!     .with_limit(5);
//!
//! let client = SolrClient::connect("http://localhost:8983/solr", "vector_collection")?;
//! let response = client.search(&query).await?;
//! for doc in response.docs() {
//!     println!("{}", doc);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`solrq-core`](https://docs.rs/solrq-core) - Query primitives and wire serialization
//! - [`solrq-client`](https://docs.rs/solrq-client) - HTTP search client
//!
//! ## Features
//!
//! - **Edismax text search**: every edismax knob, `q.op` included
//! - **Dense-vector k-NN**: `knn` sub-queries against a vector field
//! - **Hybrid search**: text and vector sub-queries in one request
//! - **Rerank**: two-stage ranking through `{!rerank}` with the query passed by reference
//! - **Local validation**: bad ranges fail before anything is sent

// Re-export query model
pub use solrq_core::{
    BoostQuery, CompositeQuery, LexicalParams, QueryOperator, RerankConfig, TextQuery,
    VectorQuery, MATCH_ALL,
};

// Re-export client
pub use solrq_client::{ClientConfig, SearchResponse, SolrClient};

/// Validation errors raised while building or serializing queries
pub use solrq_core::Error as QueryError;

/// Errors returned by [`SolrClient::search`]
pub use solrq_client::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BoostQuery, ClientConfig, CompositeQuery, Error, LexicalParams, QueryError,
        QueryOperator, RerankConfig, SearchResponse, SolrClient, TextQuery, VectorQuery,
    };
}
