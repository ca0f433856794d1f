//! # solrq Client
//!
//! Posts [`solrq_core::CompositeQuery`] values to a Solr core's JSON query
//! endpoint (`<base_url>/<core>/query`) and hands back the engine's response.
//!
//! Failures come back as one of three [`Error`] kinds: the query was invalid
//! and never sent, the request did not complete, or the engine answered with
//! an error status or a body that is not JSON. There is no retry.
//!
//! ```rust,no_run
//! use solrq_client::SolrClient;
//! use solrq_core::CompositeQuery;
//!
//! # async fn run() -> solrq_client::Result<()> {
//! let client = SolrClient::connect("http://localhost:8983/solr", "vector_collection")?;
//! let response = client.search(&CompositeQuery::new().with_text("machine learning")).await?;
//! println!("{:?} hits", response.num_found());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod response;

pub use client::SolrClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use response::SearchResponse;
