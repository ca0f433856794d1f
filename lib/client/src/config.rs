//! Client endpoint configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8983/solr";
pub const DEFAULT_CORE: &str = "vector_collection";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how long to search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Engine base URL, e.g. `http://localhost:8983/solr`
    pub base_url: String,
    /// Target core (collection) name
    pub core: String,
    /// Request timeout
    #[serde(rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            core: DEFAULT_CORE.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, core: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            core: core.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `<base_url>/<core>/query`
    pub fn query_url(&self) -> String {
        format!("{}/{}/query", self.base_url.trim_end_matches('/'), self.core)
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}
