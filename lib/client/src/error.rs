use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The query violated an invariant and was never sent
    #[error("Invalid query: {0}")]
    Validation(#[from] solrq_core::Error),

    /// The request could not complete: connection failure, timeout, body read
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The engine answered with a non-success status or a body that is not a
    /// JSON object
    #[error("Engine response error (HTTP {status}): {body}")]
    Response { status: u16, body: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }

    pub fn is_response(&self) -> bool {
        matches!(self, Error::Response { .. })
    }

    /// HTTP status of a response error
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Response { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
