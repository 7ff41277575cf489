use did_sdk_http::http::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Error type for this crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Upstream(#[from] did_sdk_http::Error),
    #[error("loading config error: {0}")]
    ConfigLoad(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// The payload returned by the upstream service, if any.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Upstream(e) => e.payload(),
            _ => None,
        }
    }
    /// The HTTP status returned by the upstream service, if any.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Upstream(e) => e.status(),
            _ => None,
        }
    }
}

/// Type alias to use this crate's [`Error`](enum@crate::Error) type in a
/// [`Result`](core::result::Result).
pub type Result<T> = core::result::Result<T, Error>;
