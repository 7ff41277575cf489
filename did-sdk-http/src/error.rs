#![doc = "Error types."]
use http::StatusCode;
use serde_json::Value;
use std::fmt::{self, Debug, Display};

/// Error type for pluggable HTTP clients.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A non-success response returned by an upstream service.
///
/// `payload` holds the response body as JSON if it could be parsed,
/// otherwise the non-empty body as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponseError {
    pub status: StatusCode,
    pub payload: Option<Value>,
}

impl UpstreamResponseError {
    pub(crate) fn from_body(status: StatusCode, body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<Value>(body).ok().or_else(|| {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            (!text.is_empty()).then(|| Value::String(text.to_string()))
        });
        Self { status, payload }
    }
}

impl Display for UpstreamResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status.as_str())?;
        match &self.payload {
            Some(Value::String(s)) => write!(f, " {s}"),
            Some(payload) => write!(f, " {payload}"),
            None => Ok(()),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("upstream response error: {0}")]
    UpstreamResponse(UpstreamResponseError),
    #[error("http request error: {0}")]
    HttpRequest(#[from] http::Error),
    #[error("http client error: {0}")]
    HttpClient(BoxError),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("serde_html_form error: {0}")]
    SerdeHtmlForm(#[from] serde_html_form::ser::Error),
}

impl Error {
    /// The payload returned by the upstream service, if the request reached it.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::UpstreamResponse(e) => e.payload.as_ref(),
            _ => None,
        }
    }
    /// The HTTP status returned by the upstream service, if the request reached it.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UpstreamResponse(e) => Some(e.status),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
