use http::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use http::Method;
use serde::Serialize;

pub(crate) const APPLICATION_JSON: &str = "application/json";

/// HTTP headers which are set on JSON requests.
pub enum Header {
    ContentType,
    Accept,
}

impl From<Header> for HeaderName {
    fn from(value: Header) -> Self {
        match value {
            Header::ContentType => CONTENT_TYPE,
            Header::Accept => ACCEPT,
        }
    }
}

impl Header {
    pub(crate) fn json() -> HeaderValue {
        HeaderValue::from_static(APPLICATION_JSON)
    }
}

/// A request which can be executed with [`JsonClient::send_json()`](crate::JsonClient::send_json).
///
/// `uri` is the absolute endpoint; `parameters` are appended as a form-encoded query string,
/// and `input` is serialized as the JSON request body.
pub struct JsonRequest<P, I>
where
    I: Serialize,
{
    pub method: Method,
    pub uri: String,
    pub parameters: Option<P>,
    pub input: Option<I>,
}

impl<P> JsonRequest<P, ()> {
    /// A `GET` request with query parameters and no body.
    pub fn get(uri: impl Into<String>, parameters: P) -> Self {
        Self { method: Method::GET, uri: uri.into(), parameters: Some(parameters), input: None }
    }
}

impl<I> JsonRequest<(), I>
where
    I: Serialize,
{
    /// A `POST` request with a JSON body and no query parameters.
    pub fn post(uri: impl Into<String>, input: I) -> Self {
        Self { method: Method::POST, uri: uri.into(), parameters: None, input: Some(input) }
    }
}
