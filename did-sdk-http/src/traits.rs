use crate::error::{BoxError, Error, Result, UpstreamResponseError};
use crate::types::{Header, JsonRequest};
use http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::future::Future;

/// An abstract HTTP client.
#[trait_variant::make(Send)]
pub trait HttpClient {
    /// Send an HTTP request and return the response.
    fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> impl Future<Output = core::result::Result<Response<Vec<u8>>, BoxError>>;
}

/// An abstract JSON-over-HTTP client.
///
/// [`send_json()`](JsonClient::send_json) method has a default implementation,
/// which wraps the [`HttpClient::send_http()`] method to send the input and decode the output
/// as JSON. A success body that is not JSON is decoded from its text as a JSON string.
#[trait_variant::make(Send)]
pub trait JsonClient: HttpClient {
    /// Send a JSON request and return the decoded response body.
    fn send_json<P, I, O>(&self, request: &JsonRequest<P, I>) -> impl Future<Output = Result<O>>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        O: DeserializeOwned + Send + Sync,
        // `Self` has to be `Sync` for `Future` to be `Send`.
        Self: Sync,
    {
        send_json(self, request)
    }
}

#[inline(always)]
async fn send_json<P, I, O, C: JsonClient + ?Sized>(
    client: &C,
    request: &JsonRequest<P, I>,
) -> Result<O>
where
    P: Serialize + Send + Sync,
    I: Serialize + Send + Sync,
    O: DeserializeOwned + Send + Sync,
{
    let mut uri = request.uri.clone();
    // Query parameters
    if let Some(p) = &request.parameters {
        serde_html_form::to_string(p).map(|qs| {
            uri += "?";
            uri += &qs;
        })?;
    };
    let mut builder = Request::builder()
        .method(&request.method)
        .uri(&uri)
        .header(Header::Accept, Header::json());
    // Body
    let body = if let Some(input) = &request.input {
        builder = builder.header(Header::ContentType, Header::json());
        serde_json::to_vec(input)?
    } else {
        Vec::new()
    };
    tracing::debug!(method = %request.method, %uri, "sending request");
    // Send
    let (parts, body) =
        client.send_http(builder.body(body)?).await.map_err(Error::HttpClient)?.into_parts();
    tracing::debug!(
        status = parts.status.as_u16(),
        body = %String::from_utf8_lossy(&body),
        "raw response"
    );
    if parts.status.is_success() {
        decode_success(&body)
    } else {
        Err(Error::UpstreamResponse(UpstreamResponseError::from_body(parts.status, &body)))
    }
}

fn decode_success<O: DeserializeOwned>(body: &[u8]) -> Result<O> {
    match serde_json::from_slice(body) {
        Ok(output) => Ok(output),
        Err(err) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            serde_json::from_value(Value::String(text)).map_err(|_| err.into())
        }
    }
}
