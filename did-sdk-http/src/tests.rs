use crate::error::{BoxError, Error, UpstreamResponseError};
use crate::{HttpClient, JsonClient, JsonRequest};
use http::{Method, Request, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Mutex;

struct DummyClient {
    status: StatusCode,
    body: Vec<u8>,
    requests: Mutex<Vec<Request<Vec<u8>>>>,
}

impl DummyClient {
    fn new(status: StatusCode, body: &str) -> Self {
        Self { status, body: body.as_bytes().to_vec(), requests: Mutex::new(Vec::new()) }
    }
}

impl HttpClient for DummyClient {
    async fn send_http(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, BoxError> {
        self.requests.lock().expect("poisoned").push(request);
        let builder = Response::builder()
            .status(self.status)
            .header(http::header::CONTENT_TYPE, "application/json");
        Ok(builder.body(self.body.clone())?)
    }
}

impl JsonClient for DummyClient {}

struct FailingClient;

impl HttpClient for FailingClient {
    async fn send_http(&self, _request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, BoxError> {
        Err("connection refused".into())
    }
}

impl JsonClient for FailingClient {}

#[derive(Serialize, Deserialize, Debug)]
struct Parameters {
    did: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct Input {
    data: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Output {
    data: String,
}

#[tokio::test]
async fn get_with_parameters() {
    let client = DummyClient::new(StatusCode::OK, r#"{"data":"bar"}"#);
    let output = client
        .send_json::<_, (), Output>(&JsonRequest::get(
            "http://resolver.test/dids/resolver",
            Parameters { did: "did:example:org-1".into() },
        ))
        .await
        .expect("must be ok");
    assert_eq!(output, Output { data: "bar".into() });

    let requests = client.requests.lock().expect("poisoned");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method(), Method::GET);
    assert_eq!(
        request.uri().to_string(),
        "http://resolver.test/dids/resolver?did=did%3Aexample%3Aorg-1"
    );
    assert!(request.headers().get(http::header::CONTENT_TYPE).is_none());
    assert!(request.body().is_empty());
}

#[tokio::test]
async fn post_with_input() {
    let client = DummyClient::new(StatusCode::CREATED, r#"{"data":"bar"}"#);
    let output = client
        .send_json::<(), _, Output>(&JsonRequest::post(
            "http://did.test/dids",
            Input { data: "foo".into() },
        ))
        .await
        .expect("must be ok");
    assert_eq!(output, Output { data: "bar".into() });

    let requests = client.requests.lock().expect("poisoned");
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method(), Method::POST);
    assert_eq!(request.uri().to_string(), "http://did.test/dids");
    assert_eq!(
        request.headers().get(http::header::CONTENT_TYPE).map(|v| v.as_bytes()),
        Some("application/json".as_bytes())
    );
    assert_eq!(
        serde_json::from_slice::<Value>(request.body()).expect("json body"),
        json!({"data": "foo"})
    );
}

#[tokio::test]
async fn response_upstream_error() {
    let client = DummyClient::new(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"invalid org"}"#);
    let result = client
        .send_json::<(), _, Output>(&JsonRequest::post(
            "http://did.test/dids",
            Input { data: "foo".into() },
        ))
        .await;
    match result.expect_err("must be error") {
        Error::UpstreamResponse(err) => {
            assert_eq!(
                err,
                UpstreamResponseError {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    payload: Some(json!({"error": "invalid org"})),
                }
            );
        }
        err => panic!("must be Error::UpstreamResponse, got {err:?}"),
    }
}

#[tokio::test]
async fn response_not_json() {
    let client = DummyClient::new(StatusCode::OK, "not json");
    let result = client
        .send_json::<(), _, Output>(&JsonRequest::post("http://did.test/dids", ()))
        .await;
    assert!(matches!(result, Err(Error::SerdeJson(_))), "got {result:?}");
}

#[tokio::test]
async fn response_text_as_value() {
    let client = DummyClient::new(StatusCode::OK, "did:example:1\n");
    let output = client
        .send_json::<(), _, Value>(&JsonRequest::post("http://did.test/dids", ()))
        .await
        .expect("must be ok");
    assert_eq!(output, Value::String("did:example:1".into()));

    let client = DummyClient::new(StatusCode::NO_CONTENT, "");
    let output = client
        .send_json::<(), _, Value>(&JsonRequest::post("http://did.test/dids", ()))
        .await
        .expect("must be ok");
    assert_eq!(output, Value::String(String::new()));
}

#[tokio::test]
async fn transport_failure() {
    let result = FailingClient
        .send_json::<_, (), Value>(&JsonRequest::get(
            "http://resolver.test/dids/resolver",
            Parameters { did: "did:example:org-1".into() },
        ))
        .await;
    match result.expect_err("must be error") {
        Error::HttpClient(err) => assert_eq!(err.to_string(), "connection refused"),
        err => panic!("must be Error::HttpClient, got {err:?}"),
    }
}

#[tokio::test]
async fn invalid_uri() {
    let client = DummyClient::new(StatusCode::OK, "{}");
    let result = client
        .send_json::<(), _, Value>(&JsonRequest::post("http://did test/dids", ()))
        .await;
    assert!(matches!(result, Err(Error::HttpRequest(_))), "got {result:?}");
    assert!(client.requests.lock().expect("poisoned").is_empty());
}
