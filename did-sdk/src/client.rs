//! The client for the DID and resolver services.
mod builder;

pub use self::builder::DidClientBuilder;
use crate::config::Config;
use crate::error::Result;
use crate::types::{CreateDidRequest, DidDocument, DidResolutionResult, IssuedCredential};
use did_sdk_http::{JsonClient, JsonRequest};
#[cfg(feature = "default-client")]
use did_sdk_http_client::reqwest::ReqwestClient;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

/// Query parameters of `GET /dids/resolver`.
#[derive(Serialize)]
struct ResolveParameters<'a> {
    did: &'a str,
}

/// A client for the DID service and the DID resolver service.
///
/// Every operation is a single HTTP round trip. The client holds no mutable state,
/// so clones (which share the underlying HTTP client) can be used concurrently.
pub struct DidClient<T>
where
    T: JsonClient + Send + Sync,
{
    config: Arc<Config>,
    client: Arc<T>,
}

#[cfg_attr(docsrs, doc(cfg(feature = "default-client")))]
#[cfg(feature = "default-client")]
impl DidClient<ReqwestClient> {
    /// Create a new builder with the default [`ReqwestClient`].
    pub fn builder() -> DidClientBuilder<ReqwestClient> {
        DidClientBuilder::default()
    }
}

impl<T> DidClient<T>
where
    T: JsonClient + Send + Sync,
{
    pub fn new(config: Config, client: T) -> Self {
        Self { config: Arc::new(config), client: Arc::new(client) }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }
    /// Create a DID for an organization.
    ///
    /// Sends `POST {did_service_url}/dids`. The organization id is forwarded as-is.
    pub async fn create_did(&self, organization_id: &str) -> Result<DidDocument> {
        let uri = endpoint(&self.config.did_service_url, "dids");
        let input = CreateDidRequest::organization(organization_id);
        self.send("creating DID", JsonRequest::post(uri, input)).await
    }
    /// Resolve a DID to its document.
    ///
    /// Sends `GET {resolver_service_url}/dids/resolver?did={did}`.
    pub async fn resolve_did(&self, did: &str) -> Result<DidResolutionResult> {
        let uri = endpoint(&self.config.resolver_service_url, "dids/resolver");
        self.send("resolving DID", JsonRequest::get(uri, ResolveParameters { did })).await
    }
    /// Issue a credential.
    ///
    /// Sends `POST {did_service_url}/v1/credential` with `credential` as the body.
    /// Any serializable value is accepted; see [`Credential`](crate::types::Credential).
    pub async fn issue_credential<C>(&self, credential: &C) -> Result<IssuedCredential>
    where
        C: Serialize + Send + Sync + ?Sized,
    {
        let uri = endpoint(&self.config.did_service_url, "v1/credential");
        self.send("issuing credential", JsonRequest::post(uri, credential)).await
    }
    async fn send<P, I, O>(&self, operation: &str, request: JsonRequest<P, I>) -> Result<O>
    where
        P: Serialize + Send + Sync,
        I: Serialize + Send + Sync,
        O: DeserializeOwned + Send + Sync,
    {
        Ok(self.client.send_json(&request).await.inspect_err(|err| match err.payload() {
            Some(payload) => tracing::error!(%payload, "Error {operation}"),
            None => tracing::error!(error = %err, "Error {operation}"),
        })?)
    }
}

impl<T> Clone for DidClient<T>
where
    T: JsonClient + Send + Sync,
{
    fn clone(&self) -> Self {
        Self { config: Arc::clone(&self.config), client: Arc::clone(&self.client) }
    }
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{path}", base.trim_end_matches('/'))
}
