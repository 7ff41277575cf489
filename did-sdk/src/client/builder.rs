use super::DidClient;
use crate::config::Config;
use did_sdk_http::JsonClient;
#[cfg(feature = "default-client")]
use did_sdk_http_client::reqwest::ReqwestClient;

/// A builder for creating a [`DidClient`].
///
/// URLs set with [`did_service_url`](Self::did_service_url) or
/// [`resolver_service_url`](Self::resolver_service_url) after [`config`](Self::config)
/// take precedence over the values of that configuration.
pub struct DidClientBuilder<T>
where
    T: JsonClient + Send + Sync,
{
    config: Config,
    client: T,
}

impl<T> DidClientBuilder<T>
where
    T: JsonClient + Send + Sync,
{
    /// Create a new builder with the given HTTP client and an empty configuration.
    pub fn new(client: T) -> Self {
        Self { config: Config::default(), client }
    }
    /// Set the configuration for the client.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }
    /// Set the base URL of the DID service.
    pub fn did_service_url(mut self, url: impl Into<String>) -> Self {
        self.config.did_service_url = url.into();
        self
    }
    /// Set the base URL of the resolver service.
    pub fn resolver_service_url(mut self, url: impl Into<String>) -> Self {
        self.config.resolver_service_url = url.into();
        self
    }
    /// Set the HTTP client.
    ///
    /// Returns a new builder with the HTTP client set.
    pub fn client<T0>(self, client: T0) -> DidClientBuilder<T0>
    where
        T0: JsonClient + Send + Sync,
    {
        DidClientBuilder { config: self.config, client }
    }
    pub fn build(self) -> DidClient<T> {
        DidClient::new(self.config, self.client)
    }
}

#[cfg_attr(docsrs, doc(cfg(feature = "default-client")))]
#[cfg(feature = "default-client")]
impl Default for DidClientBuilder<ReqwestClient> {
    /// Create a new builder with the default client.
    ///
    /// Default client is [`ReqwestClient`].
    fn default() -> Self {
        Self::new(ReqwestClient::new())
    }
}
