#![doc = "HttpClient implementation for [reqwest]"]
use did_sdk_http::http::{Request, Response};
use did_sdk_http::{BoxError, HttpClient, JsonClient};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    client: Arc<Client>,
}

impl ReqwestClient {
    pub fn new() -> ReqwestClient {
        ReqwestClientBuilder::new().build()
    }
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct ReqwestClientBuilder {
    client: Option<Client>,
}

impl ReqwestClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }
    pub fn build(self) -> ReqwestClient {
        ReqwestClient { client: Arc::new(self.client.unwrap_or_default()) }
    }
}

impl HttpClient for ReqwestClient {
    async fn send_http(
        &self,
        request: Request<Vec<u8>>,
    ) -> core::result::Result<Response<Vec<u8>>, BoxError> {
        let response = self.client.execute(request.try_into()?).await?;
        let mut builder = Response::builder().status(response.status());
        for (k, v) in response.headers() {
            builder = builder.header(k, v);
        }
        builder.body(response.bytes().await?.to_vec()).map_err(Into::into)
    }
}

impl JsonClient for ReqwestClient {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn builder_without_client() {
        let client = ReqwestClientBuilder::new().build();
        assert!(format!("{client:?}").starts_with("ReqwestClient"));
    }

    #[test]
    fn builder_with_client() -> Result<(), Box<dyn std::error::Error>> {
        let client = ReqwestClientBuilder::new()
            .client(
                Client::builder()
                    .user_agent("USER_AGENT")
                    .timeout(Duration::from_millis(500))
                    .build()?,
            )
            .build();
        let cloned = client.clone();
        assert!(Arc::ptr_eq(&client.client, &cloned.client));
        Ok(())
    }
}
