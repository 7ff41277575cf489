//! Configuration for the [`DidClient`](crate::DidClient).
mod env;

pub use self::env::EnvLoader;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// Configuration data struct for the [`DidClient`](crate::DidClient).
///
/// No validation is performed; an empty URL makes the calls to that service fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The base URL of the DID service, used to create DIDs and issue credentials.
    #[serde(default)]
    pub did_service_url: String,
    /// The base URL of the resolver service.
    #[serde(default)]
    pub resolver_service_url: String,
}

impl Config {
    pub fn new(
        did_service_url: impl Into<String>,
        resolver_service_url: impl Into<String>,
    ) -> Self {
        Self {
            did_service_url: did_service_url.into(),
            resolver_service_url: resolver_service_url.into(),
        }
    }
    /// Loads the configuration from the provided loader.
    pub async fn load(loader: &impl Loader) -> Result<Self> {
        loader.load().await.map_err(Error::ConfigLoad)
    }
}

/// The trait for loading configuration data.
pub trait Loader {
    /// Loads the configuration data.
    fn load(
        &self,
    ) -> impl Future<
        Output = core::result::Result<Config, Box<dyn std::error::Error + Send + Sync + 'static>>,
    > + Send;
}
