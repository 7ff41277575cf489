use super::{Config, Loader};
use std::env::{self, VarError};

pub const DID_SERVICE_URL: &str = "DID_SERVICE_URL";
pub const RESOLVER_SERVICE_URL: &str = "RESOLVER_SERVICE_URL";

/// An implementation of [`Loader`] that reads the service URLs from environment variables.
///
/// A variable that is not set yields an empty URL.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    did_service_url: String,
    resolver_service_url: String,
}

impl EnvLoader {
    /// Reads `DID_SERVICE_URL` and `RESOLVER_SERVICE_URL`.
    pub fn new() -> Self {
        Self::with_names(DID_SERVICE_URL, RESOLVER_SERVICE_URL)
    }
    /// Reads the given variable names instead of the default ones.
    pub fn with_names(
        did_service_url: impl Into<String>,
        resolver_service_url: impl Into<String>,
    ) -> Self {
        Self {
            did_service_url: did_service_url.into(),
            resolver_service_url: resolver_service_url.into(),
        }
    }
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn var(key: &str) -> core::result::Result<String, VarError> {
    match env::var(key) {
        Err(VarError::NotPresent) => Ok(String::new()),
        result => result,
    }
}

impl Loader for EnvLoader {
    async fn load(
        &self,
    ) -> core::result::Result<Config, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let config = Config {
            did_service_url: var(&self.did_service_url)?,
            resolver_service_url: var(&self.resolver_service_url)?,
        };
        tracing::debug!(?config, "loaded config from environment");
        Ok(config)
    }
}
