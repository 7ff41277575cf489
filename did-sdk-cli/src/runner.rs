use anyhow::{Context, Result};
use chrono::{SecondsFormat, Utc};
use did_sdk::config::{Config, EnvLoader};
use did_sdk::http::JsonClient;
use did_sdk::http_client::ReqwestClient;
use did_sdk::types::{
    Credential, CredentialSubject, DidDocument, DidResolutionResult, IssuedCredential,
};
use did_sdk::DidClient;

pub const ORGANIZATION_ID: &str = "ORGANIZATION_ID";
pub const ISSUE_CREDENTIAL: &str = "ISSUE_CREDENTIAL";

/// Driver settings besides the client configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub organization_id: String,
    pub issue_credential: bool,
}

impl Settings {
    /// Reads `ORGANIZATION_ID` and `ISSUE_CREDENTIAL`, including values from a `.env` file.
    pub fn from_env() -> Self {
        Self {
            organization_id: dotenvy::var(ORGANIZATION_ID).unwrap_or_default(),
            issue_credential: dotenvy::var(ISSUE_CREDENTIAL).is_ok_and(|v| is_truthy(&v)),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

/// What a [`Runner::run`] produced.
#[derive(Debug)]
pub struct Report {
    pub did_document: DidDocument,
    pub resolved: DidResolutionResult,
    pub credential: Credential,
    pub issued: Option<IssuedCredential>,
}

pub struct Runner<T>
where
    T: JsonClient + Send + Sync,
{
    client: DidClient<T>,
    settings: Settings,
}

impl Runner<ReqwestClient> {
    /// Builds a runner with the default HTTP client from the process environment.
    pub async fn from_env() -> Result<Self> {
        let config = Config::load(&EnvLoader::new()).await.context("loading configuration")?;
        Ok(Self::new(DidClient::builder().config(config).build(), Settings::from_env()))
    }
}

impl<T> Runner<T>
where
    T: JsonClient + Send + Sync,
{
    pub fn new(client: DidClient<T>, settings: Settings) -> Self {
        Self { client, settings }
    }
    pub async fn run(&self) -> Result<Report> {
        if self.settings.organization_id.is_empty() {
            tracing::warn!("{ORGANIZATION_ID} is not set, sending an empty organization id");
        }
        let did_document = self
            .client
            .create_did(&self.settings.organization_id)
            .await
            .context("creating DID")?;
        let did = did_document
            .id()
            .with_context(|| format!("DID service returned no id: {}", did_document.0))?
            .to_string();
        tracing::info!(%did, "DID created successfully");

        let resolved = self.client.resolve_did(&did).await.context("resolving DID")?;
        tracing::info!(resolved = %resolved.0, "Resolved DID");

        let credential = Credential::new(
            did,
            CredentialSubject::new("did:example:123", "John Doe"),
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        );
        let issued = if self.settings.issue_credential {
            let issued = self
                .client
                .issue_credential(&credential)
                .await
                .context("issuing credential")?;
            tracing::info!(issued = %issued.0, "Issued credential");
            Some(issued)
        } else {
            tracing::info!(
                credential = %serde_json::to_string(&credential)?,
                "Skipping credential issuance, set {ISSUE_CREDENTIAL} to issue it"
            );
            None
        };
        Ok(Report { did_document, resolved, credential, issued })
    }
}
