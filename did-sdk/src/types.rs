//! Request and response payloads of the DID and resolver services.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::ops::Deref;

/// The DID type requested from the DID service.
pub const DID_TYPE_ORGANIZATION: &str = "organization";

/// The default type of a [`Credential`].
pub const VERIFIABLE_CREDENTIAL: &str = "VerifiableCredential";

/// Request body of `POST /dids`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateDidRequest {
    pub r#type: String,
    pub organization_id: String,
}

impl CreateDidRequest {
    pub fn organization(organization_id: impl Into<String>) -> Self {
        Self { r#type: DID_TYPE_ORGANIZATION.into(), organization_id: organization_id.into() }
    }
}

/// A DID document returned by the DID service.
///
/// The body is kept exactly as returned. `id` is expected but not required.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct DidDocument(pub Value);

impl DidDocument {
    /// The `id` of the document, if the service returned one.
    pub fn id(&self) -> Option<&str> {
        self.str_field("id")
    }
    /// The JSON-LD `@context` of the document.
    pub fn context(&self) -> Option<&Value> {
        self.0.get("@context")
    }
    pub fn public_key(&self) -> Option<&str> {
        self.str_field("publicKey")
    }
    pub fn created_at(&self) -> Option<&str> {
        self.str_field("createdAt")
    }
    pub fn organization_id(&self) -> Option<&str> {
        self.str_field("organization_id")
    }
    pub fn into_inner(self) -> Value {
        self.0
    }
    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl Deref for DidDocument {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The result of `GET /dids/resolver`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct DidResolutionResult(pub Value);

impl DidResolutionResult {
    /// The resolved document, either nested under `didDocument` or the result itself.
    pub fn did_document(&self) -> Option<&Value> {
        match self.0.get("didDocument") {
            Some(doc) => Some(doc),
            None if self.0.get("id").is_some() => Some(&self.0),
            None => None,
        }
    }
    /// The `id` of the resolved document.
    pub fn did_document_id(&self) -> Option<&str> {
        self.did_document()?.get("id")?.as_str()
    }
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Deref for DidResolutionResult {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The result of `POST /v1/credential`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct IssuedCredential(pub Value);

impl IssuedCredential {
    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl Deref for IssuedCredential {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single value or a list of values.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> From<T> for OneOrMany<T> {
    fn from(value: T) -> Self {
        Self::One(value)
    }
}

/// A credential to be issued.
///
/// Sent as-is; no schema is enforced on the client side.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    #[serde(rename = "@context", default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
    pub r#type: OneOrMany<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub issuer: String,
    pub credential_subject: CredentialSubject,
    pub issuance_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Credential {
    /// A `VerifiableCredential` issued by `issuer` about `subject`.
    pub fn new(
        issuer: impl Into<String>,
        subject: CredentialSubject,
        issuance_date: impl Into<String>,
    ) -> Self {
        Self {
            context: Vec::new(),
            r#type: VERIFIABLE_CREDENTIAL.to_string().into(),
            id: None,
            issuer: issuer.into(),
            credential_subject: subject,
            issuance_date: issuance_date.into(),
            expiration_date: None,
            extra: Map::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CredentialSubject {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CredentialSubject {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), extra: Map::new() }
    }
}
