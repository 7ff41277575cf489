//! Helpers around credential payloads.
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Lower-case hex SHA-256 digest of a serialized credential.
pub fn hash_credential(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// [`hash_credential`] over the JSON serialization of `value`.
pub fn hash_json<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    Ok(hash_credential(&serde_json::to_vec(value)?))
}
