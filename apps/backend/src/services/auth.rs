//! Bearer token issuance and hashing.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a new random bearer token.
pub fn generate_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Hash a bearer token for storage and lookup.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
