//! Session token helpers.
//!
//! Session tokens are opaque random strings handed to the browser in a
//! cookie; only their SHA-256 hash is stored server-side so a database leak
//! does not compromise active sessions.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Generate a random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash should be persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
