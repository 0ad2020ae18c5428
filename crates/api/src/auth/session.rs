//! Opaque admin session tokens.
//!
//! Session tokens are random 128-bit identifiers; only their SHA-256 hash
//! is stored server-side so a database leak does not compromise active
//! sessions. The plaintext travels in an HttpOnly cookie.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the cookie carrying the admin session token.
pub const SESSION_COOKIE: &str = "folio_session";

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext
/// is set in the client cookie; only the hash should be persisted.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming cookie value against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_for_same_token() {
        let (plaintext, hash) = generate_session_token();

        let rehashed = hash_session_token(&plaintext);
        assert_eq!(hash, rehashed, "hash of the same token must be stable");

        // Sanity: the hash should be a 64-char hex string (SHA-256).
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn different_tokens_hash_differently() {
        assert_ne!(hash_session_token("alpha"), hash_session_token("bravo"));
    }
}
