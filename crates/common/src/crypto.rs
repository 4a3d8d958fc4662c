//! Cryptographic utilities shared across Achados crates
//!
//! Provides secret hashing and verification using SHA-256 with random salts
//! and constant-time comparison to prevent timing attacks. Used for both the
//! per-record palavra-passe and admin passwords; neither is ever stored or
//! compared in plain text.

use rand::Rng;
use sha2::{Digest, Sha256};

/// Hash a secret with a fresh random salt.
///
/// The stored hash format is `hex(salt):hex(sha256(secret || salt))`.
pub fn hash_secret(secret: &str) -> String {
    let salt: [u8; 32] = rand::thread_rng().gen();
    hash_secret_with_salt(secret, &salt)
}

fn hash_secret_with_salt(secret: &str, salt: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(salt);
    let hash = hasher.finalize();

    format!("{}:{}", hex::encode(salt), hex::encode(hash))
}

/// Verify a secret against a stored hash using constant-time comparison.
pub fn verify_secret_hash(candidate: &str, stored_hash: &str) -> bool {
    // Parse stored hash: salt:hash
    let parts: Vec<&str> = stored_hash.split(':').collect();
    if parts.len() != 2 {
        return false;
    }

    let salt = match hex::decode(parts[0]) {
        Ok(salt) => salt,
        Err(_) => return false,
    };

    let hash = match hex::decode(parts[1]) {
        Ok(hash) => hash,
        Err(_) => return false,
    };

    // Compute hash of candidate secret with stored salt
    let mut hasher = Sha256::new();
    hasher.update(candidate.as_bytes());
    hasher.update(&salt);
    let candidate_hash = hasher.finalize();

    // Constant-time comparison to prevent timing attacks
    if hash.len() != candidate_hash.len() {
        return false;
    }

    let mut result = 0u8;
    for (a, b) in hash.iter().zip(candidate_hash.iter()) {
        result |= a ^ b;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_roundtrip() {
        let stored = hash_secret("1234");
        assert!(verify_secret_hash("1234", &stored));
        assert!(!verify_secret_hash("0000", &stored));
    }

    #[test]
    fn test_hashes_are_salted() {
        // Same secret, different salts, different stored values
        let a = hash_secret("segredo");
        let b = hash_secret("segredo");
        assert_ne!(a, b);
        assert!(verify_secret_hash("segredo", &a));
        assert!(verify_secret_hash("segredo", &b));
    }

    #[test]
    fn test_verify_known_salt() {
        let stored = hash_secret_with_salt("test_key", b"test_salt_value_");
        assert!(verify_secret_hash("test_key", &stored));
        assert!(!verify_secret_hash("wrong_key", &stored));
    }

    #[test]
    fn test_verify_malformed_no_colon() {
        assert!(!verify_secret_hash("key", "nocolonshere"));
    }

    #[test]
    fn test_verify_malformed_invalid_hex_salt() {
        assert!(!verify_secret_hash("key", "zzzz:abcd"));
    }

    #[test]
    fn test_verify_malformed_invalid_hex_hash() {
        assert!(!verify_secret_hash("key", "abcd:zzzz"));
    }

    #[test]
    fn test_verify_empty_secret() {
        let stored = hash_secret_with_salt("", b"salt");
        assert!(verify_secret_hash("", &stored));
        assert!(!verify_secret_hash("notempty", &stored));
    }
}
