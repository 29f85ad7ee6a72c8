//! Password hashing and verification.
//!
//! Digests are unsalted SHA-256 hex, kept digest-compatible with existing
//! credential stores. Length bounds on the plaintext are enforced upstream.

use core::fmt::Write;

use sha2::{Digest, Sha256};

/// Hash a plaintext password into its stored digest form.
pub fn hash_password(plain: &str) -> String {
    let digest = Sha256::digest(plain.as_bytes());
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        // Writing to a String cannot fail.
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Verify a plaintext password against a stored digest.
pub fn verify_password(plain: &str, digest: &str) -> bool {
    hash_password(plain) == digest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashing_is_deterministic() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
    }

    #[test]
    fn digest_is_not_the_plaintext() {
        let digest = hash_password("hunter2");
        assert_ne!(digest, "hunter2");
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn verify_accepts_matching_password() {
        let digest = hash_password("correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &digest));
    }

    #[test]
    fn verify_rejects_different_password() {
        let digest = hash_password("correct horse battery staple");
        assert!(!verify_password("wrong horse", &digest));
        assert!(!verify_password("", &digest));
    }

    #[test]
    fn known_sha256_vector() {
        // sha256("abc")
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
