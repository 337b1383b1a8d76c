//! Text digests and output hashing.
//!
//! Two hash functions are in play and must not be swapped:
//! - SHA-256 of the scanned text drives parameter derivation. The digest
//!   bytes are indexed directly, so changing the algorithm changes every
//!   derived tuple and breaks reproducibility against other implementations.
//! - BLAKE3 fingerprints generated output bytes for reports and caches.

use sha2::{Digest, Sha256};

/// Length of the text digest in bytes.
pub const TEXT_DIGEST_LEN: usize = 32;

/// Computes the SHA-256 digest of a text's UTF-8 encoding.
///
/// # Example
/// ```
/// use barsong_spec::hash::text_digest;
///
/// let digest = text_digest("ABC");
/// assert_eq!(digest[0], 0xb5);
/// ```
pub fn text_digest(text: &str) -> [u8; TEXT_DIGEST_LEN] {
    let mut digest = [0u8; TEXT_DIGEST_LEN];
    digest.copy_from_slice(&Sha256::digest(text.as_bytes()));
    digest
}

/// Computes the SHA-256 digest of a text as a lowercase hex string.
pub fn text_digest_hex(text: &str) -> String {
    to_hex(&text_digest(text))
}

/// Computes a BLAKE3 hash of arbitrary data.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
pub fn blake3_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_digest_known_value() {
        // echo -n "ABC" | sha256sum
        assert_eq!(
            text_digest_hex("ABC"),
            "b5d4045c3f466fa91fe2cc6abe79232a1a57cdf104f7a26e716e0a1e2789df78"
        );
    }

    #[test]
    fn test_text_digest_empty() {
        // Digest of empty input is well defined.
        assert_eq!(
            text_digest_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_text_digest_stability() {
        let a = text_digest("XXXXJ102800309");
        let b = text_digest("XXXXJ102800309");
        assert_eq!(a, b, "digest should be stable across calls");
        assert_ne!(a, text_digest("XXXXJ102800308"));
    }

    #[test]
    fn test_blake3_hash() {
        let hash = blake3_hash(b"hello world");
        assert_eq!(
            hash,
            "d74981efa70a0c880b8d8c1985d075dbcbf679b99a5f9914e5aaf96b831a9e24"
        );
    }
}
