//! Content hashing and the hash string codec.
//!
//! Hash strings have the form `<algorithm>:<hex>`. SHA-256 is the only
//! algorithm currently produced; the codec still round-trips foreign
//! algorithm prefixes so stored metadata from future versions parses.

use sha2::{Digest, Sha256};

/// Algorithm every new signature is created with.
pub const DEFAULT_ALGORITHM: &str = "sha256";

/// Hash content with SHA-256 over its UTF-8 bytes.
///
/// Returns the lowercase hex digest, always 64 characters. Deterministic:
/// equal content yields equal digests across calls and processes.
#[must_use]
pub fn sha256_hex(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}

/// Format a hex digest as a prefixed hash string, e.g. `sha256:ab12...`.
#[must_use]
pub fn format_hash(hex_digest: &str) -> String {
    format!("{DEFAULT_ALGORITHM}:{hex_digest}")
}

/// Split a hash string into `(algorithm, hex)`.
///
/// Splits on the first `:`. A string without a separator is treated as a
/// bare hex digest with the default algorithm.
#[must_use]
pub fn parse_hash(hash: &str) -> (&str, &str) {
    match hash.split_once(':') {
        Some((algorithm, hex_digest)) => (algorithm, hex_digest),
        None => (DEFAULT_ALGORITHM, hash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vector() {
        assert_eq!(
            sha256_hex("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn digest_is_deterministic() {
        let content = "The quick brown fox";
        assert_eq!(sha256_hex(content), sha256_hex(content));
    }

    #[test]
    fn digest_differs_for_different_content() {
        assert_ne!(sha256_hex("a"), sha256_hex("b"));
    }

    #[test]
    fn digest_is_64_hex_chars() {
        let digest = sha256_hex("");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn digest_hashes_utf8_bytes() {
        // Multi-byte characters hash by their UTF-8 encoding, not by char.
        assert_ne!(sha256_hex("é"), sha256_hex("e"));
    }

    #[test]
    fn format_prefixes_algorithm() {
        assert_eq!(format_hash("abc123"), "sha256:abc123");
    }

    #[test]
    fn parse_splits_on_first_colon() {
        assert_eq!(parse_hash("sha256:abc123"), ("sha256", "abc123"));
        assert_eq!(parse_hash("blake3:de:ad"), ("blake3", "de:ad"));
    }

    #[test]
    fn parse_defaults_algorithm_without_separator() {
        assert_eq!(parse_hash("abc123"), ("sha256", "abc123"));
    }

    #[test]
    fn format_parse_round_trip() {
        let digest = sha256_hex("round trip");
        let formatted = format_hash(&digest);
        let (algorithm, hex_digest) = parse_hash(&formatted);
        assert_eq!(algorithm, "sha256");
        assert_eq!(hex_digest, digest);
    }
}
