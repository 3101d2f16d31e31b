//! In-memory signing for id-keyed content.
//!
//! Free functions [`sign_content`] and [`verify_content`] carry the hashing
//! contract shared with [`PersistentContentStore`](crate::PersistentContentStore);
//! [`ContentStore`] wraps them in a session-scoped map for callers that sign
//! transient content such as inbound messages.

use std::collections::BTreeMap;

use sigil_core::time::now_timestamp;
use sigil_core::{ContentSignature, ContentVerifyResult, format_hash, sha256_hex};

/// Reason reported when content does not hash to its signature.
pub(crate) const HASH_MISMATCH: &str = "Content hash mismatch";

/// Sign `content` under an opaque id without storing anything.
#[must_use]
pub fn sign_content(
    content: &str,
    id: impl Into<String>,
    identity: impl Into<String>,
    metadata: Option<BTreeMap<String, String>>,
) -> ContentSignature {
    let hash = format_hash(&sha256_hex(content));
    let mut signature = ContentSignature::new(id, hash, identity, now_timestamp(), content.len());
    if let Some(metadata) = metadata {
        signature = signature.with_metadata(metadata);
    }
    signature
}

/// Whether `content` hashes to the value recorded in `signature`.
#[must_use]
pub fn verify_content(content: &str, signature: &ContentSignature) -> bool {
    format_hash(&sha256_hex(content)) == signature.hash
}

/// Session-scoped store pairing each signature with the content it signs.
///
/// Everything lives in memory; dropping the store drops the attestations.
/// Use [`PersistentContentStore`](crate::PersistentContentStore) when
/// signatures must survive the process.
#[derive(Debug, Default)]
pub struct ContentStore {
    entries: BTreeMap<String, (ContentSignature, String)>,
}

impl ContentStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign `content` and remember both the signature and the content.
    ///
    /// Re-signing an existing id replaces the previous entry.
    pub fn sign(
        &mut self,
        content: &str,
        id: impl Into<String>,
        identity: impl Into<String>,
        metadata: Option<BTreeMap<String, String>>,
    ) -> ContentSignature {
        let signature = sign_content(content, id, identity, metadata);
        self.entries
            .insert(signature.id.clone(), (signature.clone(), content.to_string()));
        signature
    }

    /// Verify the stored content for `id` against its stored signature.
    #[must_use]
    pub fn verify(&self, id: &str) -> ContentVerifyResult {
        match self.entries.get(id) {
            None => ContentVerifyResult::failed(id, "No signature found for id"),
            Some((signature, content)) => {
                if verify_content(content, signature) {
                    ContentVerifyResult::ok(id, content.as_str(), signature.clone())
                } else {
                    ContentVerifyResult::failed(id, HASH_MISMATCH)
                }
            },
        }
    }

    /// The stored signature for `id`, if any.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ContentSignature> {
        self.entries.get(id).map(|(signature, _)| signature)
    }

    /// All stored signatures, ordered by id.
    #[must_use]
    pub fn list(&self) -> Vec<&ContentSignature> {
        self.entries.values().map(|(signature, _)| signature).collect()
    }

    /// Whether a signature exists for `id`.
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Remove the entry for `id`, reporting whether it existed.
    pub fn delete(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored signatures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no signatures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
