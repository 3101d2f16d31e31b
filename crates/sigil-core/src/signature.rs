//! Signature and verification result types.
//!
//! External JSON uses lowerCamelCase field names (`signedBy`, `signedAt`,
//! `contentLength`, `templateEngine`) while the Rust fields stay snake_case.
//! Optional fields are omitted from the JSON entirely, never written as
//! `null`, and a write-then-read round trip reproduces every field exactly.
//! Timestamps are carried as strings so re-serialization cannot drift.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::hash::DEFAULT_ALGORITHM;

/// A recorded integrity attestation for one file.
///
/// Immutable once written; a new sign operation replaces the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    /// Project-relative path of the signed file, forward slashes.
    pub file: String,
    /// Content hash in `<algorithm>:<hex>` form.
    pub hash: String,
    /// Hash algorithm name, currently always `sha256`.
    pub algorithm: String,
    /// Claimed identity of the signer.
    pub signed_by: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub signed_at: String,
    /// Byte length of the UTF-8 encoding of the signed content.
    pub content_length: usize,
    /// Template engine recorded at signing time, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_engine: Option<String>,
}

impl Signature {
    /// Create a signature with the default algorithm.
    #[must_use]
    pub fn new(
        file: impl Into<String>,
        hash: impl Into<String>,
        signed_by: impl Into<String>,
        signed_at: impl Into<String>,
        content_length: usize,
    ) -> Self {
        Self {
            file: file.into(),
            hash: hash.into(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            signed_by: signed_by.into(),
            signed_at: signed_at.into(),
            content_length,
            template_engine: None,
        }
    }

    /// Attach a template engine name.
    #[must_use]
    pub fn with_template_engine(mut self, engine: impl Into<String>) -> Self {
        self.template_engine = Some(engine.into());
        self
    }
}

/// An attestation for id-keyed content rather than a file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSignature {
    /// Opaque caller-supplied key.
    pub id: String,
    /// Content hash in `<algorithm>:<hex>` form.
    pub hash: String,
    /// Hash algorithm name, currently always `sha256`.
    pub algorithm: String,
    /// Claimed identity of the signer.
    pub signed_by: String,
    /// ISO-8601 UTC timestamp with millisecond precision.
    pub signed_at: String,
    /// Byte length of the UTF-8 encoding of the signed content.
    pub content_length: usize,
    /// Freeform provenance, string to string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl ContentSignature {
    /// Create a content signature with the default algorithm.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        hash: impl Into<String>,
        signed_by: impl Into<String>,
        signed_at: impl Into<String>,
        content_length: usize,
    ) -> Self {
        Self {
            id: id.into(),
            hash: hash.into(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            signed_by: signed_by.into(),
            signed_at: signed_at.into(),
            content_length,
            metadata: None,
        }
    }

    /// Attach provenance metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Outcome of verifying one file against its stored signature.
///
/// On success `template` carries the stored content. On failure `template`
/// is always absent: unverified content is never handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResult {
    /// Whether the current content matches the stored hash.
    pub verified: bool,
    /// Project-relative path that was checked.
    pub file: String,
    /// Stored content, present only when verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Hash involved in the comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Identity recorded at signing time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_by: Option<String>,
    /// Timestamp recorded at signing time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<String>,
    /// Human-readable failure reason, present only when unverified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Template placeholders found in the verified content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholders: Option<Vec<String>>,
}

impl VerifyResult {
    /// Successful verification of `file`.
    #[must_use]
    pub fn ok(file: impl Into<String>) -> Self {
        Self {
            verified: true,
            file: file.into(),
            template: None,
            hash: None,
            signed_by: None,
            signed_at: None,
            error: None,
            placeholders: None,
        }
    }

    /// Failed verification of `file` with a reason.
    #[must_use]
    pub fn failed(file: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            verified: false,
            file: file.into(),
            template: None,
            hash: None,
            signed_by: None,
            signed_at: None,
            error: Some(error.into()),
            placeholders: None,
        }
    }

    /// Attach the stored content.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Attach the hash involved in the comparison.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Attach the recorded signer identity.
    #[must_use]
    pub fn with_signed_by(mut self, signed_by: impl Into<String>) -> Self {
        self.signed_by = Some(signed_by.into());
        self
    }

    /// Attach the recorded signing timestamp.
    #[must_use]
    pub fn with_signed_at(mut self, signed_at: impl Into<String>) -> Self {
        self.signed_at = Some(signed_at.into());
        self
    }

    /// Attach extracted placeholders.
    #[must_use]
    pub fn with_placeholders(mut self, placeholders: Vec<String>) -> Self {
        self.placeholders = Some(placeholders);
        self
    }
}

/// Outcome of verifying id-keyed content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVerifyResult {
    /// Whether the content matches the stored hash.
    pub verified: bool,
    /// The content id that was checked.
    pub id: String,
    /// Stored content, present only when verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// The stored signature, present only when verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<ContentSignature>,
    /// Human-readable failure reason, present only when unverified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContentVerifyResult {
    /// Successful verification of `id` with the stored content and signature.
    #[must_use]
    pub fn ok(
        id: impl Into<String>,
        content: impl Into<String>,
        signature: ContentSignature,
    ) -> Self {
        Self {
            verified: true,
            id: id.into(),
            content: Some(content.into()),
            signature: Some(signature),
            error: None,
        }
    }

    /// Failed verification of `id` with a reason.
    #[must_use]
    pub fn failed(id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            verified: false,
            id: id.into(),
            content: None,
            signature: None,
            error: Some(error.into()),
        }
    }
}

/// Status of one signed or unsigned file, as reported by `check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Signature present and current content matches it.
    Signed,
    /// Signature present but content differs or the file is unreadable.
    Modified,
    /// No signature recorded.
    Unsigned,
    /// Signature metadata exists but cannot be parsed.
    Corrupted,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Signed => "signed",
            Self::Modified => "modified",
            Self::Unsigned => "unsigned",
            Self::Corrupted => "corrupted",
        };
        write!(f, "{s}")
    }
}

/// Per-file status row produced by `check` and `check_all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Project-relative path that was checked.
    pub file: String,
    /// Derived status.
    pub status: CheckStatus,
    /// The stored signature, when one could be loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
}

impl CheckResult {
    /// Create a status row.
    #[must_use]
    pub fn new(file: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            file: file.into(),
            status,
            signature: None,
        }
    }

    /// Attach the stored signature.
    #[must_use]
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_signature() -> Signature {
        Signature::new(
            "prompts/greet.md",
            "sha256:abc123",
            "alice",
            "2026-01-15T10:30:00.123Z",
            42,
        )
    }

    #[test]
    fn signature_serializes_camel_case() {
        let sig = sample_signature().with_template_engine("jinja");
        let json = serde_json::to_value(&sig).unwrap();
        assert_eq!(json["file"], "prompts/greet.md");
        assert_eq!(json["signedBy"], "alice");
        assert_eq!(json["signedAt"], "2026-01-15T10:30:00.123Z");
        assert_eq!(json["contentLength"], 42);
        assert_eq!(json["templateEngine"], "jinja");
    }

    #[test]
    fn absent_fields_are_omitted_not_null() {
        let json = serde_json::to_string(&sample_signature()).unwrap();
        assert!(!json.contains("templateEngine"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn signature_round_trips_exactly() {
        let sig = sample_signature().with_template_engine("mustache");
        let json = serde_json::to_string(&sig).unwrap();
        let back: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn signature_missing_required_field_fails_to_parse() {
        let json = r#"{"file":"a.md","hash":"sha256:ab","algorithm":"sha256"}"#;
        assert!(serde_json::from_str::<Signature>(json).is_err());
    }

    #[test]
    fn content_signature_round_trips_with_metadata() {
        let metadata = BTreeMap::from([("source".to_string(), "session-7".to_string())]);
        let sig = ContentSignature::new(
            "msg-1",
            "sha256:def456",
            "agent",
            "2026-01-15T10:30:00.123Z",
            7,
        )
        .with_metadata(metadata);
        let json = serde_json::to_string(&sig).unwrap();
        let back: ContentSignature = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sig);
    }

    #[test]
    fn content_verify_failure_omits_content_and_signature() {
        let result = ContentVerifyResult::failed("msg-1", "No signature found for id");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["verified"], false);
        assert_eq!(json["error"], "No signature found for id");
        assert!(json.get("content").is_none());
        assert!(json.get("signature").is_none());
    }

    #[test]
    fn verify_result_failure_never_carries_template() {
        let result = VerifyResult::failed("a.md", "Content has been modified since signing")
            .with_hash("sha256:ff")
            .with_signed_by("alice");
        assert!(!result.verified);
        assert!(result.template.is_none());
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("template").is_none());
        assert_eq!(json["signedBy"], "alice");
    }

    #[test]
    fn check_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(CheckStatus::Corrupted).unwrap(),
            "corrupted"
        );
        assert_eq!(CheckStatus::Modified.to_string(), "modified");
    }

    #[test]
    fn check_result_attaches_signature() {
        let row = CheckResult::new("a.md", CheckStatus::Signed).with_signature(sample_signature());
        assert_eq!(row.status, CheckStatus::Signed);
        assert_eq!(row.signature.unwrap().signed_by, "alice");
    }
}
