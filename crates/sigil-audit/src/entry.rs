//! Audit entry types.

use serde::{Deserialize, Serialize};
use sigil_core::time::now_timestamp;
use std::fmt;

/// The kind of event an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditEvent {
    /// A signature was created or replaced.
    Sign,
    /// Content verified successfully against its signature.
    Verify,
    /// Verification failed: missing or corrupt signature, unreadable file,
    /// or a hash mismatch.
    VerifyFail,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sign => "sign",
            Self::Verify => "verify",
            Self::VerifyFail => "verify-fail",
        };
        write!(f, "{s}")
    }
}

/// One line of the audit journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event was recorded, ISO-8601 with millisecond precision.
    pub ts: String,
    /// What happened.
    pub event: AuditEvent,
    /// Project-relative file path, or `content:<id>` for id-keyed content.
    pub file: String,
    /// Content hash involved, when one was computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    /// Signer identity, recorded on sign events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    /// Human-readable context, e.g. the failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl AuditEntry {
    /// Create an entry timestamped now.
    #[must_use]
    pub fn new(event: AuditEvent, file: impl Into<String>) -> Self {
        Self {
            ts: now_timestamp(),
            event,
            file: file.into(),
            hash: None,
            identity: None,
            detail: None,
        }
    }

    /// Attach the content hash.
    #[must_use]
    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    /// Attach the signer identity.
    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Attach a detail string.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Attach a detail string if one is given.
    #[must_use]
    pub fn with_detail_opt(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}
