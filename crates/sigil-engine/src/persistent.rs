//! Durable id-keyed content signing backed by the state directory.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use sigil_audit::{AuditEntry, AuditEvent, AuditLog};
use sigil_config::{CONFIG_FILE, ProjectConfig};
use sigil_core::{
    ContentSignature, ContentVerifyResult, format_hash, sha256_hex, validate_content_id,
};
use sigil_store::ContentSignatureStore;
use sigil_vfs::Vfs;
use tracing::debug;

use crate::content::{HASH_MISMATCH, sign_content, verify_content};
use crate::error::EngineResult;
use crate::identity::{EnvIdentity, env_identity, resolve_identity};

/// Options for signing id-keyed content.
#[derive(Debug, Clone, Default)]
pub struct ContentSignOptions {
    /// Signer identity override.
    pub identity: Option<String>,
    /// Provenance metadata stored on the signature.
    pub metadata: Option<BTreeMap<String, String>>,
}

impl ContentSignOptions {
    /// Override the signer identity.
    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Attach provenance metadata.
    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, String>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Content signatures that survive the process, stored under `content/` in
/// the state directory and audited like file signatures.
///
/// Audit entries use `content:<id>` as their file key, so one log serves
/// both files and content.
pub struct PersistentContentStore {
    state_dir: PathBuf,
    store: ContentSignatureStore,
    audit: AuditLog,
    vfs: Arc<dyn Vfs>,
    env_identity: EnvIdentity,
}

impl fmt::Debug for PersistentContentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistentContentStore")
            .field("state_dir", &self.state_dir)
            .finish_non_exhaustive()
    }
}

impl PersistentContentStore {
    /// Open a store over `state_dir`, backed by `vfs`.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>, vfs: Arc<dyn Vfs>) -> Self {
        let state_dir = state_dir.into();
        Self {
            store: ContentSignatureStore::new(state_dir.clone(), Arc::clone(&vfs)),
            audit: AuditLog::new(state_dir.clone(), Arc::clone(&vfs)),
            state_dir,
            vfs,
            env_identity: Arc::new(env_identity),
        }
    }

    /// Replace the ambient identity lookup.
    #[must_use]
    pub fn with_env_identity(
        mut self,
        lookup: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.env_identity = Arc::new(lookup);
        self
    }

    pub(crate) fn with_ambient(mut self, ambient: EnvIdentity) -> Self {
        self.env_identity = ambient;
        self
    }

    /// Sign `content` under `id`, persisting the signature and the content.
    ///
    /// The identity is the explicit option, then the configured identity,
    /// then the ambient process user, then `"unknown"`.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not a valid content id or state cannot be written.
    pub fn sign(
        &self,
        content: &str,
        id: &str,
        options: &ContentSignOptions,
    ) -> EngineResult<ContentSignature> {
        validate_content_id(id)?;

        let configured = self.config_identity();
        let identity = resolve_identity(
            options.identity.as_deref(),
            configured.as_deref(),
            &self.env_identity,
        );
        let signature = sign_content(content, id, identity, options.metadata.clone());

        self.store.store(&signature, content)?;
        self.audit.append(
            &AuditEntry::new(AuditEvent::Sign, audit_file(id))
                .with_hash(signature.hash.as_str())
                .with_identity(signature.signed_by.as_str()),
        )?;

        debug!(id, hash = %signature.hash, "signed content");
        Ok(signature)
    }

    /// Sign `content` under `id` unless the stored signature already matches
    /// it, in which case the existing signature is returned untouched. A
    /// missing content blob is rewritten either way.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not a valid content id or state cannot be written.
    pub fn sign_if_changed(
        &self,
        content: &str,
        id: &str,
        options: &ContentSignOptions,
    ) -> EngineResult<ContentSignature> {
        validate_content_id(id)?;

        if let Some(existing) = self.store.load(id) {
            if existing.hash == format_hash(&sha256_hex(content)) {
                if self.store.load_content(id).is_none() {
                    self.store.write_content(id, content)?;
                }
                debug!(id, "content unchanged, reusing signature");
                return Ok(existing);
            }
        }
        self.sign(content, id, options)
    }

    /// Verify the stored content for `id`, and optionally caller-provided
    /// `content` against the same signature.
    ///
    /// `detail` tags the audit entry with why the verification ran; it never
    /// appears in the returned result.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not a valid content id or the audit log cannot be
    /// written.
    pub fn verify(
        &self,
        id: &str,
        content: Option<&str>,
        detail: Option<&str>,
    ) -> EngineResult<ContentVerifyResult> {
        validate_content_id(id)?;

        let Some(signature) = self.store.load(id) else {
            return self.verify_failed(id, "No signature found for id", detail);
        };
        let Some(stored) = self.store.load_content(id) else {
            return self.verify_failed(id, "No content found for id", detail);
        };
        if !verify_content(&stored, &signature) {
            return self.verify_failed(id, HASH_MISMATCH, detail);
        }
        if let Some(given) = content {
            if !verify_content(given, &signature) {
                return self.verify_failed(id, HASH_MISMATCH, detail);
            }
        }

        self.audit.append(
            &AuditEntry::new(AuditEvent::Verify, audit_file(id))
                .with_hash(signature.hash.as_str())
                .with_detail_opt(detail.map(str::to_string)),
        )?;
        Ok(ContentVerifyResult::ok(id, stored, signature))
    }

    /// The stored signature for `id`, if present and well formed.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not a valid content id.
    pub fn load(&self, id: &str) -> EngineResult<Option<ContentSignature>> {
        validate_content_id(id)?;
        Ok(self.store.load(id))
    }

    /// The stored content for `id`, if present.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not a valid content id.
    pub fn load_content(&self, id: &str) -> EngineResult<Option<String>> {
        validate_content_id(id)?;
        Ok(self.store.load_content(id))
    }

    /// Whether a signature is stored for `id`.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not a valid content id.
    pub fn has(&self, id: &str) -> EngineResult<bool> {
        validate_content_id(id)?;
        Ok(self.store.has(id))
    }

    /// Remove the signature and content for `id`, reporting whether a
    /// signature existed.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not a valid content id.
    pub fn delete(&self, id: &str) -> EngineResult<bool> {
        validate_content_id(id)?;
        Ok(self.store.delete(id))
    }

    /// All stored content signatures, ordered by id.
    #[must_use]
    pub fn list(&self) -> Vec<ContentSignature> {
        self.store.list()
    }

    fn verify_failed(
        &self,
        id: &str,
        reason: &str,
        detail: Option<&str>,
    ) -> EngineResult<ContentVerifyResult> {
        let recorded = match detail {
            Some(detail) => format!("{detail}: {reason}"),
            None => reason.to_string(),
        };
        self.audit.append(
            &AuditEntry::new(AuditEvent::VerifyFail, audit_file(id)).with_detail(recorded),
        )?;
        Ok(ContentVerifyResult::failed(id, reason))
    }

    fn config_identity(&self) -> Option<String> {
        let raw = self.vfs.read(&self.state_dir.join(CONFIG_FILE)).ok()?;
        ProjectConfig::parse_or_default(&raw)
            .identity()
            .map(str::to_string)
    }
}

fn audit_file(id: &str) -> String {
    format!("content:{id}")
}
