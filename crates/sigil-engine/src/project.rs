//! Project-scoped signing operations.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use sigil_audit::{AuditEntry, AuditEvent, AuditLog};
use sigil_config::{CONFIG_FILE, ProjectConfig};
use sigil_core::time::now_timestamp;
use sigil_core::{CheckResult, CheckStatus, Signature, VerifyResult, format_hash, sha256_hex};
use sigil_store::{SignatureRecord, SignatureStore, layout};
use sigil_templates::{CustomPattern, extract_placeholders};
use sigil_vfs::{ContainedPath, HostVfs, Vfs, VfsError, resolve_contained};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::identity::{EnvIdentity, env_identity, resolve_identity};
use crate::persistent::PersistentContentStore;

/// Options for signing a file.
#[derive(Debug, Clone, Default)]
pub struct SignOptions {
    /// Signer identity override.
    pub identity: Option<String>,
    /// Template engine recorded on the signature instead of the configured one.
    pub engine: Option<String>,
}

impl SignOptions {
    /// Override the signer identity.
    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Record `engine` as the template engine.
    #[must_use]
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }
}

/// A project rooted at a directory whose `.sigil/` state directory holds
/// signatures, configuration and the audit log.
///
/// Every file path handed to an operation is resolved against the root and
/// rejected before any I/O if it escapes. All filesystem access goes through
/// the project's [`Vfs`], so tests can run against [`MemoryVfs`]
/// (`sigil_vfs::MemoryVfs`) instead of the host disk.
pub struct Project {
    root: PathBuf,
    state_dir: PathBuf,
    vfs: Arc<dyn Vfs>,
    env_identity: EnvIdentity,
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("root", &self.root)
            .field("state_dir", &self.state_dir)
            .finish_non_exhaustive()
    }
}

impl Project {
    /// Open the project rooted at `root`, backed by the host filesystem.
    #[must_use]
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let state_dir = layout::state_dir(&root);
        Self {
            root,
            state_dir,
            vfs: Arc::new(HostVfs::new()),
            env_identity: Arc::new(env_identity),
        }
    }

    /// Replace the filesystem backend.
    #[must_use]
    pub fn with_vfs(mut self, vfs: Arc<dyn Vfs>) -> Self {
        self.vfs = vfs;
        self
    }

    /// Replace the ambient identity lookup, used when neither an explicit
    /// identity nor a configured one is available.
    #[must_use]
    pub fn with_env_identity(
        mut self,
        lookup: impl Fn() -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.env_identity = Arc::new(lookup);
        self
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// State directory holding signatures, config and the audit log.
    #[must_use]
    pub fn state_dir(&self) -> &Path {
        &self.state_dir
    }

    /// Load the project configuration through the project's filesystem.
    /// Missing or malformed configuration falls back to defaults.
    #[must_use]
    pub fn config(&self) -> ProjectConfig {
        match self.vfs.read(&self.state_dir.join(CONFIG_FILE)) {
            Ok(raw) => ProjectConfig::parse_or_default(&raw),
            Err(_) => ProjectConfig::default(),
        }
    }

    /// Persistent content store sharing this project's state directory.
    #[must_use]
    pub fn content_store(&self) -> PersistentContentStore {
        PersistentContentStore::new(self.state_dir.clone(), Arc::clone(&self.vfs))
            .with_ambient(Arc::clone(&self.env_identity))
    }

    fn store(&self) -> SignatureStore {
        SignatureStore::new(self.state_dir.clone(), Arc::clone(&self.vfs))
    }

    fn audit(&self) -> AuditLog {
        AuditLog::new(self.state_dir.clone(), Arc::clone(&self.vfs))
    }

    fn resolve(&self, request: &Path) -> EngineResult<ContainedPath> {
        resolve_contained(&self.root, request).map_err(|err| match err {
            VfsError::Escape(path) => EngineError::PathEscape { path },
            // resolve_contained does no I/O; Escape is its only failure.
            other => EngineError::Read {
                file: request.display().to_string(),
                source: other,
            },
        })
    }

    /// Sign `file`, recording its hash, the signer identity and a snapshot
    /// of the content at signing time.
    ///
    /// The identity is the explicit option, then the configured identity,
    /// then the ambient process user, then `"unknown"`. The template engine
    /// is the explicit option, then the first configured engine.
    ///
    /// # Errors
    ///
    /// Fails when the path escapes the project root, the file cannot be
    /// read, or signature state cannot be written.
    pub fn sign(&self, file: impl AsRef<Path>, options: &SignOptions) -> EngineResult<Signature> {
        let contained = self.resolve(file.as_ref())?;
        let rel = contained.relative();

        let content = self
            .vfs
            .read(contained.absolute())
            .map_err(|source| EngineError::Read {
                file: rel.to_string(),
                source,
            })?;

        let config = self.config();
        let identity = resolve_identity(
            options.identity.as_deref(),
            config.identity(),
            &self.env_identity,
        );

        let hash = format_hash(&sha256_hex(&content));
        let mut signature = Signature::new(rel, hash, identity, now_timestamp(), content.len());
        let engine = options
            .engine
            .clone()
            .or_else(|| config.first_engine().map(str::to_string));
        if let Some(engine) = engine {
            signature = signature.with_template_engine(engine);
        }

        self.store().store(&signature, &content)?;
        self.audit().append(
            &AuditEntry::new(AuditEvent::Sign, rel)
                .with_hash(signature.hash.as_str())
                .with_identity(signature.signed_by.as_str()),
        )?;

        debug!(file = rel, hash = %signature.hash, "signed file");
        Ok(signature)
    }

    /// Verify `file` against its stored signature.
    ///
    /// Verification outcomes (missing signature, corrupted signature,
    /// missing file, modified content) come back inside the
    /// [`VerifyResult`]; every call appends exactly one audit entry. On
    /// success the result carries the stored template and any placeholders
    /// found by the configured engines.
    ///
    /// # Errors
    ///
    /// Fails when the path escapes the project root or the audit log cannot
    /// be written.
    pub fn verify(&self, file: impl AsRef<Path>) -> EngineResult<VerifyResult> {
        let contained = self.resolve(file.as_ref())?;
        let rel = contained.relative();
        let store = self.store();
        let audit = self.audit();

        let signature = match store.load(rel) {
            SignatureRecord::Found(signature) => signature,
            SignatureRecord::Missing => {
                return verify_failed(&audit, rel, "No signature found");
            },
            SignatureRecord::Corrupted => {
                return verify_failed(&audit, rel, "Signature file is corrupted or tampered with");
            },
        };

        let Ok(content) = self.vfs.read(contained.absolute()) else {
            return verify_failed(&audit, rel, "File not found");
        };

        let current_hash = format_hash(&sha256_hex(&content));
        if current_hash != signature.hash {
            audit.append(
                &AuditEntry::new(AuditEvent::VerifyFail, rel)
                    .with_hash(current_hash.as_str())
                    .with_detail(format!("Expected {}, got {current_hash}", signature.hash)),
            )?;
            return Ok(
                VerifyResult::failed(rel, "Content has been modified since signing")
                    .with_hash(current_hash)
                    .with_signed_by(signature.signed_by)
                    .with_signed_at(signature.signed_at),
            );
        }

        audit.append(&AuditEntry::new(AuditEvent::Verify, rel).with_hash(current_hash.as_str()))?;

        // The snapshot taken at signing time is the trusted template; the
        // live file is only a fallback for stores written before snapshots.
        let template = store.load_content(rel).unwrap_or_else(|| content.clone());

        let config = self.config();
        let engines = {
            let configured = config.engine_list();
            if configured.is_empty() {
                signature.template_engine.iter().cloned().collect()
            } else {
                configured
            }
        };
        let placeholders = if engines.is_empty() {
            Vec::new()
        } else {
            let custom = custom_patterns(&config);
            extract_placeholders(
                &template,
                &engines,
                if custom.is_empty() { None } else { Some(&custom) },
            )
        };

        debug!(file = rel, hash = %current_hash, "verified file");
        let mut result = VerifyResult::ok(rel)
            .with_template(template)
            .with_hash(current_hash)
            .with_signed_by(signature.signed_by)
            .with_signed_at(signature.signed_at);
        if !placeholders.is_empty() {
            result = result.with_placeholders(placeholders);
        }
        Ok(result)
    }

    /// Report the signing status of `file` without touching the audit log.
    ///
    /// # Errors
    ///
    /// Fails only when the path escapes the project root.
    pub fn check(&self, file: impl AsRef<Path>) -> EngineResult<CheckResult> {
        let contained = self.resolve(file.as_ref())?;
        let rel = contained.relative();

        let signature = match self.store().load(rel) {
            SignatureRecord::Found(signature) => signature,
            SignatureRecord::Missing => return Ok(CheckResult::new(rel, CheckStatus::Unsigned)),
            SignatureRecord::Corrupted => return Ok(CheckResult::new(rel, CheckStatus::Corrupted)),
        };

        let Ok(content) = self.vfs.read(contained.absolute()) else {
            return Ok(CheckResult::new(rel, CheckStatus::Modified).with_signature(signature));
        };

        let status = if format_hash(&sha256_hex(&content)) == signature.hash {
            CheckStatus::Signed
        } else {
            CheckStatus::Modified
        };
        Ok(CheckResult::new(rel, status).with_signature(signature))
    }

    /// Check every signed file in the project, ordered by file path.
    ///
    /// A stored entry whose recorded path no longer resolves inside the
    /// project is skipped rather than failing the sweep.
    #[must_use]
    pub fn check_all(&self) -> Vec<CheckResult> {
        self.store()
            .list()
            .into_iter()
            .filter_map(|signature| match self.check(&signature.file) {
                Ok(result) => Some(result),
                Err(error) => {
                    debug!(file = %signature.file, %error, "skipping unresolvable signature");
                    None
                },
            })
            .collect()
    }

    /// Remove the stored signature for `file`, reporting whether one existed.
    ///
    /// # Errors
    ///
    /// Fails only when the path escapes the project root.
    pub fn unsign(&self, file: impl AsRef<Path>) -> EngineResult<bool> {
        let contained = self.resolve(file.as_ref())?;
        Ok(self.store().delete(contained.relative()))
    }

    /// All stored signatures, ordered by file path.
    #[must_use]
    pub fn list(&self) -> Vec<Signature> {
        self.store().list()
    }

    /// Read the audit trail, optionally filtered to one file.
    #[must_use]
    pub fn read_audit(&self, file: Option<&str>) -> Vec<AuditEntry> {
        self.audit().read(file)
    }
}

fn verify_failed(audit: &AuditLog, file: &str, error: &str) -> EngineResult<VerifyResult> {
    audit.append(&AuditEntry::new(AuditEvent::VerifyFail, file).with_detail(error))?;
    Ok(VerifyResult::failed(file, error))
}

fn custom_patterns(config: &ProjectConfig) -> Vec<CustomPattern> {
    config
        .custom_patterns()
        .iter()
        .map(|group| CustomPattern {
            name: group.name.clone(),
            patterns: group.patterns.clone(),
        })
        .collect()
}
