//! Path-keyed signature storage under `<state>/sigs/`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use sigil_core::Signature;
use sigil_vfs::{Vfs, VfsError};
use tracing::debug;

use crate::layout;
use crate::{StoreError, StoreResult};

/// Outcome of loading a stored signature.
///
/// Missing and corrupt metadata are ordinary states of the store, not
/// errors: callers branch on them to report `unsigned` versus `corrupted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureRecord {
    /// Metadata present and parsed.
    Found(Signature),
    /// No metadata file for this key.
    Missing,
    /// Metadata file exists but does not parse as a signature.
    Corrupted,
}

/// Stores one (metadata, content) pair per signed file, mirrored under
/// `<state>/sigs/` at paths derived from the project-relative file path.
pub struct SignatureStore {
    state_dir: PathBuf,
    vfs: Arc<dyn Vfs>,
}

impl SignatureStore {
    /// Create a store rooted at `state_dir`.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>, vfs: Arc<dyn Vfs>) -> Self {
        Self {
            state_dir: state_dir.into(),
            vfs,
        }
    }

    /// Write the metadata document and the raw content blob.
    ///
    /// Metadata goes first; a crash between the two writes leaves a
    /// signature whose blob [`load_content`](Self::load_content) reports as
    /// absent, not corrupt metadata.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or either write fails.
    pub fn store(&self, signature: &Signature, content: &str) -> StoreResult<()> {
        let meta = serde_json::to_string_pretty(signature).map_err(StoreError::Serialize)?;
        let meta_path = layout::sig_meta_path(&self.state_dir, &signature.file);
        self.vfs.write(&meta_path, &format!("{meta}\n"))?;
        let content_path = layout::sig_content_path(&self.state_dir, &signature.file);
        self.vfs.write(&content_path, content)?;
        Ok(())
    }

    /// Load the signature stored for `file`.
    #[must_use]
    pub fn load(&self, file: &str) -> SignatureRecord {
        let path = layout::sig_meta_path(&self.state_dir, file);
        let Ok(raw) = self.vfs.read(&path) else {
            return SignatureRecord::Missing;
        };
        match serde_json::from_str(&raw) {
            Ok(signature) => SignatureRecord::Found(signature),
            Err(_) => SignatureRecord::Corrupted,
        }
    }

    /// Load the stored content blob for `file`.
    ///
    /// `None` when the blob is missing, even if metadata exists. That state
    /// is reachable when a content write failed after the metadata write.
    #[must_use]
    pub fn load_content(&self, file: &str) -> Option<String> {
        let path = layout::sig_content_path(&self.state_dir, file);
        self.vfs.read(&path).ok()
    }

    /// Delete both artifacts for `file`, ignoring ones already missing.
    ///
    /// Returns whether the metadata document existed beforehand.
    pub fn delete(&self, file: &str) -> bool {
        let meta_path = layout::sig_meta_path(&self.state_dir, file);
        let existed = self.vfs.exists(&meta_path);
        let content_path = layout::sig_content_path(&self.state_dir, file);
        for path in [meta_path, content_path] {
            if let Err(err) = self.vfs.remove(&path) {
                if !matches!(err, VfsError::NotFound(_)) {
                    debug!(path = %path.display(), error = %err, "failed to remove signature artifact");
                }
            }
        }
        existed
    }

    /// All parseable signatures under `<state>/sigs/`, in path order.
    ///
    /// Unparseable metadata files are skipped so partial corruption never
    /// aborts a listing.
    #[must_use]
    pub fn list(&self) -> Vec<Signature> {
        let root = self.state_dir.join(layout::SIGS_DIR);
        let mut meta_paths = Vec::new();
        self.collect_meta_paths(&root, &mut meta_paths);
        meta_paths.sort();

        let mut signatures = Vec::new();
        for path in meta_paths {
            let parsed = self
                .vfs
                .read(&path)
                .ok()
                .and_then(|raw| serde_json::from_str::<Signature>(&raw).ok());
            match parsed {
                Some(signature) => signatures.push(signature),
                None => {
                    debug!(path = %path.display(), "skipping unparseable signature metadata");
                },
            }
        }
        signatures
    }

    fn collect_meta_paths(&self, dir: &Path, out: &mut Vec<PathBuf>) {
        let Ok(entries) = self.vfs.read_dir(dir) else {
            return;
        };
        for entry in entries {
            let path = dir.join(&entry.name);
            if entry.is_dir {
                self.collect_meta_paths(&path, out);
            } else if entry.name.ends_with(layout::META_EXT) {
                out.push(path);
            }
        }
    }
}
