//! Id-keyed signature storage under `<state>/content/`.

use std::path::PathBuf;
use std::sync::Arc;

use sigil_core::{ContentSignature, DEFAULT_ALGORITHM, validate_content_id};
use sigil_vfs::{Vfs, VfsError};
use tracing::debug;

use crate::layout;
use crate::{StoreError, StoreResult};

/// Stores one (metadata, content) pair per content id, flat under
/// `<state>/content/`.
///
/// Ids are validated by the engine before they reach this store; the store
/// only re-checks them where it derives ids from directory entries.
pub struct ContentSignatureStore {
    state_dir: PathBuf,
    vfs: Arc<dyn Vfs>,
}

impl ContentSignatureStore {
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
    /// # Errors
    ///
    /// Returns [`StoreError`] if serialization or either write fails.
    pub fn store(&self, signature: &ContentSignature, content: &str) -> StoreResult<()> {
        let meta = serde_json::to_string_pretty(signature).map_err(StoreError::Serialize)?;
        let meta_path = layout::content_meta_path(&self.state_dir, &signature.id);
        self.vfs.write(&meta_path, &format!("{meta}\n"))?;
        self.write_content(&signature.id, content)
    }

    /// Write only the content blob, used to restore a missing blob without
    /// touching the metadata.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the write fails.
    pub fn write_content(&self, id: &str, content: &str) -> StoreResult<()> {
        let path = layout::content_blob_path(&self.state_dir, id);
        self.vfs.write(&path, content)?;
        Ok(())
    }

    /// Load the signature stored for `id`.
    ///
    /// `None` for missing or unparseable metadata, and for any algorithm
    /// other than `sha256`: a foreign algorithm cannot be re-verified, so
    /// its record is treated the same as a corrupt one.
    #[must_use]
    pub fn load(&self, id: &str) -> Option<ContentSignature> {
        let path = layout::content_meta_path(&self.state_dir, id);
        let raw = self.vfs.read(&path).ok()?;
        let signature: ContentSignature = serde_json::from_str(&raw).ok()?;
        if signature.algorithm != DEFAULT_ALGORITHM {
            return None;
        }
        Some(signature)
    }

    /// Load the stored content blob for `id`.
    #[must_use]
    pub fn load_content(&self, id: &str) -> Option<String> {
        let path = layout::content_blob_path(&self.state_dir, id);
        self.vfs.read(&path).ok()
    }

    /// Whether a metadata document exists for `id`.
    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.vfs
            .exists(&layout::content_meta_path(&self.state_dir, id))
    }

    /// Delete both artifacts for `id`, ignoring ones already missing.
    ///
    /// Returns whether the metadata document existed beforehand.
    pub fn delete(&self, id: &str) -> bool {
        let existed = self.has(id);
        let meta_path = layout::content_meta_path(&self.state_dir, id);
        let blob_path = layout::content_blob_path(&self.state_dir, id);
        for path in [meta_path, blob_path] {
            if let Err(err) = self.vfs.remove(&path) {
                if !matches!(err, VfsError::NotFound(_)) {
                    debug!(path = %path.display(), error = %err, "failed to remove content artifact");
                }
            }
        }
        existed
    }

    /// All loadable signatures under `<state>/content/`.
    ///
    /// Entries that are directories, carry the wrong extension, derive an
    /// invalid id, or fail to load are skipped.
    #[must_use]
    pub fn list(&self) -> Vec<ContentSignature> {
        let dir = self.state_dir.join(layout::CONTENT_DIR);
        let Ok(entries) = self.vfs.read_dir(&dir) else {
            return Vec::new();
        };

        let mut ids: Vec<String> = entries
            .into_iter()
            .filter(|entry| !entry.is_dir)
            .filter_map(|entry| {
                entry
                    .name
                    .strip_suffix(layout::META_EXT)
                    .map(ToOwned::to_owned)
            })
            .filter(|id| validate_content_id(id).is_ok())
            .collect();
        ids.sort();

        ids.iter().filter_map(|id| self.load(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use sigil_vfs::MemoryVfs;

    fn store_with_vfs() -> (ContentSignatureStore, Arc<MemoryVfs>) {
        let vfs = Arc::new(MemoryVfs::new());
        let store =
            ContentSignatureStore::new("/project/.sigil", Arc::clone(&vfs) as Arc<dyn Vfs>);
        (store, vfs)
    }

    fn sample(id: &str) -> ContentSignature {
        ContentSignature::new(
            id,
            "sha256:2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
            "agent",
            "2026-01-15T10:30:00.123Z",
            5,
        )
    }

    #[test]
    fn store_then_load_round_trips() {
        let (store, _) = store_with_vfs();
        let sig = sample("msg-1");

        store.store(&sig, "hello").unwrap();
        assert_eq!(store.load("msg-1"), Some(sig));
        assert_eq!(store.load_content("msg-1").as_deref(), Some("hello"));
    }

    #[test]
    fn load_missing_or_corrupt_is_none() {
        let (store, vfs) = store_with_vfs();
        assert_eq!(store.load("absent"), None);

        vfs.write(Path::new("/project/.sigil/content/bad.sig.json"), "nope")
            .unwrap();
        assert_eq!(store.load("bad"), None);
    }

    #[test]
    fn load_rejects_foreign_algorithms() {
        let (store, _) = store_with_vfs();
        let mut sig = sample("msg-1");
        sig.algorithm = "md5".to_string();
        store.store(&sig, "hello").unwrap();

        assert_eq!(store.load("msg-1"), None);
    }

    #[test]
    fn has_and_delete_report_existence() {
        let (store, _) = store_with_vfs();
        store.store(&sample("msg-1"), "hello").unwrap();

        assert!(store.has("msg-1"));
        assert!(store.delete("msg-1"));
        assert!(!store.has("msg-1"));
        assert!(!store.delete("msg-1"));
    }

    #[test]
    fn write_content_restores_a_missing_blob() {
        let (store, vfs) = store_with_vfs();
        store.store(&sample("msg-1"), "hello").unwrap();
        vfs.remove(Path::new("/project/.sigil/content/msg-1.sig.content"))
            .unwrap();
        assert_eq!(store.load_content("msg-1"), None);

        store.write_content("msg-1", "hello").unwrap();
        assert_eq!(store.load_content("msg-1").as_deref(), Some("hello"));
    }

    #[test]
    fn list_skips_corrupt_and_foreign_entries() {
        let (store, vfs) = store_with_vfs();
        store.store(&sample("keep"), "hello").unwrap();
        vfs.write(Path::new("/project/.sigil/content/bad.sig.json"), "{")
            .unwrap();
        vfs.write(Path::new("/project/.sigil/content/note.txt"), "x")
            .unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|s| s.id).collect();
        assert_eq!(ids, ["keep"]);
    }

    #[test]
    fn list_is_empty_without_a_content_directory() {
        let (store, _) = store_with_vfs();
        assert!(store.list().is_empty());
    }
}
