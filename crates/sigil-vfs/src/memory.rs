//! In-memory backend for tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::{Vfs, VfsDirEntry, VfsError, VfsResult};

/// [`Vfs`] holding all files in a map.
///
/// Directories exist only implicitly as key prefixes, so an empty directory
/// cannot be represented. That is enough for the store and audit log, which
/// never create directories without writing a file into them.
#[derive(Debug, Default)]
pub struct MemoryVfs {
    files: RwLock<BTreeMap<PathBuf, String>>,
}

impl MemoryVfs {
    /// Create an empty in-memory VFS.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of files currently stored.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Vfs for MemoryVfs {
    fn read(&self, path: &Path) -> VfsResult<String> {
        self.files
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
            .ok_or_else(|| VfsError::NotFound(path.display().to_string()))
    }

    fn write(&self, path: &Path, content: &str) -> VfsResult<()> {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> VfsResult<()> {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(path.to_path_buf())
            .or_default()
            .push_str(content);
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> VfsResult<Vec<VfsDirEntry>> {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        let mut entries: Vec<VfsDirEntry> = Vec::new();
        for key in files.keys() {
            let Ok(rest) = key.strip_prefix(path) else {
                continue;
            };
            let mut components = rest.components();
            let Some(first) = components.next() else {
                continue;
            };
            let name = first.as_os_str().to_string_lossy().into_owned();
            let is_dir = components.next().is_some();
            if !entries.iter().any(|e| e.name == name) {
                entries.push(VfsDirEntry { name, is_dir });
            }
        }
        if entries.is_empty() {
            return Err(VfsError::NotFound(path.display().to_string()));
        }
        Ok(entries)
    }

    fn remove(&self, path: &Path) -> VfsResult<()> {
        self.files
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| VfsError::NotFound(path.display().to_string()))
    }

    fn exists(&self, path: &Path) -> bool {
        let files = self.files.read().unwrap_or_else(PoisonError::into_inner);
        files.contains_key(path) || files.keys().any(|k| k.starts_with(path) && k != path)
    }
}
