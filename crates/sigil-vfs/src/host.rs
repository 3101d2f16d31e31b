//! Host filesystem backend.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::{Vfs, VfsDirEntry, VfsError, VfsResult};

/// [`Vfs`] backed by the physical filesystem.
///
/// Writes and appends create missing parent directories first, so callers
/// never have to pre-create the state directory layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostVfs;

impl HostVfs {
    /// Create a new host VFS.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn ensure_parent(path: &Path) -> VfsResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn map_not_found(path: &Path, err: std::io::Error) -> VfsError {
        if err.kind() == std::io::ErrorKind::NotFound {
            VfsError::NotFound(path.display().to_string())
        } else {
            VfsError::Io(err)
        }
    }
}

impl Vfs for HostVfs {
    fn read(&self, path: &Path) -> VfsResult<String> {
        fs::read_to_string(path).map_err(|e| Self::map_not_found(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> VfsResult<()> {
        Self::ensure_parent(path)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn append(&self, path: &Path, content: &str) -> VfsResult<()> {
        Self::ensure_parent(path)?;
        let mut file = fs::OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> VfsResult<Vec<VfsDirEntry>> {
        let entries = fs::read_dir(path).map_err(|e| Self::map_not_found(path, e))?;
        let mut listing = Vec::new();
        for entry in entries {
            let entry = entry?;
            let is_dir = entry.file_type()?.is_dir();
            listing.push(VfsDirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }
        Ok(listing)
    }

    fn remove(&self, path: &Path) -> VfsResult<()> {
        fs::remove_file(path).map_err(|e| Self::map_not_found(path, e))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
