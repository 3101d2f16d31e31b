//! On-disk layout of the state directory.
//!
//! ```text
//! <state>/
//!   config.json
//!   audit.jsonl
//!   sigs/<rel-path>.sig.json      path-keyed metadata, directory-mirrored
//!   sigs/<rel-path>.sig.content   paired raw content
//!   content/<id>.sig.json         id-keyed metadata, flat
//!   content/<id>.sig.content      paired raw content
//! ```

use std::path::{Path, PathBuf};

/// Name of the state directory under a project root.
pub const STATE_DIR: &str = ".sigil";

/// Subdirectory holding path-keyed signatures.
pub const SIGS_DIR: &str = "sigs";

/// Subdirectory holding id-keyed content signatures.
pub const CONTENT_DIR: &str = "content";

/// Extension of metadata documents.
pub const META_EXT: &str = ".sig.json";

/// Extension of raw content blobs.
pub const CONTENT_EXT: &str = ".sig.content";

/// State directory for a project root.
#[must_use]
pub fn state_dir(project_root: &Path) -> PathBuf {
    project_root.join(STATE_DIR)
}

/// Metadata path for a path-keyed signature.
#[must_use]
pub fn sig_meta_path(state_dir: &Path, file: &str) -> PathBuf {
    state_dir.join(SIGS_DIR).join(format!("{file}{META_EXT}"))
}

/// Content blob path for a path-keyed signature.
#[must_use]
pub fn sig_content_path(state_dir: &Path, file: &str) -> PathBuf {
    state_dir.join(SIGS_DIR).join(format!("{file}{CONTENT_EXT}"))
}

/// Metadata path for an id-keyed signature.
#[must_use]
pub fn content_meta_path(state_dir: &Path, id: &str) -> PathBuf {
    state_dir.join(CONTENT_DIR).join(format!("{id}{META_EXT}"))
}

/// Content blob path for an id-keyed signature.
#[must_use]
pub fn content_blob_path(state_dir: &Path, id: &str) -> PathBuf {
    state_dir.join(CONTENT_DIR).join(format!("{id}{CONTENT_EXT}"))
}
