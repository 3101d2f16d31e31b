//! Sigil VFS - Filesystem abstraction for the integrity attestation system.
//!
//! The signature store and audit log are written against the small [`Vfs`]
//! capability set rather than `std::fs`, so an in-memory backend can stand in
//! for the host disk in tests. Two implementations ship here:
//! - [`HostVfs`]: the physical filesystem, creating parent directories on
//!   write.
//! - [`MemoryVfs`]: a map of paths to strings behind a lock.
//!
//! [`path::resolve_contained`] provides the lexical containment check every
//! caller-supplied path must pass before any I/O happens.
//!
//! The trait is synchronous: every store operation is a bounded handful of
//! small reads and writes under a single-writer assumption, so an async
//! runtime has nothing to schedule around.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod host;
mod memory;
pub mod path;

use std::path::Path;

pub use error::{VfsError, VfsResult};
pub use host::HostVfs;
pub use memory::MemoryVfs;
pub use path::{ContainedPath, resolve_contained};

/// A directory entry returned by [`Vfs::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VfsDirEntry {
    /// Entry name relative to the listed directory.
    pub name: String,
    /// Whether the entry is itself a directory.
    pub is_dir: bool,
}

/// Filesystem capabilities the store and audit log are built on.
///
/// All content is UTF-8 text. Implementations create missing parent
/// directories on [`write`](Vfs::write) and [`append`](Vfs::append).
pub trait Vfs: Send + Sync {
    /// Read a file to a string.
    ///
    /// # Errors
    ///
    /// [`VfsError::NotFound`] if the file does not exist, [`VfsError::Io`]
    /// for any other failure.
    fn read(&self, path: &Path) -> VfsResult<String>;

    /// Write a file, replacing any previous content.
    ///
    /// # Errors
    ///
    /// [`VfsError::Io`] if the write fails.
    fn write(&self, path: &Path, content: &str) -> VfsResult<()>;

    /// Append to a file, creating it first if needed.
    ///
    /// # Errors
    ///
    /// [`VfsError::Io`] if the append fails.
    fn append(&self, path: &Path, content: &str) -> VfsResult<()>;

    /// List the entries of a directory.
    ///
    /// # Errors
    ///
    /// [`VfsError::NotFound`] if the directory does not exist,
    /// [`VfsError::Io`] for any other failure.
    fn read_dir(&self, path: &Path) -> VfsResult<Vec<VfsDirEntry>>;

    /// Remove a file.
    ///
    /// # Errors
    ///
    /// [`VfsError::NotFound`] if the file does not exist, [`VfsError::Io`]
    /// for any other failure.
    fn remove(&self, path: &Path) -> VfsResult<()>;

    /// Whether a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}
