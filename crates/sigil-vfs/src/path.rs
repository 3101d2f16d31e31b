//! Lexical path containment.
//!
//! Resolution never touches the filesystem: containment is decided from the
//! path components alone, before any I/O, so a traversal attempt cannot probe
//! the disk on the way to being rejected.

use std::path::{Component, Path, PathBuf};

use crate::{VfsError, VfsResult};

/// A path proven to stay within a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainedPath {
    absolute: PathBuf,
    relative: String,
}

impl ContainedPath {
    /// Absolute path under the root.
    #[must_use]
    pub fn absolute(&self) -> &Path {
        &self.absolute
    }

    /// Root-relative path with forward slashes, used as the storage key and
    /// the `file` field of signatures.
    #[must_use]
    pub fn relative(&self) -> &str {
        &self.relative
    }
}

/// Resolve a caller-supplied path against `root`, rejecting anything that
/// lands outside it.
///
/// Accepts root-relative paths and absolute paths that already sit under
/// `root`. `.` components are ignored and `..` pops within the root; popping
/// past it is an escape.
///
/// # Errors
///
/// Returns [`VfsError::Escape`] if the path resolves outside `root`.
pub fn resolve_contained(root: &Path, request: impl AsRef<Path>) -> VfsResult<ContainedPath> {
    let request = request.as_ref();
    let escape = || {
        tracing::debug!(path = %request.display(), "rejected path outside project root");
        VfsError::Escape(request.display().to_string())
    };

    let relative_request = if request.is_absolute() {
        request
            .strip_prefix(root)
            .map_err(|_| escape())?
            .to_path_buf()
    } else {
        request.to_path_buf()
    };

    let mut absolute = root.to_path_buf();
    let mut segments: Vec<String> = Vec::new();

    for component in relative_request.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => return Err(escape()),
            Component::CurDir => {},
            Component::ParentDir => {
                if segments.pop().is_none() {
                    return Err(escape());
                }
                absolute.pop();
            },
            Component::Normal(part) => {
                segments.push(part.to_string_lossy().into_owned());
                absolute.push(part);
            },
        }
    }

    Ok(ContainedPath {
        absolute,
        relative: segments.join("/"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_path() {
        let root = Path::new("/project");
        let path = resolve_contained(root, "prompts/greet.md").unwrap();
        assert_eq!(path.absolute(), Path::new("/project/prompts/greet.md"));
        assert_eq!(path.relative(), "prompts/greet.md");
    }

    #[test]
    fn traversal_above_root_is_blocked() {
        let root = Path::new("/project");
        let result = resolve_contained(root, "../../etc/passwd");
        assert!(matches!(result, Err(VfsError::Escape(_))));
    }

    #[test]
    fn traversal_through_subdir_is_blocked() {
        let root = Path::new("/project");
        let result = resolve_contained(root, "src/../../etc/passwd");
        assert!(matches!(result, Err(VfsError::Escape(_))));
    }

    #[test]
    fn parent_segments_within_root_are_fine() {
        let root = Path::new("/project");
        let path = resolve_contained(root, "a/../b.md").unwrap();
        assert_eq!(path.relative(), "b.md");
    }

    #[test]
    fn dot_segments_are_ignored() {
        let root = Path::new("/project");
        let path = resolve_contained(root, "./a/./b.md").unwrap();
        assert_eq!(path.relative(), "a/b.md");
    }

    #[test]
    fn absolute_path_inside_root_is_accepted() {
        let root = Path::new("/project");
        let path = resolve_contained(root, "/project/docs/x.md").unwrap();
        assert_eq!(path.relative(), "docs/x.md");
    }

    #[test]
    fn absolute_path_outside_root_is_blocked() {
        let root = Path::new("/project");
        let result = resolve_contained(root, "/etc/passwd");
        assert!(matches!(result, Err(VfsError::Escape(_))));
    }
}
