//! File and glob resolution against the project root.

use std::path::Path;

use globset::GlobBuilder;
use tracing::warn;
use walkdir::WalkDir;

/// Expand `patterns` into deduplicated project-relative paths, preserving
/// first-seen order. Patterns containing `*` or `{` are globs walked
/// recursively under `root` (`*` stays within one directory, `**` crosses);
/// anything else passes through verbatim for the engine to resolve.
pub(crate) fn resolve_files(root: &Path, patterns: &[String]) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::new();
    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('{') {
            for matched in glob_walk(root, pattern) {
                if !resolved.contains(&matched) {
                    resolved.push(matched);
                }
            }
        } else {
            let plain = pattern.replace('\\', "/");
            if !resolved.contains(&plain) {
                resolved.push(plain);
            }
        }
    }
    resolved
}

/// Walk `root` and return the sorted relative paths matching `pattern`.
///
/// Dot-directories (including the state directory) never match; an invalid
/// pattern is logged and matches nothing.
pub(crate) fn glob_walk(root: &Path, pattern: &str) -> Vec<String> {
    let glob = match GlobBuilder::new(pattern).literal_separator(true).build() {
        Ok(glob) => glob,
        Err(error) => {
            warn!(pattern, %error, "skipping invalid glob pattern");
            return Vec::new();
        },
    };
    let matcher = glob.compile_matcher();

    let mut matched = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };
        let rel = rel.to_string_lossy().replace('\\', "/");
        if rel.split('/').any(|part| part.starts_with('.')) {
            continue;
        }
        if matcher.is_match(&rel) {
            matched.push(rel);
        }
    }
    matched.sort();
    matched
}
