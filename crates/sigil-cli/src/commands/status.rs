//! Status command.

use std::collections::BTreeSet;
use std::path::Path;

use serde_json::json;
use sigil_config::{ProjectConfig, find_project_root};
use sigil_core::{CheckResult, CheckStatus};
use sigil_engine::Project;

use crate::files::glob_walk;
use crate::formatter::{OutputFormat, emit_json};

/// Summarize signature coverage for the project.
pub(crate) fn run_status(format: OutputFormat) -> anyhow::Result<()> {
    let root = find_project_root(&std::env::current_dir()?);
    let project = Project::open(&root);
    let config = project.config();
    let results = project.check_all();

    let signed = count(&results, CheckStatus::Signed);
    let modified = count(&results, CheckStatus::Modified);
    let corrupted = count(&results, CheckStatus::Corrupted);
    let unsigned = unsigned_in_includes(&root, &config, &results);

    if format == OutputFormat::Json {
        let summary = json!({
            "signed": signed,
            "modified": modified,
            "corrupted": corrupted,
            "unsigned": unsigned.len(),
        });
        return emit_json(&[summary]);
    }

    let mut line = format!("{signed} signed, {modified} modified");
    if corrupted > 0 {
        line.push_str(&format!(", {corrupted} corrupted"));
    }
    println!("{line}");
    if !unsigned.is_empty() {
        println!("{} unsigned (in include patterns)", unsigned.len());
    }
    Ok(())
}

fn count(results: &[CheckResult], status: CheckStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}

/// Files matched by the include globs that carry no signature.
fn unsigned_in_includes(
    root: &Path,
    config: &ProjectConfig,
    results: &[CheckResult],
) -> Vec<String> {
    if config.include_globs().is_empty() {
        return Vec::new();
    }
    let mut candidates = BTreeSet::new();
    for pattern in config.include_globs() {
        candidates.extend(glob_walk(root, pattern));
    }
    for pattern in config.exclude_globs() {
        for file in glob_walk(root, pattern) {
            candidates.remove(&file);
        }
    }
    let signed: BTreeSet<&str> = results.iter().map(|r| r.file.as_str()).collect();
    candidates
        .into_iter()
        .filter(|file| !signed.contains(file.as_str()))
        .collect()
}
