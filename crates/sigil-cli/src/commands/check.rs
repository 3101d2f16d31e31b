//! Check command.

use sigil_config::find_project_root;
use sigil_core::CheckStatus;
use sigil_engine::Project;

use crate::files::resolve_files;
use crate::formatter::{OutputFormat, emit_json, emit_json_list};
use crate::theme::Theme;

/// Report the status of signed files, or of the given `patterns` only.
pub(crate) fn run_check(patterns: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let root = find_project_root(&std::env::current_dir()?);
    let project = Project::open(&root);

    let results = if patterns.is_empty() {
        project.check_all()
    } else {
        let files = resolve_files(&root, patterns);
        let mut results = Vec::new();
        for file in &files {
            results.push(project.check(file)?);
        }
        results
    };

    if results.is_empty() {
        match format {
            OutputFormat::Json => emit_json_list(&results)?,
            OutputFormat::Pretty => println!("{}", Theme::info("No signed files found")),
        }
        return Ok(());
    }

    let has_issues = results
        .iter()
        .any(|r| matches!(r.status, CheckStatus::Modified | CheckStatus::Corrupted));

    match format {
        // A bare `check` is a sweep and always reports an array; with
        // explicit files a single result collapses to an object.
        OutputFormat::Json if patterns.is_empty() => emit_json_list(&results)?,
        OutputFormat::Json => emit_json(&results)?,
        OutputFormat::Pretty => {
            for result in &results {
                println!("  {}  {}", Theme::status(result.status), result.file);
            }
        },
    }

    if has_issues {
        std::process::exit(1);
    }
    Ok(())
}
