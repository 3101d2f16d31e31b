//! Unsign command.

use serde_json::json;
use sigil_config::find_project_root;
use sigil_engine::Project;

use crate::files::resolve_files;
use crate::formatter::{OutputFormat, emit_json};
use crate::theme::Theme;

/// Remove the signatures for every file matching `patterns`.
pub(crate) fn run_unsign(patterns: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let root = find_project_root(&std::env::current_dir()?);
    let project = Project::open(&root);

    let files = resolve_files(&root, patterns);
    if files.is_empty() {
        eprintln!("{}", Theme::error("No files matched"));
        std::process::exit(1);
    }

    let mut outcomes = Vec::new();
    for file in &files {
        let removed = project.unsign(file)?;
        if format == OutputFormat::Pretty {
            if removed {
                println!("{}", Theme::success(&format!("unsigned {file}")));
            } else {
                println!("{}", Theme::warning(&format!("no signature for {file}")));
            }
        }
        outcomes.push(json!({ "file": file, "removed": removed }));
    }

    if format == OutputFormat::Json {
        emit_json(&outcomes)?;
    }
    Ok(())
}
