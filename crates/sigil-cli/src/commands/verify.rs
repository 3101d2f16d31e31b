//! Verify command.

use sigil_config::find_project_root;
use sigil_core::VerifyResult;
use sigil_engine::Project;

use crate::files::resolve_files;
use crate::formatter::{OutputFormat, emit_json};
use crate::theme::Theme;

/// Verify every file matching `patterns` against its stored signature.
pub(crate) fn run_verify(patterns: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let root = find_project_root(&std::env::current_dir()?);
    let project = Project::open(&root);

    let files = resolve_files(&root, patterns);
    if files.is_empty() {
        eprintln!("{}", Theme::error("No files matched"));
        std::process::exit(1);
    }

    let mut results = Vec::new();
    let mut failed = false;
    for file in &files {
        let result = project.verify(file)?;
        if format == OutputFormat::Pretty {
            if result.verified {
                print_verified(&result);
            } else {
                let reason = result.error.as_deref().unwrap_or("verification failed");
                eprintln!(
                    "{}",
                    Theme::error(&format!("FAILED {}: {reason}", result.file))
                );
            }
        }
        failed = failed || !result.verified;
        results.push(result);
    }

    if format == OutputFormat::Json {
        emit_json(&results)?;
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn print_verified(result: &VerifyResult) {
    println!("{}", Theme::success(&format!("verified {}", result.file)));
    println!("  hash:      {}", result.hash.as_deref().unwrap_or(""));
    println!("  signed by: {}", result.signed_by.as_deref().unwrap_or(""));
    println!("  signed at: {}", result.signed_at.as_deref().unwrap_or(""));
    if let Some(placeholders) = &result.placeholders {
        println!("  placeholders: {}", placeholders.join(", "));
    }
    if let Some(template) = &result.template {
        println!();
        println!("{template}");
    }
}
