//! Audit command.

use sigil_audit::AuditEntry;
use sigil_config::find_project_root;
use sigil_engine::Project;

use crate::formatter::{OutputFormat, emit_json_list};
use crate::theme::{Theme, short_hash};

/// Print the audit trail, optionally filtered to one file and capped
/// to the most recent `limit` entries.
pub(crate) fn run_audit(
    file: Option<&str>,
    limit: Option<usize>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let root = find_project_root(&std::env::current_dir()?);
    let project = Project::open(&root);

    let mut entries = project.read_audit(file);
    if let Some(limit) = limit {
        let skip = entries.len().saturating_sub(limit);
        entries.drain(..skip);
    }

    if format == OutputFormat::Json {
        return emit_json_list(&entries);
    }

    if entries.is_empty() {
        let message = match file {
            Some(file) => format!("No audit entries for {file}"),
            None => "No audit entries".to_string(),
        };
        println!("{}", Theme::info(&message));
        return Ok(());
    }

    for entry in &entries {
        println!("{}", render_entry(entry));
    }
    Ok(())
}

fn render_entry(entry: &AuditEntry) -> String {
    let mut parts = vec![
        Theme::dimmed(&entry.ts),
        format!("{:<12}", entry.event.to_string()),
        entry.file.clone(),
    ];
    if let Some(identity) = &entry.identity {
        parts.push(format!("by {identity}"));
    }
    if let Some(hash) = &entry.hash {
        parts.push(Theme::dimmed(&format!("{}...", short_hash(hash))));
    }
    if let Some(detail) = &entry.detail {
        parts.push(detail.clone());
    }
    parts.join("  ")
}
