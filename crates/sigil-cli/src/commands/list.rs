//! List command.

use sigil_config::find_project_root;
use sigil_engine::Project;

use crate::formatter::{OutputFormat, emit_json_list};
use crate::theme::{Theme, short_hash};

/// List every signed file with its status and provenance.
pub(crate) fn run_list(format: OutputFormat) -> anyhow::Result<()> {
    let root = find_project_root(&std::env::current_dir()?);
    let project = Project::open(&root);
    let results = project.check_all();

    if format == OutputFormat::Json {
        return emit_json_list(&results);
    }

    if results.is_empty() {
        println!("{}", Theme::info("No signed files"));
        return Ok(());
    }

    for result in &results {
        let provenance = result.signature.as_ref().map_or_else(String::new, |sig| {
            format!(
                "  {}",
                Theme::dimmed(&format!(
                    "{}... by {} at {}",
                    short_hash(&sig.hash),
                    sig.signed_by,
                    sig.signed_at
                ))
            )
        });
        println!(
            "  {}  {}{provenance}",
            Theme::status(result.status),
            result.file
        );
    }
    Ok(())
}
