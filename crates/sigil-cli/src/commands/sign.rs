//! Sign command.

use sigil_config::{ProjectConfig, find_project_root};
use sigil_engine::{Project, SignOptions};

use crate::files::resolve_files;
use crate::formatter::{OutputFormat, emit_json};
use crate::theme::{Theme, short_hash};

/// Sign every file matching `patterns`.
pub(crate) fn run_sign(
    patterns: &[String],
    identity: Option<&str>,
    engine: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let root = find_project_root(&std::env::current_dir()?);
    let project = Project::open(&root);

    if let Some(engine) = engine {
        require_engine(engine, &project.config());
    }

    let files = resolve_files(&root, patterns);
    if files.is_empty() {
        eprintln!("{}", Theme::error("No files matched"));
        std::process::exit(1);
    }

    let mut options = SignOptions::default();
    if let Some(identity) = identity {
        options = options.with_identity(identity);
    }
    if let Some(engine) = engine {
        options = options.with_engine(engine);
    }

    let mut signatures = Vec::new();
    for file in &files {
        let signature = project.sign(file, &options)?;
        if format == OutputFormat::Pretty {
            println!(
                "{}",
                Theme::success(&format!(
                    "signed {} ({}... by {})",
                    signature.file,
                    short_hash(&signature.hash),
                    signature.signed_by
                ))
            );
        }
        signatures.push(signature);
    }

    match format {
        OutputFormat::Json => emit_json(&signatures)?,
        OutputFormat::Pretty if signatures.len() > 1 => {
            println!();
            println!("{} files signed", signatures.len());
        },
        OutputFormat::Pretty => {},
    }
    Ok(())
}

/// Accept a registry engine or a configured custom pattern group.
fn require_engine(name: &str, config: &ProjectConfig) {
    if sigil_templates::is_known_engine(name) {
        return;
    }
    if config.custom_patterns().iter().any(|group| group.name == name) {
        return;
    }
    eprintln!("Unknown template engine: {name}");
    let mut available = sigil_templates::engine_names();
    available.sort_unstable();
    eprintln!("Available: {}", available.join(", "));
    std::process::exit(1);
}
