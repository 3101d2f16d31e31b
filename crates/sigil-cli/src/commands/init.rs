//! Init command - create the state directory and default config.

use sigil_config::{EngineChoice, init_project};

use crate::formatter::{OutputFormat, emit_json};
use crate::theme::Theme;

/// Initialize a sigil project in the current directory.
pub(crate) fn run_init(
    engine: Option<&str>,
    identity: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let choice = engine.map(parse_engines);
    let config = init_project(&cwd, choice, identity)?;

    let engines = config.engine_list();
    if format == OutputFormat::Json {
        return emit_json(&[serde_json::json!({
            "initialized": true,
            "root": cwd.display().to_string(),
            "engines": engines,
            "identity": config.identity(),
        })]);
    }

    println!("{}", Theme::success("Initialized .sigil/ directory"));
    if !engines.is_empty() {
        println!("Template engine(s): {}", engines.join(", "));
    }
    if let Some(identity) = config.identity() {
        println!("Default identity: {identity}");
    }
    Ok(())
}

/// Split a comma-separated engine list, rejecting unknown names.
fn parse_engines(input: &str) -> EngineChoice {
    let mut names: Vec<String> = input.split(',').map(|name| name.trim().to_string()).collect();
    for name in &names {
        if !sigil_templates::is_known_engine(name) {
            eprintln!("Unknown template engine: {name}");
            let mut available = sigil_templates::engine_names();
            available.sort_unstable();
            eprintln!("Available: {}", available.join(", "));
            std::process::exit(1);
        }
    }
    if names.len() == 1 {
        EngineChoice::One(names.remove(0))
    } else {
        EngineChoice::Many(names)
    }
}
