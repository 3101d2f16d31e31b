//! Engines command.

use serde_json::json;
use sigil_templates::{engine_description, engine_names};

use crate::formatter::{OutputFormat, emit_json_list};
use crate::theme::Theme;

/// List the template engines the placeholder extractor understands.
pub(crate) fn run_engines(format: OutputFormat) -> anyhow::Result<()> {
    let names = engine_names();

    if format == OutputFormat::Json {
        let rows: Vec<_> = names
            .iter()
            .map(|name| {
                json!({
                    "name": name,
                    "description": engine_description(name),
                })
            })
            .collect();
        return emit_json_list(&rows);
    }

    println!("{}", Theme::header("Template engines"));
    for name in names {
        let description = engine_description(name).unwrap_or("");
        println!("  {name:<12} {}", Theme::dimmed(description));
    }
    Ok(())
}
