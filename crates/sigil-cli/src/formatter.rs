//! Output format selection and JSON rendering.

use serde::Serialize;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// Human-readable, colored, on stdout.
    Pretty,
    /// Machine-readable JSON on stdout.
    Json,
}

/// Print results as JSON: a single result as an object, several as an array.
pub(crate) fn emit_json<T: Serialize>(values: &[T]) -> anyhow::Result<()> {
    println!("{}", render_json(values)?);
    Ok(())
}

/// Print results as a JSON array, never collapsing.
pub(crate) fn emit_json_list<T: Serialize>(values: &[T]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(values)?);
    Ok(())
}

fn render_json<T: Serialize>(values: &[T]) -> anyhow::Result<String> {
    let rendered = match values {
        [single] => serde_json::to_string_pretty(single)?,
        many => serde_json::to_string_pretty(many)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_result_collapses_to_an_object() {
        let rendered = render_json(&[serde_json::json!({"file": "a.md"})]).unwrap();
        assert!(rendered.starts_with('{'));
    }

    #[test]
    fn several_results_stay_an_array() {
        let rendered = render_json(&[
            serde_json::json!({"file": "a.md"}),
            serde_json::json!({"file": "b.md"}),
        ])
        .unwrap();
        assert!(rendered.starts_with('['));
    }

    #[test]
    fn empty_results_render_as_an_empty_array() {
        let rendered = render_json::<serde_json::Value>(&[]).unwrap();
        assert_eq!(rendered, "[]");
    }
}
