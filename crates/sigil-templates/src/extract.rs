//! Placeholder extraction.

use regex::Regex;
use tracing::warn;

use crate::engines::find_engine;

/// A caller-supplied pattern group, typically from project configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomPattern {
    /// Group name, for configuration and diagnostics.
    pub name: String,
    /// Regex pattern strings tried in order.
    pub patterns: Vec<String>,
}

/// Extract template placeholders from `content`.
///
/// Runs every pattern of every selected engine plus every custom group over
/// the content and unions the matches, deduplicated by exact substring in
/// first-seen order. Unknown engine names are skipped; a custom pattern that
/// fails to compile is logged and skipped.
#[must_use]
pub fn extract_placeholders(
    content: &str,
    engines: &[String],
    custom: Option<&[CustomPattern]>,
) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for engine_name in engines {
        let Some(engine) = find_engine(engine_name) else {
            continue;
        };
        for regex in &engine.regexes {
            collect_matches(regex, content, &mut found);
        }
    }

    for group in custom.unwrap_or_default() {
        for pattern in &group.patterns {
            match Regex::new(pattern) {
                Ok(regex) => collect_matches(&regex, content, &mut found),
                Err(err) => {
                    warn!(
                        group = %group.name,
                        pattern = %pattern,
                        error = %err,
                        "failed to compile custom placeholder pattern"
                    );
                },
            }
        }
    }

    found
}

fn collect_matches(regex: &Regex, content: &str, found: &mut Vec<String>) {
    for m in regex.find_iter(content) {
        let text = m.as_str();
        if !found.iter().any(|seen| seen == text) {
            found.push(text.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(content: &str, engines: &[&str]) -> Vec<String> {
        let engines: Vec<String> = engines.iter().map(ToString::to_string).collect();
        extract_placeholders(content, &engines, None)
    }

    #[test]
    fn jinja_finds_expressions_statements_and_comments() {
        let found = extract(
            "Hello {{ name }}, {% if admin %}welcome{% endif %} {# comment #}",
            &["jinja"],
        );
        assert!(found.contains(&"{{ name }}".to_string()));
        assert!(found.contains(&"{% if admin %}".to_string()));
        assert!(found.contains(&"{# comment #}".to_string()));
    }

    #[test]
    fn mustache_finds_variables_and_raw_triples() {
        let found = extract(
            "Hello {{name}}, {{{raw}}}, {{#section}}content{{/section}}",
            &["mustache"],
        );
        assert!(found.contains(&"{{name}}".to_string()));
        assert!(found.contains(&"{{{raw}}}".to_string()));
    }

    #[test]
    fn js_template_finds_interpolations() {
        let found = extract("Hello ${name}, value is ${obj.prop}", &["js-template"]);
        assert!(found.contains(&"${name}".to_string()));
        assert!(found.contains(&"${obj.prop}".to_string()));
    }

    #[test]
    fn bash_finds_both_variable_forms() {
        let found = extract("Deploy $VERSION to ${ENVIRONMENT}", &["bash"]);
        assert!(found.contains(&"$VERSION".to_string()));
        assert!(found.contains(&"${ENVIRONMENT}".to_string()));
    }

    #[test]
    fn mlld_finds_vars_and_file_refs() {
        let found = extract("Analyze @input and check <config.json>", &["mlld"]);
        assert!(found.contains(&"@input".to_string()));
        assert!(found.contains(&"<config.json>".to_string()));
    }

    #[test]
    fn erb_finds_output_and_logic_tags() {
        let found = extract("Hello <%= name %>, <% if admin %>", &["erb"]);
        assert!(found.contains(&"<%= name %>".to_string()));
        assert!(found.contains(&"<% if admin %>".to_string()));
    }

    #[test]
    fn multiple_engines_union_their_matches() {
        let found = extract("Hello {{ name }} and ${value}", &["jinja", "js-template"]);
        assert!(found.contains(&"{{ name }}".to_string()));
        assert!(found.contains(&"${value}".to_string()));
    }

    #[test]
    fn repeated_placeholders_dedup_in_first_seen_order() {
        let found = extract("{{a}} {{b}} {{a}}", &["jinja"]);
        assert_eq!(found, ["{{a}}", "{{b}}"]);
    }

    #[test]
    fn unknown_engine_yields_empty_without_error() {
        assert!(extract("Hello {{ name }}", &["vue"]).is_empty());
    }

    #[test]
    fn no_engine_yields_empty() {
        assert!(extract("hello world", &[]).is_empty());
    }

    #[test]
    fn custom_patterns_are_unioned() {
        let custom = [CustomPattern {
            name: "custom".to_string(),
            patterns: vec![r"%%\w+%%".to_string()],
        }];
        let found = extract_placeholders("Hello %%name%% and %%other%%", &[], Some(&custom));
        assert!(found.contains(&"%%name%%".to_string()));
        assert!(found.contains(&"%%other%%".to_string()));
    }

    #[test]
    fn invalid_custom_pattern_is_skipped_not_fatal() {
        let custom = [CustomPattern {
            name: "broken".to_string(),
            patterns: vec!["[unclosed".to_string(), r"%%\w+%%".to_string()],
        }];
        let found = extract_placeholders("%%ok%%", &[], Some(&custom));
        assert_eq!(found, ["%%ok%%"]);
    }

    #[test]
    fn empty_content_yields_empty() {
        assert!(extract("", &["jinja", "bash"]).is_empty());
    }
}
