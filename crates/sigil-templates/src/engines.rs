//! The built-in engine registry.

use std::sync::LazyLock;

use regex::Regex;

struct EngineSpec {
    name: &'static str,
    description: &'static str,
    patterns: &'static [&'static str],
}

/// Registry order is presentation order for the CLI listing.
const ENGINE_TABLE: &[EngineSpec] = &[
    EngineSpec {
        name: "jinja",
        description: "Jinja2 / Nunjucks",
        patterns: &[r"\{\{.*?\}\}", r"\{%.*?%\}", r"\{#.*?#\}"],
    },
    EngineSpec {
        name: "mustache",
        description: "Mustache",
        patterns: &[r"\{\{\{.*?\}\}\}", r"\{\{[#/^>]?.*?\}\}"],
    },
    EngineSpec {
        name: "handlebars",
        description: "Handlebars",
        patterns: &[r"\{\{\{.*?\}\}\}", r"\{\{[#/^>~]?.*?\}\}"],
    },
    EngineSpec {
        name: "jsx",
        description: "JSX / React expressions",
        patterns: &[r"\{[^}]+\}"],
    },
    EngineSpec {
        name: "js-template",
        description: "JavaScript template literals",
        patterns: &[r"\$\{[^}]+\}"],
    },
    EngineSpec {
        name: "bash",
        description: "Bash / Shell variables",
        patterns: &[r"\$\{[^}]+\}", r"\$[A-Z_][A-Z0-9_]*"],
    },
    EngineSpec {
        name: "mlld",
        description: "mlld style (@var, <file>)",
        patterns: &[r"@[a-zA-Z]\w*(?:\.[a-zA-Z]\w*)*", r"<[a-zA-Z][\w./-]*>"],
    },
    EngineSpec {
        name: "claude",
        description: "Claude artifacts ({{var}}, @file)",
        patterns: &[r"\{\{[a-zA-Z_]\w*\}\}", r"@[a-zA-Z][\w/-]*"],
    },
    EngineSpec {
        name: "erb",
        description: "Ruby ERB",
        patterns: &[r"<%=?-?\s.*?-?%>"],
    },
    EngineSpec {
        name: "go-template",
        description: "Go text/template",
        patterns: &[r"\{\{.*?\}\}"],
    },
    EngineSpec {
        name: "python-fstring",
        description: "Python f-strings",
        patterns: &[r"\{[^}]+\}"],
    },
];

pub(crate) struct Engine {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) regexes: Vec<Regex>,
}

static ENGINES: LazyLock<Vec<Engine>> = LazyLock::new(|| {
    ENGINE_TABLE
        .iter()
        .map(|spec| Engine {
            name: spec.name,
            description: spec.description,
            regexes: spec
                .patterns
                .iter()
                .map(|pattern| {
                    Regex::new(pattern).expect("built-in placeholder pattern must compile")
                })
                .collect(),
        })
        .collect()
});

pub(crate) fn find_engine(name: &str) -> Option<&'static Engine> {
    ENGINES.iter().find(|engine| engine.name == name)
}

/// Names of all built-in engines, in registry order.
#[must_use]
pub fn engine_names() -> Vec<&'static str> {
    ENGINES.iter().map(|engine| engine.name).collect()
}

/// Human-readable description of a built-in engine.
#[must_use]
pub fn engine_description(name: &str) -> Option<&'static str> {
    find_engine(name).map(|engine| engine.description)
}

/// Whether `name` is a built-in engine.
#[must_use]
pub fn is_known_engine(name: &str) -> bool {
    find_engine(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_eleven_engines_in_table_order() {
        let names = engine_names();
        assert_eq!(names.len(), 11);
        assert_eq!(names.first(), Some(&"jinja"));
        assert_eq!(names.last(), Some(&"python-fstring"));
        for name in ["mustache", "mlld", "bash", "claude"] {
            assert!(is_known_engine(name), "{name}");
        }
    }

    #[test]
    fn every_built_in_pattern_compiles() {
        // Forces the LazyLock init, which would panic on a bad pattern.
        let total: usize = ENGINES.iter().map(|e| e.regexes.len()).sum();
        assert_eq!(total, 18);
    }

    #[test]
    fn descriptions_cover_known_engines_only() {
        assert_eq!(engine_description("erb"), Some("Ruby ERB"));
        assert_eq!(engine_description("vue"), None);
    }
}
