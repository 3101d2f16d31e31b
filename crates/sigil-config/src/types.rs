//! Configuration models.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Root of `.sigil/config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Config format version.
    pub version: u32,
    /// Template engine selection and custom patterns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<TemplatesSection>,
    /// Signing defaults and file selection globs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign: Option<SignSection>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            version: 1,
            templates: None,
            sign: None,
        }
    }
}

impl ProjectConfig {
    /// Parse a config document, falling back to defaults on any error.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(err) => {
                debug!(error = %err, "malformed config, using defaults");
                Self::default()
            },
        }
    }

    /// Configured engines as a list, empty when none are configured.
    #[must_use]
    pub fn engine_list(&self) -> Vec<String> {
        self.templates
            .as_ref()
            .and_then(|t| t.engine.as_ref())
            .map(EngineChoice::as_list)
            .unwrap_or_default()
    }

    /// First configured engine, used as the default at signing time.
    #[must_use]
    pub fn first_engine(&self) -> Option<&str> {
        self.templates
            .as_ref()
            .and_then(|t| t.engine.as_ref())
            .and_then(EngineChoice::first)
    }

    /// Configured custom pattern groups.
    #[must_use]
    pub fn custom_patterns(&self) -> &[CustomPatternConfig] {
        self.templates
            .as_ref()
            .and_then(|t| t.custom.as_deref())
            .unwrap_or_default()
    }

    /// Configured default signing identity.
    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.sign.as_ref().and_then(|s| s.identity.as_deref())
    }

    /// Include globs for the status sweep.
    #[must_use]
    pub fn include_globs(&self) -> &[String] {
        self.sign
            .as_ref()
            .and_then(|s| s.include.as_deref())
            .unwrap_or_default()
    }

    /// Exclude globs for the status sweep.
    #[must_use]
    pub fn exclude_globs(&self) -> &[String] {
        self.sign
            .as_ref()
            .and_then(|s| s.exclude.as_deref())
            .unwrap_or_default()
    }
}

/// The `templates` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesSection {
    /// Engine name, or list of engine names tried together.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineChoice>,
    /// Custom placeholder pattern groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Vec<CustomPatternConfig>>,
}

/// One engine name or several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EngineChoice {
    /// A single engine.
    One(String),
    /// Several engines, all applied during verification.
    Many(Vec<String>),
}

impl EngineChoice {
    /// The choice as a list of engine names.
    #[must_use]
    pub fn as_list(&self) -> Vec<String> {
        match self {
            Self::One(name) => vec![name.clone()],
            Self::Many(names) => names.clone(),
        }
    }

    /// The first engine named by the choice.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::One(name) => Some(name.as_str()),
            Self::Many(names) => names.first().map(String::as_str),
        }
    }
}

/// A named group of custom placeholder patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomPatternConfig {
    /// Group name.
    pub name: String,
    /// Regex pattern strings.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// The `sign` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignSection {
    /// Hash algorithm, informational; signing always uses sha256.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Default signing identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    /// Globs selecting files for the status sweep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    /// Globs excluding files from the status sweep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_version_one_with_no_sections() {
        let config = ProjectConfig::default();
        assert_eq!(config.version, 1);
        assert!(config.templates.is_none());
        assert!(config.sign.is_none());
    }

    #[test]
    fn parse_or_default_swallows_garbage() {
        assert_eq!(ProjectConfig::parse_or_default("{oops"), ProjectConfig::default());
        assert_eq!(ProjectConfig::parse_or_default(""), ProjectConfig::default());
    }

    #[test]
    fn parse_ignores_unknown_keys() {
        let config = ProjectConfig::parse_or_default(r#"{"version": 2, "future": true}"#);
        assert_eq!(config.version, 2);
    }

    #[test]
    fn engine_choice_accepts_string_or_list() {
        let one: ProjectConfig =
            serde_json::from_str(r#"{"templates": {"engine": "jinja"}}"#).unwrap();
        assert_eq!(one.engine_list(), ["jinja"]);
        assert_eq!(one.first_engine(), Some("jinja"));

        let many: ProjectConfig =
            serde_json::from_str(r#"{"templates": {"engine": ["jinja", "bash"]}}"#).unwrap();
        assert_eq!(many.engine_list(), ["jinja", "bash"]);
        assert_eq!(many.first_engine(), Some("jinja"));
    }

    #[test]
    fn custom_patterns_parse_as_named_groups() {
        let config = ProjectConfig::parse_or_default(
            r#"{"templates": {"custom": [{"name": "pct", "patterns": ["%%\\w+%%"]}]}}"#,
        );
        let custom = config.custom_patterns();
        assert_eq!(custom.len(), 1);
        assert_eq!(custom[0].name, "pct");
        assert_eq!(custom[0].patterns, ["%%\\w+%%"]);
    }

    #[test]
    fn serialization_omits_empty_sections() {
        let json = serde_json::to_string(&ProjectConfig::default()).unwrap();
        assert_eq!(json, r#"{"version":1}"#);
    }

    #[test]
    fn round_trips_a_full_config() {
        let config = ProjectConfig {
            version: 1,
            templates: Some(TemplatesSection {
                engine: Some(EngineChoice::Many(vec![
                    "jinja".to_string(),
                    "bash".to_string(),
                ])),
                custom: Some(vec![CustomPatternConfig {
                    name: "pct".to_string(),
                    patterns: vec![r"%%\w+%%".to_string()],
                }]),
            }),
            sign: Some(SignSection {
                algorithm: Some("sha256".to_string()),
                identity: Some("release-bot".to_string()),
                include: Some(vec!["**/*.md".to_string()]),
                exclude: Some(vec!["**/node_modules/**".to_string()]),
            }),
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: ProjectConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.identity(), Some("release-bot"));
        assert_eq!(back.include_globs(), ["**/*.md"]);
    }
}
