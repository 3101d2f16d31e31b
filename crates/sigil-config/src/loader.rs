//! Config file discovery, loading, and project initialization.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, ConfigResult};
use crate::types::{EngineChoice, ProjectConfig, SignSection, TemplatesSection};

/// Name of the state directory under a project root.
pub const STATE_DIR: &str = ".sigil";

/// Config file name inside the state directory.
pub const CONFIG_FILE: &str = "config.json";

/// Path of the config file for a project root.
#[must_use]
pub fn config_path(project_root: &Path) -> PathBuf {
    project_root.join(STATE_DIR).join(CONFIG_FILE)
}

/// Load the project config, falling back to defaults on any error.
#[must_use]
pub fn load_config(project_root: &Path) -> ProjectConfig {
    let path = config_path(project_root);
    match fs::read_to_string(&path) {
        Ok(raw) => ProjectConfig::parse_or_default(&raw),
        Err(err) => {
            debug!(path = %path.display(), error = %err, "no readable config, using defaults");
            ProjectConfig::default()
        },
    }
}

/// Write the project config as pretty JSON with a trailing newline.
///
/// # Errors
///
/// Returns [`ConfigError`] if serialization or the write fails.
pub fn save_config(project_root: &Path, config: &ProjectConfig) -> ConfigResult<()> {
    let path = config_path(project_root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.clone(),
            source,
        })?;
    }
    let raw = serde_json::to_string_pretty(config)?;
    fs::write(&path, format!("{raw}\n")).map_err(|source| ConfigError::Write { path, source })
}

/// Create the `.sigil/` layout and an initial config.
///
/// Idempotent: re-running refreshes the config but never disturbs existing
/// signatures.
///
/// # Errors
///
/// Returns [`ConfigError`] if the layout or config cannot be written.
pub fn init_project(
    project_root: &Path,
    engine: Option<EngineChoice>,
    identity: Option<&str>,
) -> ConfigResult<ProjectConfig> {
    let sigs_dir = project_root.join(STATE_DIR).join("sigs");
    fs::create_dir_all(&sigs_dir).map_err(|source| ConfigError::Write {
        path: sigs_dir,
        source,
    })?;

    let mut config = ProjectConfig::default();
    if let Some(engine) = engine {
        config.templates = Some(TemplatesSection {
            engine: Some(engine),
            custom: None,
        });
    }
    if let Some(identity) = identity {
        config.sign = Some(SignSection {
            identity: Some(identity.to_string()),
            ..SignSection::default()
        });
    }

    save_config(project_root, &config)?;
    Ok(config)
}

/// Walk up from `start` looking for a `.sigil/` directory.
///
/// Returns the containing directory, or `start` itself when no project is
/// found.
#[must_use]
pub fn find_project_root(start: &Path) -> PathBuf {
    let start = start
        .canonicalize()
        .unwrap_or_else(|_| start.to_path_buf());
    for candidate in start.ancestors() {
        if candidate.join(STATE_DIR).exists() {
            return candidate.to_path_buf();
        }
    }
    start
}
