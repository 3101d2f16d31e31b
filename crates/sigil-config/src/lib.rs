//! Sigil Config - Project configuration.
//!
//! Reads and writes `.sigil/config.json`: template engine selection, custom
//! placeholder patterns, the default signing identity, and include/exclude
//! globs for the status sweep. Types here are self-contained serde models
//! with no dependencies on other sigil crates; consumers convert them at
//! their own boundary.
//!
//! An unreadable or unparseable config never fails a caller. It loads as the
//! defaults, and signing proceeds with fallback identity resolution.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod loader;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE, STATE_DIR, config_path, find_project_root, init_project, load_config, save_config,
};
pub use types::{CustomPatternConfig, EngineChoice, ProjectConfig, SignSection, TemplatesSection};
