//! Sigil Templates - Placeholder extraction for verified content.
//!
//! A registry maps template engine names to lists of regex patterns; on
//! successful verification the engine runs the configured patterns over the
//! stored content and reports every matched placeholder, so callers can see
//! which template variables a prompt exposes. Engines are data, not types:
//! adding one is a table entry.
//!
//! Unknown engine names are ignored rather than rejected, so configs written
//! for a newer registry keep working against an older one.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod engines;
mod extract;

pub use engines::{engine_description, engine_names, is_known_engine};
pub use extract::{CustomPattern, extract_placeholders};
