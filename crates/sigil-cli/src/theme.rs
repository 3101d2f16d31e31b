//! CLI theme and styling.

use colored::Colorize;
use sigil_core::CheckStatus;

/// CLI theme configuration.
pub(crate) struct Theme;

impl Theme {
    /// Format a header.
    pub(crate) fn header(text: &str) -> String {
        format!("{}", text.bold().cyan())
    }

    /// Format a success message.
    pub(crate) fn success(text: &str) -> String {
        format!("{} {}", "✓".green(), text)
    }

    /// Format an error message.
    pub(crate) fn error(text: &str) -> String {
        format!("{} {}", "✗".red(), text.red())
    }

    /// Format a warning message.
    pub(crate) fn warning(text: &str) -> String {
        format!("{} {}", "!".yellow(), text.yellow())
    }

    /// Format an info message.
    pub(crate) fn info(text: &str) -> String {
        format!("{} {}", "i".blue(), text)
    }

    /// Format a dimmed message.
    pub(crate) fn dimmed(text: &str) -> String {
        format!("{}", text.dimmed())
    }

    /// Marker for a check status.
    pub(crate) fn status(status: CheckStatus) -> String {
        match status {
            CheckStatus::Signed => "ok".green().to_string(),
            CheckStatus::Modified => "MODIFIED".red().bold().to_string(),
            CheckStatus::Unsigned => "unsigned".yellow().to_string(),
            CheckStatus::Corrupted => "corrupted".red().to_string(),
        }
    }
}

/// A display prefix of a `<algorithm>:<hex>` hash.
pub(crate) fn short_hash(hash: &str) -> &str {
    hash.get(..15).unwrap_or(hash)
}
