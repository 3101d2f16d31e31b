//! The append-only journal file.

use std::path::PathBuf;
use std::sync::Arc;

use sigil_vfs::Vfs;
use tracing::debug;

use crate::entry::AuditEntry;
use crate::error::AuditResult;

/// File name of the journal inside the state directory.
pub const AUDIT_FILE: &str = "audit.jsonl";

/// Append-only NDJSON journal at `<state>/audit.jsonl`.
pub struct AuditLog {
    path: PathBuf,
    vfs: Arc<dyn Vfs>,
}

impl AuditLog {
    /// Create a log for the given state directory.
    #[must_use]
    pub fn new(state_dir: impl Into<PathBuf>, vfs: Arc<dyn Vfs>) -> Self {
        Self {
            path: state_dir.into().join(AUDIT_FILE),
            vfs,
        }
    }

    /// Append one entry as a compact JSON line.
    ///
    /// Creates the journal and its parent directory on first use.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AuditError`] if serialization or the append fails.
    pub fn append(&self, entry: &AuditEntry) -> AuditResult<()> {
        let line = serde_json::to_string(entry)?;
        self.vfs.append(&self.path, &format!("{line}\n"))?;
        Ok(())
    }

    /// Read the journal in append order.
    ///
    /// With `filter_file` set, only entries whose `file` matches exactly are
    /// returned. Lines that fail to parse are skipped; a missing journal is
    /// an empty one.
    #[must_use]
    pub fn read(&self, filter_file: Option<&str>) -> Vec<AuditEntry> {
        let Ok(raw) = self.vfs.read(&self.path) else {
            return Vec::new();
        };

        let mut entries = Vec::new();
        for line in raw.lines() {
            if line.is_empty() {
                continue;
            }
            let Ok(entry) = serde_json::from_str::<AuditEntry>(line) else {
                debug!(line, "skipping unparseable audit line");
                continue;
            };
            if filter_file.is_none_or(|file| entry.file == file) {
                entries.push(entry);
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::AuditEvent;
    use sigil_vfs::{HostVfs, MemoryVfs};
    use std::path::Path;

    fn memory_log() -> (AuditLog, Arc<MemoryVfs>) {
        let vfs = Arc::new(MemoryVfs::new());
        let log = AuditLog::new("/project/.sigil", Arc::clone(&vfs) as Arc<dyn Vfs>);
        (log, vfs)
    }

    #[test]
    fn appends_preserve_order() {
        let (log, _) = memory_log();
        log.append(&AuditEntry::new(AuditEvent::Sign, "a.md"))
            .unwrap();
        log.append(&AuditEntry::new(AuditEvent::Verify, "a.md"))
            .unwrap();
        log.append(&AuditEntry::new(AuditEvent::VerifyFail, "b.md"))
            .unwrap();

        let events: Vec<AuditEvent> = log.read(None).into_iter().map(|e| e.event).collect();
        assert_eq!(
            events,
            [AuditEvent::Sign, AuditEvent::Verify, AuditEvent::VerifyFail]
        );
    }

    #[test]
    fn filter_matches_file_exactly() {
        let (log, _) = memory_log();
        log.append(&AuditEntry::new(AuditEvent::Sign, "a.md"))
            .unwrap();
        log.append(&AuditEntry::new(AuditEvent::Sign, "a.md.bak"))
            .unwrap();
        log.append(&AuditEntry::new(AuditEvent::Verify, "a.md"))
            .unwrap();

        let entries = log.read(Some("a.md"));
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.file == "a.md"));
        assert_eq!(entries[0].event, AuditEvent::Sign);
        assert_eq!(entries[1].event, AuditEvent::Verify);
    }

    #[test]
    fn corrupt_lines_do_not_hide_the_rest() {
        let (log, vfs) = memory_log();
        log.append(&AuditEntry::new(AuditEvent::Sign, "a.md"))
            .unwrap();
        vfs.append(Path::new("/project/.sigil/audit.jsonl"), "not json\n")
            .unwrap();
        log.append(&AuditEntry::new(AuditEvent::Verify, "a.md"))
            .unwrap();

        assert_eq!(log.read(None).len(), 2);
    }

    #[test]
    fn missing_journal_reads_empty() {
        let (log, _) = memory_log();
        assert!(log.read(None).is_empty());
    }

    #[test]
    fn one_compact_line_per_entry() {
        let (log, vfs) = memory_log();
        log.append(
            &AuditEntry::new(AuditEvent::Sign, "a.md")
                .with_hash("sha256:ab")
                .with_identity("alice"),
        )
        .unwrap();

        let raw = vfs.read(Path::new("/project/.sigil/audit.jsonl")).unwrap();
        assert_eq!(raw.lines().count(), 1);
        let line = raw.lines().next().unwrap();
        assert!(!line.contains('\n'));
        assert!(line.starts_with("{\"ts\":"));
        assert!(line.contains("\"identity\":\"alice\""));
    }

    #[test]
    fn works_on_the_host_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join(".sigil"), Arc::new(HostVfs::new()));

        log.append(&AuditEntry::new(AuditEvent::Sign, "a.md"))
            .unwrap();
        assert_eq!(log.read(Some("a.md")).len(), 1);
    }
}
