//! Sigil Audit - Append-only journal of signing and verification events.
//!
//! Every sign, successful verify, and failed verify appends one compact JSON
//! line to `<state>/audit.jsonl`. Entries are never rewritten or deleted by
//! this subsystem; the total order of events is the file's append order.
//! Reading tolerates corruption line by line: one mangled entry never hides
//! the rest of the log.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod entry;
mod error;
mod log;

pub use entry::{AuditEntry, AuditEvent};
pub use error::{AuditError, AuditResult};
pub use log::{AUDIT_FILE, AuditLog};
