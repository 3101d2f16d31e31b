//! Sigil Engine - sign, verify and check operations.
//!
//! This crate ties the stores, audit log and template registry together
//! behind two entry points:
//! - [`Project`]: file-oriented operations rooted at a project directory,
//!   every path contained to the root before any I/O.
//! - [`ContentStore`] and [`PersistentContentStore`]: id-keyed content
//!   signing for message-level provenance, in memory and on disk.
//!
//! Verification outcomes are result values; only path escapes, invalid ids
//! and state I/O failures surface as [`EngineError`].

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod content;
mod error;
mod identity;
mod persistent;
mod project;

pub use content::{ContentStore, sign_content, verify_content};
pub use error::{EngineError, EngineResult};
pub use persistent::{ContentSignOptions, PersistentContentStore};
pub use project::{Project, SignOptions};
