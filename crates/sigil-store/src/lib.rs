//! Sigil Store - Content-addressed signature storage.
//!
//! Each attestation is a pair of files at paths derived from its key: a
//! pretty-printed JSON metadata document and the raw content blob that was
//! hashed. Two keyspaces share the layout:
//! - [`SignatureStore`]: keyed by project-relative file path, mirrored under
//!   `<state>/sigs/`.
//! - [`ContentSignatureStore`]: keyed by validated content id, flat under
//!   `<state>/content/`.
//!
//! Loading is corruption tolerant: a missing or unparseable metadata file is
//! a result value, never an error, and a corrupt record never aborts a
//! listing.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod content;
mod error;
pub mod layout;
mod store;

pub use content::ContentSignatureStore;
pub use error::{StoreError, StoreResult};
pub use store::{SignatureRecord, SignatureStore};
