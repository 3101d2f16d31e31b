//! Sigil Core - Leaf types and hashing for the integrity attestation system.
//!
//! This crate provides:
//! - SHA-256 content hashing and the `algorithm:hex` hash string codec
//! - Signature and verification result types with their external JSON encoding
//! - Content id validation for id-keyed storage
//! - Millisecond-precision UTC timestamps
//!
//! A "signature" here is a recorded hash plus a claimed identity, not an
//! asymmetric digital signature. Everything in this crate is pure: no I/O,
//! no clocks other than [`time::now_timestamp`].

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod hash;
mod id;
mod signature;
pub mod time;

pub use hash::{DEFAULT_ALGORITHM, format_hash, parse_hash, sha256_hex};
pub use id::{ContentIdError, validate_content_id};
pub use signature::{
    CheckResult, CheckStatus, ContentSignature, ContentVerifyResult, Signature, VerifyResult,
};
