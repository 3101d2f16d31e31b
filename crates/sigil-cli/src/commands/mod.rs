//! Subcommand implementations.

pub(crate) mod audit;
pub(crate) mod check;
pub(crate) mod engines;
pub(crate) mod init;
pub(crate) mod list;
pub(crate) mod sign;
pub(crate) mod status;
pub(crate) mod unsign;
pub(crate) mod verify;
