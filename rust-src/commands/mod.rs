//! CLI command implementations.

pub mod collect;
pub mod export;
pub mod init;
pub mod status;
