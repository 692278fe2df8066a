//! Export of the store for external consumers.

mod document;

pub use document::export_snapshot;
