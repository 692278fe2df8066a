//! Domain models for account growth and posts.

mod growth;
mod tweet;

pub use growth::{today_key, AccountInfo, GrowthSnapshot};
pub use tweet::{normalize_timestamp, Tweet};
