//! Data access layer for the bird CLI.

mod bird;
mod bird_parser;
mod error;

pub use bird::{BirdCli, DEFAULT_BIRD_BIN};
pub use error::FetchError;

use crate::models::{AccountInfo, Tweet};


/// Source of account counters and recent posts.
pub trait TwitterSource {
    /// Counters for the signed-in account.
    fn account_info(&self) -> Result<AccountInfo, FetchError>;

    /// Up to `limit` most recent timeline posts.
    fn recent_tweets(&self, limit: usize) -> Result<Vec<Tweet>, FetchError>;
}
