//! Application settings and path constants.

use std::path::PathBuf;


/// Default database file, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "twitter_growth.db";

/// Default export document, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "data.json";

/// Default number of timeline items requested from bird.
pub const DEFAULT_TWEET_LIMIT: usize = 10;

/// Days of growth history included in the export.
pub const HISTORY_DAYS: usize = 30;

/// Posts included in the export.
pub const RECENT_TWEETS: usize = 10;

/// Credential keys understood by bird.
pub const AUTH_TOKEN_KEY: &str = "AUTH_TOKEN";
pub const CT0_KEY: &str = "CT0";


/// Get the default database path.
pub fn get_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_FILE)
}


/// Get the default export path.
pub fn get_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_FILE)
}


/// Get the bird credentials file (`~/.config/bird/.env`).
pub fn get_bird_env_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("bird")
        .join(".env")
}
