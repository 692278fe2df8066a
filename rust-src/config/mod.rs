//! Configuration and settings for bird-growth.

mod credentials;
mod settings;

pub use credentials::{load_credentials, Credentials};
pub use settings::{
    get_bird_env_path,
    get_db_path,
    get_export_path,
    DEFAULT_TWEET_LIMIT,
    HISTORY_DAYS,
    RECENT_TWEETS,
};
