//! Storage layer for growth snapshots and posts.

mod database;

pub use database::{
    close_database,
    get_database_stats,
    get_growth_history,
    get_latest_growth,
    get_recent_tweets,
    init_database,
    open_database,
    save_growth,
    save_tweets,
    DatabaseStats,
    InitOutcome,
};
