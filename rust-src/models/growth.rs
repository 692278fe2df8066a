//! Daily account growth models.

use chrono::Local;
use serde::{Deserialize, Serialize};


/// Account counters reported by bird for the signed-in user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInfo {
    pub username: Option<String>,
    pub user_id: Option<String>,
    pub followers: i64,
    pub following: i64,
    pub tweets_count: i64,
}


impl AccountInfo {
    /// Turn the counters into a snapshot for the given date.
    pub fn into_snapshot(self, date: impl Into<String>) -> GrowthSnapshot {
        GrowthSnapshot::new(date, self.followers, self.following, self.tweets_count)
    }
}


/// One row of the `growth` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthSnapshot {
    pub date: String,
    pub followers: i64,
    pub following: i64,
    pub tweets_count: i64,
    /// Set by SQLite on insert; not exported.
    #[serde(skip)]
    pub created_at: Option<String>,
}


impl GrowthSnapshot {
    pub fn new(date: impl Into<String>, followers: i64, following: i64, tweets_count: i64) -> Self {
        Self {
            date: date.into(),
            followers,
            following,
            tweets_count,
            created_at: None,
        }
    }
}


/// Today's local date in YYYY-MM-DD format, the key of the `growth` table.
pub fn today_key() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
