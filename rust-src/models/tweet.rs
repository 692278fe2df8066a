//! Post models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};


/// Classic Twitter API timestamp, e.g. `Wed Oct 10 20:19:24 +0000 2018`.
const TWITTER_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";


/// One row of the `tweets` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub created_at: String,
    pub text: String,
    pub likes: i64,
    pub retweets: i64,
    pub replies: i64,
    /// Set by SQLite on insert; not exported.
    #[serde(skip)]
    pub collected_at: Option<String>,
}


/// Normalize a post timestamp to RFC 3339 UTC.
///
/// Accepts RFC 3339 and the classic Twitter format. Anything else is
/// returned unchanged so it can still be stored.
pub fn normalize_timestamp(raw: &str) -> String {
    let raw = raw.trim();

    let parsed = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, TWITTER_TIMESTAMP_FORMAT));

    match parsed {
        Ok(dt) => dt.with_timezone(&Utc).to_rfc3339(),
        Err(_) => raw.to_string(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_rfc3339() {
        assert_eq!(
            normalize_timestamp("2024-01-15T12:30:00+02:00"),
            "2024-01-15T10:30:00+00:00"
        );
    }

    #[test]
    fn test_normalize_twitter_format() {
        assert_eq!(
            normalize_timestamp("Wed Oct 10 20:19:24 +0000 2018"),
            "2018-10-10T20:19:24+00:00"
        );
    }

    #[test]
    fn test_normalize_passthrough() {
        assert_eq!(normalize_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_export_shape() {
        let tweet = Tweet {
            id: "1".to_string(),
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            text: "hello".to_string(),
            likes: 1,
            retweets: 2,
            replies: 3,
            collected_at: Some("2024-01-02 00:00:00".to_string()),
        };
        let json = serde_json::to_value(&tweet).unwrap();
        assert!(json.get("collected_at").is_none());
        assert_eq!(json["likes"], 1);
        assert_eq!(json["retweets"], 2);
        assert_eq!(json["replies"], 3);
    }
}
