//! JSON snapshot consumed by the dashboard front-end.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};

use crate::config::{HISTORY_DAYS, RECENT_TWEETS};
use crate::models::{GrowthSnapshot, Tweet};
use crate::storage::{get_growth_history, get_latest_growth, get_recent_tweets};


/// Denormalized view of the store, regenerated on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportDocument {
    pub current: GrowthSnapshot,
    pub history: Vec<GrowthSnapshot>,
    pub recent_tweets: Vec<Tweet>,
    pub updated_at: String,
}


/// Build the export document, or `None` if no growth rows exist yet.
pub fn build_export(conn: &Connection) -> Result<Option<ExportDocument>> {
    let Some(current) = get_latest_growth(conn)? else {
        return Ok(None);
    };

    let history = get_growth_history(conn, HISTORY_DAYS)?;
    let recent_tweets = get_recent_tweets(conn, RECENT_TWEETS)?;

    Ok(Some(ExportDocument {
        current,
        history,
        recent_tweets,
        updated_at: Local::now().to_rfc3339(),
    }))
}


/// Write the document as pretty JSON, replacing any previous file.
pub fn write_export(document: &ExportDocument, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(document)?;
    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write export to {}", output_path.display()))?;

    Ok(())
}


/// Build and write the export. Returns the document if one was written.
pub fn export_snapshot(conn: &Connection, output_path: &Path) -> Result<Option<ExportDocument>> {
    let Some(document) = build_export(conn)? else {
        tracing::warn!("growth table is empty, export skipped");
        return Ok(None);
    };

    write_export(&document, output_path)?;
    tracing::debug!(
        path = %output_path.display(),
        history = document.history.len(),
        tweets = document.recent_tweets.len(),
        "export written"
    );

    Ok(Some(document))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{init_database, open_database, save_growth, save_tweets};
    use tempfile::TempDir;

    fn setup() -> (TempDir, Connection) {
        let tmp_dir = TempDir::new().unwrap();
        let db_path = tmp_dir.path().join("test.db");
        init_database(&db_path).unwrap();
        let conn = open_database(&db_path).unwrap();
        (tmp_dir, conn)
    }

    fn read_document(path: &Path) -> serde_json::Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_empty_store_writes_nothing() {
        let (tmp_dir, conn) = setup();
        let output = tmp_dir.path().join("data.json");

        assert!(export_snapshot(&conn, &output).unwrap().is_none());
        assert!(!output.exists());
    }

    #[test]
    fn test_single_snapshot_export() {
        let (tmp_dir, conn) = setup();
        let output = tmp_dir.path().join("data.json");
        let snapshot = GrowthSnapshot::new("2024-01-01", 100, 10, 5);
        save_growth(&conn, &snapshot).unwrap();

        export_snapshot(&conn, &output).unwrap().unwrap();

        let json = read_document(&output);
        let expected = serde_json::json!({
            "date": "2024-01-01",
            "followers": 100,
            "following": 10,
            "tweets_count": 5
        });
        assert_eq!(json["current"], expected);
        assert_eq!(json["history"], serde_json::json!([expected]));
        assert_eq!(json["recent_tweets"], serde_json::json!([]));
        assert!(json["updated_at"].is_string());
    }

    #[test]
    fn test_history_order_independent_of_insertion() {
        let (tmp_dir, conn) = setup();
        let output = tmp_dir.path().join("data.json");

        for date in ["2024-01-02", "2024-01-03", "2024-01-01"] {
            save_growth(&conn, &GrowthSnapshot::new(date, 1, 1, 1)).unwrap();
        }

        let document = export_snapshot(&conn, &output).unwrap().unwrap();
        let dates: Vec<&str> = document.history.iter().map(|s| s.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(document.current.date, "2024-01-03");

        let json = read_document(&output);
        assert_eq!(json["history"][0]["date"], "2024-01-01");
        assert_eq!(json["history"][2]["date"], "2024-01-03");
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let (tmp_dir, conn) = setup();
        let output = tmp_dir.path().join("data.json");
        std::fs::write(&output, "stale content that is longer than nothing").unwrap();

        save_growth(&conn, &GrowthSnapshot::new("2024-01-01", 1, 1, 1)).unwrap();
        save_tweets(
            &conn,
            &[Tweet {
                id: "42".to_string(),
                created_at: "2024-01-01T09:00:00+00:00".to_string(),
                text: "hello".to_string(),
                likes: 5,
                retweets: 1,
                replies: 0,
                collected_at: None,
            }],
        )
        .unwrap();
        export_snapshot(&conn, &output).unwrap();

        let json = read_document(&output);
        assert_eq!(json["recent_tweets"][0]["id"], "42");
        assert_eq!(json["recent_tweets"][0]["likes"], 5);
        assert!(json["recent_tweets"][0].get("collected_at").is_none());
    }
}
