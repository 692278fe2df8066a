//! SQLite database operations for growth snapshots and posts.

use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::models::{GrowthSnapshot, Tweet};


/// Result of [`init_database`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Created,
    Skipped,
}


/// Row counts and date range of the store.
#[derive(Debug, Clone, Default)]
pub struct DatabaseStats {
    pub total_days: i64,
    pub total_tweets: i64,
    pub oldest_date: Option<String>,
    pub newest_date: Option<String>,
}


const SCHEMA: &str = "
    CREATE TABLE growth (
        date TEXT PRIMARY KEY,
        followers INTEGER NOT NULL,
        following INTEGER NOT NULL,
        tweets_count INTEGER NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE tweets (
        id TEXT PRIMARY KEY,
        created_at TEXT NOT NULL,
        text TEXT NOT NULL,
        likes INTEGER DEFAULT 0,
        retweets INTEGER DEFAULT 0,
        replies INTEGER DEFAULT 0,
        collected_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    );

    CREATE INDEX idx_growth_date ON growth(date DESC);
    CREATE INDEX idx_tweets_created ON tweets(created_at DESC);
";


/// Create the database with its tables and indexes.
///
/// Does nothing when a file already exists at `db_path`.
pub fn init_database(db_path: &Path) -> Result<InitOutcome> {
    if db_path.exists() {
        return Ok(InitOutcome::Skipped);
    }

    // Create parent directory if needed
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let mut conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))?;

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA)
        .context("Failed to create schema")?;
    tx.commit()?;

    close_database(conn)?;
    tracing::debug!(path = %db_path.display(), "schema created");

    Ok(InitOutcome::Created)
}


/// Open an existing database. Fails if the file is missing.
pub fn open_database(db_path: &Path) -> Result<Connection> {
    if !db_path.exists() {
        anyhow::bail!("Database not found: {}", db_path.display());
    }

    Connection::open(db_path)
        .with_context(|| format!("Failed to open database: {}", db_path.display()))
}


/// Close a connection, surfacing any error SQLite reports on close.
pub fn close_database(conn: Connection) -> Result<()> {
    conn.close()
        .map_err(|(_, e)| e)
        .context("Failed to close database")
}


/// Insert or replace the snapshot for its date.
pub fn save_growth(conn: &Connection, snapshot: &GrowthSnapshot) -> Result<()> {
    conn.execute(
        "INSERT OR REPLACE INTO growth (date, followers, following, tweets_count)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            snapshot.date,
            snapshot.followers,
            snapshot.following,
            snapshot.tweets_count,
        ],
    )?;

    Ok(())
}


/// Insert or replace each post by id.
///
/// Returns the number of posts written.
pub fn save_tweets(conn: &Connection, tweets: &[Tweet]) -> Result<usize> {
    let mut stmt = conn.prepare(
        "INSERT OR REPLACE INTO tweets (id, created_at, text, likes, retweets, replies)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    for tweet in tweets {
        stmt.execute(params![
            tweet.id,
            tweet.created_at,
            tweet.text,
            tweet.likes,
            tweet.retweets,
            tweet.replies,
        ])?;
    }

    Ok(tweets.len())
}


fn growth_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<GrowthSnapshot> {
    Ok(GrowthSnapshot {
        date: row.get(0)?,
        followers: row.get(1)?,
        following: row.get(2)?,
        tweets_count: row.get(3)?,
        created_at: row.get(4)?,
    })
}


/// Most recent snapshot by date.
pub fn get_latest_growth(conn: &Connection) -> Result<Option<GrowthSnapshot>> {
    let snapshot = conn
        .query_row(
            "SELECT date, followers, following, tweets_count, created_at
             FROM growth ORDER BY date DESC LIMIT 1",
            [],
            growth_from_row,
        )
        .optional()?;

    Ok(snapshot)
}


/// Last `days` snapshots, oldest first.
pub fn get_growth_history(conn: &Connection, days: usize) -> Result<Vec<GrowthSnapshot>> {
    let mut stmt = conn.prepare(
        "SELECT date, followers, following, tweets_count, created_at
         FROM growth ORDER BY date DESC LIMIT ?1",
    )?;

    let mut history = stmt
        .query_map(params![days as i64], growth_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    // Oldest first for charting
    history.reverse();

    Ok(history)
}


/// Last `limit` posts, newest first.
pub fn get_recent_tweets(conn: &Connection, limit: usize) -> Result<Vec<Tweet>> {
    let mut stmt = conn.prepare(
        "SELECT id, created_at, text, likes, retweets, replies, collected_at
         FROM tweets ORDER BY created_at DESC LIMIT ?1",
    )?;

    let tweets = stmt
        .query_map(params![limit as i64], |row| {
            Ok(Tweet {
                id: row.get(0)?,
                created_at: row.get(1)?,
                text: row.get(2)?,
                likes: row.get(3)?,
                retweets: row.get(4)?,
                replies: row.get(5)?,
                collected_at: row.get(6)?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(tweets)
}


/// Get database statistics.
pub fn get_database_stats(conn: &Connection) -> Result<DatabaseStats> {
    let (total_days, oldest_date, newest_date): (i64, Option<String>, Option<String>) = conn
        .query_row(
            "SELECT COUNT(*), MIN(date), MAX(date) FROM growth",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

    let total_tweets: i64 = conn.query_row("SELECT COUNT(*) FROM tweets", [], |row| row.get(0))?;

    Ok(DatabaseStats {
        total_days,
        total_tweets,
        oldest_date,
        newest_date,
    })
}
