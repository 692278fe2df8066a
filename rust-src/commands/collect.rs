//! Collect command - fetch from bird, save, and export.

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

use crate::config::{get_bird_env_path, load_credentials};
use crate::data::{BirdCli, TwitterSource};
use crate::models::today_key;
use crate::storage::{close_database, open_database, save_growth, save_tweets};

use super::export::report_export;


/// What a single collection run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    pub growth_saved: bool,
    pub tweets_saved: usize,
    pub exported: bool,
}


/// Run the collect command against the bird CLI.
pub fn run(db_path: &Path, output_path: &Path, limit: usize, bird_bin: &str) -> Result<()> {
    println!("Collecting Twitter data...");

    if !db_path.exists() {
        println!("\x1b[31mDatabase not found. Run 'bird-growth init' first!\x1b[0m");
        return Ok(());
    }

    let credentials = load_credentials(&get_bird_env_path())?;
    tracing::debug!(
        auth_token = credentials.auth_token.is_some(),
        ct0 = credentials.ct0.is_some(),
        "credentials loaded"
    );

    let source = BirdCli::new(bird_bin, credentials);
    if let Some(summary) = collect(&source, db_path, output_path, limit)? {
        tracing::debug!(
            growth = summary.growth_saved,
            tweets = summary.tweets_saved,
            exported = summary.exported,
            "collection finished"
        );
    }

    Ok(())
}


/// Fetch, save and export using any [`TwitterSource`].
///
/// A failed fetch is reported and skips only its own save step. Returns
/// `None` when the database does not exist.
pub fn collect(
    source: &dyn TwitterSource,
    db_path: &Path,
    output_path: &Path,
    limit: usize,
) -> Result<Option<CollectSummary>> {
    if !db_path.exists() {
        return Ok(None);
    }

    let conn = open_database(db_path)?;
    let summary = collect_into(source, &conn, output_path, limit)?;
    close_database(conn)?;

    println!("\x1b[32m+ Collection complete!\x1b[0m");
    Ok(Some(summary))
}


fn collect_into(
    source: &dyn TwitterSource,
    conn: &Connection,
    output_path: &Path,
    limit: usize,
) -> Result<CollectSummary> {
    let mut summary = CollectSummary::default();

    match source.account_info() {
        Ok(info) => {
            tracing::debug!(username = ?info.username, user_id = ?info.user_id, "account info");
            let snapshot = info.into_snapshot(today_key());
            save_growth(conn, &snapshot)?;
            summary.growth_saved = true;
            println!("\x1b[32m+ Saved growth data: {} followers\x1b[0m", snapshot.followers);
        }
        Err(e) => {
            tracing::warn!(error = %e, "account fetch failed, growth not saved");
            println!("\x1b[31mFailed to get account info: {e}\x1b[0m");
        }
    }

    match source.recent_tweets(limit) {
        Ok(tweets) if tweets.is_empty() => {
            println!("\x1b[33m! No tweets returned\x1b[0m");
        }
        Ok(tweets) => {
            summary.tweets_saved = save_tweets(conn, &tweets)?;
            println!("\x1b[32m+ Saved {} tweets\x1b[0m", summary.tweets_saved);
        }
        Err(e) => {
            tracing::warn!(error = %e, "timeline fetch failed, tweets not saved");
            println!("\x1b[31mFailed to get tweets: {e}\x1b[0m");
        }
    }

    summary.exported = report_export(conn, output_path)?;

    Ok(summary)
}
