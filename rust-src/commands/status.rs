//! Status command - summarize what the database holds.

use std::path::Path;

use anyhow::Result;

use crate::storage::{
    close_database, get_database_stats, get_latest_growth, get_recent_tweets, open_database,
};


/// Run the status command.
pub fn run(db_path: &Path) -> Result<()> {
    if !db_path.exists() {
        println!("\x1b[33mNo database found at {}\x1b[0m", db_path.display());
        return Ok(());
    }

    let conn = open_database(db_path)?;
    let stats = get_database_stats(&conn)?;
    let latest = get_latest_growth(&conn)?;
    let newest_tweet = get_recent_tweets(&conn, 1)?.into_iter().next();
    close_database(conn)?;

    println!("\n{}", "=".repeat(40));
    println!("{:^40}", "Growth Database");
    println!("{}\n", "=".repeat(40));

    println!("  Days Tracked:   {:>10}", stats.total_days);
    println!("  Tweets Stored:  {:>10}", stats.total_tweets);

    if let (Some(oldest), Some(newest)) = (&stats.oldest_date, &stats.newest_date) {
        println!("  Date Range:     {} to {}", oldest, newest);
    }

    if let Some(latest) = latest {
        println!("\nLATEST ({})", latest.date);
        println!("{}", "-".repeat(40));
        println!("  Followers:      {:>10}", latest.followers);
        println!("  Following:      {:>10}", latest.following);
        println!("  Tweets:         {:>10}", latest.tweets_count);
        if let Some(recorded) = &latest.created_at {
            println!("  Recorded:       {}", recorded);
        }
    }

    if let Some(tweet) = newest_tweet {
        println!("\nNEWEST TWEET ({})", tweet.id);
        println!("{}", "-".repeat(40));
        println!("  Posted:         {}", tweet.created_at);
        println!("  Likes:          {:>10}", tweet.likes);
        println!("  Retweets:       {:>10}", tweet.retweets);
        println!("  Replies:        {:>10}", tweet.replies);
        if let Some(collected) = &tweet.collected_at {
            println!("  Collected:      {}", collected);
        }
    }

    println!("\nDatabase: {}", db_path.display());

    Ok(())
}
