//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use crate::config::{get_db_path, get_export_path, DEFAULT_TWEET_LIMIT};
use crate::data::DEFAULT_BIRD_BIN;


/// bird-growth - track X/Twitter account growth with the bird CLI
#[derive(Parser)]
#[command(name = "bird-growth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database path [default: twitter_growth.db]
    #[arg(long, global = true, env = "BIRD_GROWTH_DB")]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}


#[derive(Subcommand)]
enum Commands {
    /// Create the growth database (skipped if it already exists)
    Init,

    /// Fetch account stats and recent tweets, save them, and export data.json
    Collect {
        /// Number of timeline items to fetch
        #[arg(short = 'n', long, env = "BIRD_GROWTH_LIMIT", default_value_t = DEFAULT_TWEET_LIMIT)]
        limit: usize,

        /// Export file path [default: data.json]
        #[arg(short, long, env = "BIRD_GROWTH_OUTPUT")]
        output: Option<PathBuf>,

        /// bird executable
        #[arg(long, env = "BIRD_BIN", default_value = DEFAULT_BIRD_BIN)]
        bird: String,
    },

    /// Regenerate data.json from the database without fetching
    Export {
        /// Export file path [default: data.json]
        #[arg(short, long, env = "BIRD_GROWTH_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Show what the database currently holds
    Status,
}


/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let db_path = cli.db.unwrap_or_else(get_db_path);

    match cli.command {
        Some(Commands::Init) => {
            commands::init::run(&db_path)?;
        }
        Some(Commands::Collect { limit, output, bird }) => {
            let output = output.unwrap_or_else(get_export_path);
            commands::collect::run(&db_path, &output, limit, &bird)?;
        }
        Some(Commands::Export { output }) => {
            let output = output.unwrap_or_else(get_export_path);
            commands::export::run(&db_path, &output)?;
        }
        Some(Commands::Status) => {
            commands::status::run(&db_path)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
