//! Init command - create the growth database.

use std::path::Path;

use anyhow::Result;

use crate::storage::{init_database, InitOutcome};


/// Run the init command.
pub fn run(db_path: &Path) -> Result<InitOutcome> {
    let outcome = init_database(db_path)?;

    match outcome {
        InitOutcome::Skipped => {
            println!(
                "\x1b[33m! Database {} already exists. Skipping creation.\x1b[0m",
                db_path.display()
            );
        }
        InitOutcome::Created => {
            println!("\x1b[32m+ Database initialized: {}\x1b[0m", db_path.display());
            println!("Tables created: growth, tweets");
        }
    }

    Ok(outcome)
}
