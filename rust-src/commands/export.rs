//! Export command - regenerate data.json from the database.

use std::path::Path;

use anyhow::Result;
use rusqlite::Connection;

use crate::export::export_snapshot;
use crate::storage::{close_database, open_database};


/// Run the export command.
pub fn run(db_path: &Path, output_path: &Path) -> Result<()> {
    if !db_path.exists() {
        println!("\x1b[31mDatabase not found. Run 'bird-growth init' first!\x1b[0m");
        return Ok(());
    }

    let conn = open_database(db_path)?;
    report_export(&conn, output_path)?;
    close_database(conn)?;

    Ok(())
}


/// Export and print the outcome. Returns whether a file was written.
pub(crate) fn report_export(conn: &Connection, output_path: &Path) -> Result<bool> {
    match export_snapshot(conn, output_path)? {
        Some(document) => {
            println!(
                "\x1b[32m+ Generated {} ({} days of history)\x1b[0m",
                output_path.display(),
                document.history.len()
            );
            Ok(true)
        }
        None => {
            println!("\x1b[33m! No data in database yet\x1b[0m");
            Ok(false)
        }
    }
}
