use colored::*;
use migration::Migrator;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies pending migrations one by one, printing a status line for each.
pub async fn run_all_migrations(url: &str) -> Result<(), String> {
    let db = sea_orm::Database::connect(url)
        .await
        .map_err(|e| format!("Database connection failed: {e}"))?;

    let applied: Vec<String> = Migrator::get_applied_migrations(&db)
        .await
        .map_err(|e| e.to_string())?
        .iter()
        .map(|m| m.name().to_string())
        .collect();

    let pending = Migrator::migrations()
        .into_iter()
        .filter(|m| !applied.iter().any(|name| name == m.name()))
        .count();

    if pending == 0 {
        println!("Nothing to migrate");
        return Ok(());
    }

    println!("Applying {pending} migration(s)...");
    let started = Instant::now();

    // Migrator::up runs them in order and records each in the seaql_migrations table.
    let label = format!("Migrating {}", url.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(label.len()));
    print!("{label}{dots} ");
    io::stdout().flush().ok();

    match Migrator::up(&db, None).await {
        Ok(()) => {
            println!("{} {}", "done".green(), format!("({:.2?})", started.elapsed()).dimmed());
            Ok(())
        }
        Err(err) => {
            println!("{}", "failed".red());
            Err(err.to_string())
        }
    }
}
