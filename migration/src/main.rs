use std::{env, fs, path::Path, process};

mod runner;

enum Command {
    /// Delete the database file.
    Clean,
    /// Delete the database file, then apply every migration.
    Fresh,
    Up,
}

impl Command {
    fn from_args() -> Self {
        match env::args().nth(1).as_deref() {
            Some("clean") => Command::Clean,
            Some("fresh") => Command::Fresh,
            _ => Command::Up,
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_path = env::var("DATABASE_PATH").unwrap_or_else(|_| "data/hotel.db".into());
    let url = format!("sqlite://{db_path}?mode=rwc");

    let result = match Command::from_args() {
        Command::Clean => remove_db_file(&db_path),
        Command::Fresh => match remove_db_file(&db_path).and_then(|_| create_db_dir(&db_path)) {
            Ok(()) => runner::run_all_migrations(&url).await,
            Err(err) => Err(err),
        },
        Command::Up => match create_db_dir(&db_path) {
            Ok(()) => runner::run_all_migrations(&url).await,
            Err(err) => Err(err),
        },
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn remove_db_file(path: &str) -> Result<(), String> {
    let db_path = Path::new(path);
    if !db_path.exists() {
        println!("No database at {}", db_path.display());
        return Ok(());
    }

    fs::remove_file(db_path).map_err(|e| format!("Failed to delete {}: {e}", db_path.display()))?;
    println!("Deleted {}", db_path.display());
    Ok(())
}

fn create_db_dir(path: &str) -> Result<(), String> {
    match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {e}", parent.display())),
        _ => Ok(()),
    }
}
