use chrono::Local;
use colored::Colorize;
use fern::Dispatch;
use log::{Level, LevelFilter};
use std::fs::{OpenOptions, create_dir_all};
use std::io;
use std::path::Path;

/// Logger for the command line tools: colored lines on stdout, plain lines
/// appended to `log_file_path`.
///
/// `log_level` accepts a bare level (`debug`) or an env-filter style
/// directive (`api=debug`), in which case the level after `=` is used.
pub fn init_logger(log_level: &str, log_file_path: &str) {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_all(parent).ok();
        }
    }

    let stdout = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                Local::now().format("%H:%M:%S"),
                colored_level(record.level()),
                message
            ))
        })
        .chain(io::stdout());

    let mut dispatch = Dispatch::new().level(parse_level(log_level)).chain(stdout);

    match OpenOptions::new().create(true).append(true).open(log_file_path) {
        Ok(file) => {
            let file = Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{}][{}][{}] {}",
                        Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        record.target(),
                        message
                    ))
                })
                .chain(file);
            dispatch = dispatch.chain(file);
        }
        Err(err) => eprintln!("Cannot open log file {log_file_path}: {err}"),
    }

    if let Err(err) = dispatch.apply() {
        eprintln!("Logger already initialised: {err}");
    }
}

fn colored_level(level: Level) -> colored::ColoredString {
    match level {
        Level::Error => "ERROR".red(),
        Level::Warn => "WARN".yellow(),
        Level::Info => "INFO".green(),
        Level::Debug => "DEBUG".cyan(),
        Level::Trace => "TRACE".normal(),
    }
}

fn parse_level(level: &str) -> LevelFilter {
    let level = level.rsplit('=').next().unwrap_or(level);
    match level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        "off" => LevelFilter::Off,
        _ => LevelFilter::Info,
    }
}
