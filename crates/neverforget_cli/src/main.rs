//! CLI smoke entry point.
//!
//! Opens the configured data directory, loads the three stores once and
//! prints their sizes. Pass `--memory` to run against a throwaway medium.

use clap::Parser;
use log::info;
use neverforget_core::db::{open_db, open_db_in_memory};
use neverforget_core::{
    core_version, init_logging, CoreConfig, KeyValueStorage, SqliteStorage, Stores,
};
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "neverforget")]
#[command(about = "Load the Never Forget stores and report their sizes")]
#[command(version)]
struct Cli {
    /// Use a throwaway in-memory database instead of the data directory
    #[arg(long)]
    memory: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.memory) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("neverforget: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(in_memory: bool) -> Result<(), Box<dyn Error>> {
    let fallback_dir = std::env::current_dir()?.join(".never-forget");
    let config = CoreConfig::from_env(&fallback_dir);

    let log_dir = config.log_dir();
    init_logging(&config.log_level, &log_dir.to_string_lossy())?;
    info!("event=cli_start module=cli status=ok in_memory={in_memory}");

    let conn = if in_memory {
        open_db_in_memory()?
    } else {
        open_db(config.db_path())?
    };
    let storage = SqliteStorage::try_new(&conn)?;

    println!("neverforget_core version={}", core_version());
    if !in_memory {
        println!("data file={}", config.db_path().display());
    }
    report(&Stores::load(storage));
    Ok(())
}

fn report<S: KeyValueStorage>(stores: &Stores<S>) {
    println!("categories={}", stores.categories.len());
    for category in stores.categories.categories() {
        let notes = stores.notes.get_notes_by_category(&category.id).len();
        println!("  {} ({}) notes={notes}", category.id, category.color);
    }
    println!("notes={}", stores.notes.len());
    println!("reminders={}", stores.reminders.len());
}
