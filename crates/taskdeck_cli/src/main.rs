//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskdeck_core` linkage.
//! - Load an optional config and print the resulting seed state summary.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use taskdeck_core::{categories_with_counts, todo_stats, CoreConfig};

#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "TaskDeck core smoke probe")]
struct Cli {
    /// TOML config overriding logging and the seed state.
    #[arg(long, short)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => match CoreConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("taskdeck: {err}");
                return ExitCode::from(2);
            }
        },
        None => CoreConfig::default(),
    };
    if let Err(err) = config.init_logging() {
        eprintln!("taskdeck: {err}");
        return ExitCode::FAILURE;
    }

    let store = config.build_store();
    let state = store.state();
    let stats = todo_stats(state);

    println!("taskdeck_core ping={}", taskdeck_core::ping());
    println!("taskdeck_core version={}", taskdeck_core::core_version());
    println!("profile username={}", state.profile.username);
    for row in categories_with_counts(state) {
        println!(
            "category id={} name={} color={} todos={}",
            row.category.id, row.category.name, row.category.color, row.todo_count
        );
    }
    println!(
        "todos total={} completed={} pending={}",
        stats.total, stats.completed, stats.pending
    );
    ExitCode::SUCCESS
}
