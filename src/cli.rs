use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// Minimal terminal kanban board.
/// Storage defaults to ~/.taskboard/tasks.json or a path passed via --db.
#[derive(Parser)]
#[command(name = "tb", version, about = "Terminal kanban task board")]
pub struct Cli {
    /// Path to the JSON task file.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
