//! # tb - Terminal Kanban Board
//!
//! A minimal kanban board for the terminal: three status columns
//! (To Do / Doing / Done), a local JSON task file, and popup dialogs for
//! viewing and adding tasks.
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the board
//! tb
//!
//! # Use a specific task file
//! tb --db ./tasks.json
//! ```
//!
//! On the board: arrow keys move between columns and cards, `Enter` opens
//! the selected task's details, `a` opens the new-task dialog, `q` quits.
//!
//! Data is stored in `~/.taskboard/tasks.json` by default. The first
//! launch seeds the file with a small example board so the columns are
//! never empty.

use std::path::PathBuf;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod seed;
pub mod storage;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}

use cli::Cli;
use cmd::{cmd_board, cmd_completions, Commands};

fn main() {
    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        cmd_completions(shell);
        return;
    }

    let db_path = cli.db.unwrap_or_else(|| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
        let board_dir = PathBuf::from(home).join(".taskboard");
        if let Err(e) = std::fs::create_dir_all(&board_dir) {
            eprintln!("Failed to create board directory {}: {}", board_dir.display(), e);
            std::process::exit(1);
        }
        board_dir.join("tasks.json")
    });

    cmd_board(&db_path);
}
