//! Command definitions and handlers for the CLI surface.

use std::path::Path;

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::storage::JsonFileStorage;
use crate::store::TaskStore;
use crate::tui::run::run_board_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the board (the default when no subcommand is given).
    Board,

    /// Generate shell completion scripts.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Open the task store at the given path and run the board UI.
pub fn cmd_board(db_path: &Path) {
    let storage = JsonFileStorage::new(db_path);
    let store = match TaskStore::open(Box::new(storage)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open task board: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_board_tui(store) {
        eprintln!("UI error: {e}");
        std::process::exit(1);
    }
}

/// Print completion scripts for the requested shell to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;

    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
