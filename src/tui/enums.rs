//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
///
/// The two modal states overlay the board; closing them always returns
/// to `Board`. No other transitions exist.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    Board,
    TaskDetail,
    AddTask,
}
