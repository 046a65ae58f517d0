//! Field types shared across the board.
//!
//! This module defines the status enumeration that partitions tasks into
//! the three board columns, plus its display and wire-format helpers.

use serde::{Deserialize, Serialize};

/// Board column a task belongs to.
///
/// Serialized as `"todo"`, `"doing"` or `"done"` in the task file; that
/// format is fixed and has no version field, so changes are breaking.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Doing,
    Done,
}

impl Status {
    /// All statuses in board column order, left to right.
    pub const ALL: [Status; 3] = [Status::Todo, Status::Doing, Status::Done];

    /// Column index for this status (0 = To Do, 1 = Doing, 2 = Done).
    pub fn column_index(self) -> usize {
        match self {
            Status::Todo => 0,
            Status::Doing => 1,
            Status::Done => 2,
        }
    }
}

/// Format a status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::Todo => "To Do",
        Status::Doing => "Doing",
        Status::Done => "Done",
    }
}
