//! Task data structure.
//!
//! This module defines the `Task` struct, the single entity the board
//! manages: an identifier, a title, a free-form description, and the
//! status column it lives in.

use serde::{Deserialize, Serialize};

use crate::fields::Status;

/// A unit of work displayed as a card in one of the board columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: Status,
}
