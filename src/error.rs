//! Error types for storage and store operations.
//!
//! Read failures are not represented here: loading degrades to an empty
//! task list (see `storage`), so only writes and validation can fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to persist the task list.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying file write failed (permissions, disk full, ...).
    #[error("could not write task file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The task list could not be encoded as JSON.
    #[error("could not encode tasks as JSON: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failure to mutate the task store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A task title was empty after trimming whitespace.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// Persisting the updated list failed; the in-memory list was rolled back.
    #[error(transparent)]
    Storage(#[from] StorageError),
}
