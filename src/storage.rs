//! Persistent storage for the task list.
//!
//! The board keeps its state in a single JSON file holding the full task
//! list. Writes always replace the whole file; there are no partial
//! updates and no schema versioning. The `Storage` trait is the seam that
//! lets the store run against an alternate backend (tests use an
//! in-memory one).

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::task::Task;

/// Backend that holds the serialized task list.
///
/// Reads degrade to an empty list rather than failing: a missing or
/// corrupt file behaves like a fresh board. Writes surface their errors
/// so callers can abort the mutation that triggered them.
pub trait Storage {
    /// Read the persisted task list, or an empty list if none is readable.
    fn load(&self) -> Vec<Task>;

    /// Persist the full task list, replacing any prior snapshot.
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// File-backed storage: one pretty-printed JSON array per board.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }
        let mut buf = String::new();
        match File::open(&self.path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(tasks) => tasks,
                Err(e) => {
                    eprintln!("Error parsing task file, starting fresh: {e}");
                    Vec::new()
                }
            },
            Err(e) => {
                eprintln!("Error reading task file, starting fresh: {e}");
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let data = serde_json::to_string_pretty(tasks)?;
        // Atomic-ish write via temp + rename.
        let tmp = self.path.with_extension("json.tmp");
        let write = || -> std::io::Result<()> {
            let mut f = File::create(&tmp)?;
            f.write_all(data.as_bytes())?;
            f.flush()?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        };
        write().map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
