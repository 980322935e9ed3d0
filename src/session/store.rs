use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::thread;
use thiserror::Error;
use tracing::warn;

use crate::session::record::SessionRecord;

/// Errors from writing a session file. Never surfaced to views: the
/// caller logs them and keeps operating in memory.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to create session directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write session file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// File-per-key JSON store under a data directory.
pub struct SessionStore {
    dir: PathBuf,
    tx: Sender<(String, SessionRecord)>,
}

impl SessionStore {
    /// Open a store rooted at `dir` and spawn its writer thread.
    pub fn open(dir: PathBuf) -> Self {
        let (tx, rx) = mpsc::channel::<(String, SessionRecord)>();
        let writer_dir = dir.clone();

        thread::spawn(move || {
            while let Ok((key, record)) = rx.recv() {
                if let Err(err) = write_record(&writer_dir, &key, &record) {
                    warn!(key = %key, error = %err, "session write failed");
                }
            }
        });

        Self { dir, tx }
    }

    /// Default store location, `{data_dir}/quizdeck`.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quizdeck")
    }

    /// Read a session by key. Any failure degrades to `None`.
    pub fn load(&self, key: &str) -> Option<SessionRecord> {
        let path = record_path(&self.dir, key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(key = %key, error = %err, "session read failed");
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(key = %key, error = %err, "session deserialize failed");
                None
            }
        }
    }

    /// Queue a write on the background thread. Fire-and-forget: never
    /// blocks, never reports failure to the caller.
    pub fn save(&self, key: &str, record: SessionRecord) {
        let _ = self.tx.send((key.to_string(), record));
    }

    /// Write synchronously. Used on shutdown so the final state lands
    /// before the process exits.
    pub fn save_blocking(&self, key: &str, record: &SessionRecord) -> Result<(), PersistError> {
        write_record(&self.dir, key, record)
    }
}

fn record_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

fn write_record(dir: &Path, key: &str, record: &SessionRecord) -> Result<(), PersistError> {
    fs::create_dir_all(dir).map_err(|e| PersistError::CreateDir {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let json = serde_json::to_string_pretty(record)?;
    let path = record_path(dir, key);
    fs::write(&path, json).map_err(|e| PersistError::Write {
        path,
        source: e,
    })?;
    Ok(())
}
