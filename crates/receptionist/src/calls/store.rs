use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, warn};

use super::domain::CallLog;

/// Append-only storage for call logs.
pub trait CallLogStore: Send + Sync {
    fn append(&self, log: CallLog) -> Result<(), CallLogError>;
    fn list(&self) -> Result<Vec<CallLog>, CallLogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CallLogError {
    #[error("call log file {path} could not be accessed: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("call log file {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("call log store unavailable: {0}")]
    Unavailable(String),
}

fn lock_logs(logs: &Mutex<Vec<CallLog>>) -> Result<MutexGuard<'_, Vec<CallLog>>, CallLogError> {
    logs.lock()
        .map_err(|_| CallLogError::Unavailable("call log lock poisoned".to_string()))
}

/// Process-local store; logs disappear on restart.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCallLogStore {
    logs: Arc<Mutex<Vec<CallLog>>>,
}

impl CallLogStore for InMemoryCallLogStore {
    fn append(&self, log: CallLog) -> Result<(), CallLogError> {
        lock_logs(&self.logs)?.push(log);
        Ok(())
    }

    fn list(&self) -> Result<Vec<CallLog>, CallLogError> {
        Ok(lock_logs(&self.logs)?.clone())
    }
}

/// Keeps logs in memory and mirrors the full list to a pretty-printed JSON file.
///
/// A failed file write is logged and does not reject the append; the in-memory
/// copy remains authoritative for the life of the process.
#[derive(Debug, Clone)]
pub struct JsonFileCallLogStore {
    path: PathBuf,
    logs: Arc<Mutex<Vec<CallLog>>>,
}

impl JsonFileCallLogStore {
    /// Open the store, loading any logs already written to `path`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CallLogError> {
        let path = path.into();
        let logs = if path.exists() {
            load(&path)?
        } else {
            Vec::new()
        };
        debug!(path = %path.display(), count = logs.len(), "call log file opened");

        Ok(Self {
            path,
            logs: Arc::new(Mutex::new(logs)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, logs: &[CallLog]) -> Result<(), CallLogError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| CallLogError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let rendered = serde_json::to_string_pretty(logs).map_err(|source| CallLogError::Format {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, rendered).map_err(|source| CallLogError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

fn load(path: &Path) -> Result<Vec<CallLog>, CallLogError> {
    let raw = fs::read_to_string(path).map_err(|source| CallLogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(&raw).map_err(|source| CallLogError::Format {
        path: path.to_path_buf(),
        source,
    })
}

impl CallLogStore for JsonFileCallLogStore {
    fn append(&self, log: CallLog) -> Result<(), CallLogError> {
        let mut logs = lock_logs(&self.logs)?;
        logs.push(log);

        if let Err(err) = self.persist(&logs) {
            warn!(error = %err, "call log kept in memory only");
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<CallLog>, CallLogError> {
        Ok(lock_logs(&self.logs)?.clone())
    }
}
