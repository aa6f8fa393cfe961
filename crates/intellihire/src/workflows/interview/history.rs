use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::session::InterviewSession;

/// Durable home of the append-only session history.
///
/// `save` always receives the full history; implementations rewrite it as one blob.
pub trait SessionHistoryStore: Send + Sync {
    fn load(&self) -> Result<Vec<InterviewSession>, HistoryError>;
    fn save(&self, sessions: &[InterviewSession]) -> Result<(), HistoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("history at {path} is not valid session data: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode history: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("history store unavailable: {0}")]
    Unavailable(String),
}

/// JSON file store. A missing file reads as an empty history.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn staging_path(&self) -> PathBuf {
        let mut staging = self.path.clone().into_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }
}

impl SessionHistoryStore for JsonFileHistoryStore {
    fn load(&self) -> Result<Vec<InterviewSession>, HistoryError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(self.io_error(err)),
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&raw).map_err(|source| HistoryError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, sessions: &[InterviewSession]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let payload = serde_json::to_vec_pretty(sessions).map_err(HistoryError::Encode)?;

        let staging = self.staging_path();
        let written = fs::File::create(&staging).and_then(|mut file| {
            file.write_all(&payload)?;
            file.sync_all()
        });
        let result = written.and_then(|_| fs::rename(&staging, &self.path));

        if let Err(err) = result {
            // best effort; the staging file may never have been created
            let _ = fs::remove_file(&staging);
            return Err(self.io_error(err));
        }
        Ok(())
    }
}

/// Process-local store for tests and ephemeral servers.
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    sessions: Mutex<Vec<InterviewSession>>,
}

impl InMemoryHistoryStore {
    pub fn with_sessions(sessions: Vec<InterviewSession>) -> Self {
        Self {
            sessions: Mutex::new(sessions),
        }
    }

    pub fn snapshot(&self) -> Vec<InterviewSession> {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl SessionHistoryStore for InMemoryHistoryStore {
    fn load(&self) -> Result<Vec<InterviewSession>, HistoryError> {
        Ok(self.snapshot())
    }

    fn save(&self, sessions: &[InterviewSession]) -> Result<(), HistoryError> {
        let mut guard = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = sessions.to_vec();
        Ok(())
    }
}
