//! Event repository contract and flat-file implementation.
//!
//! # Responsibility
//! - Provide stable save/load/list APIs over the events directory.
//! - Keep file naming and markdown codec details inside the storage
//!   boundary.
//!
//! # Invariants
//! - One markdown file per event, named by `Event::file_name()`.
//! - Read paths reject undecodable files instead of masking them.
//! - Listing order is chronological (date, then title) regardless of
//!   directory iteration order.

use crate::model::event::{Event, EventDecodeError, EventValidationError};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for event persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EventValidationError),
    Decode {
        path: PathBuf,
        source: EventDecodeError,
    },
    Io {
        path: PathBuf,
        source: io::Error,
    },
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Decode { path, source } => {
                write!(f, "invalid event file `{}`: {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "io error at `{}`: {source}", path.display())
            }
            Self::NotFound(file_name) => write!(f, "event not found: {file_name}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::NotFound(_) => None,
        }
    }
}

impl From<EventValidationError> for RepoError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for journaled events.
pub trait EventRepository {
    fn save_event(&self, event: &Event) -> RepoResult<PathBuf>;
    fn load_event(&self, file_name: &str) -> RepoResult<Event>;
    fn list_events(&self) -> RepoResult<Vec<Event>>;
    fn create_media_dir(&self, event: &Event) -> RepoResult<PathBuf>;
}

/// Flat-file event repository rooted at one events directory.
pub struct FsEventRepository {
    events_dir: PathBuf,
}

impl FsEventRepository {
    pub fn new(events_dir: impl Into<PathBuf>) -> Self {
        Self {
            events_dir: events_dir.into(),
        }
    }

    pub fn events_dir(&self) -> &Path {
        &self.events_dir
    }

    fn io_error(&self, path: PathBuf, source: io::Error) -> RepoError {
        RepoError::Io { path, source }
    }
}

impl EventRepository for FsEventRepository {
    fn save_event(&self, event: &Event) -> RepoResult<PathBuf> {
        let started_at = Instant::now();
        event.validate()?;

        if let Err(source) = fs::create_dir_all(&self.events_dir) {
            error!(
                "event=event_save module=repo status=error dir={} error={}",
                self.events_dir.display(),
                source
            );
            return Err(self.io_error(self.events_dir.clone(), source));
        }

        let path = self.events_dir.join(event.file_name());
        if let Err(source) = fs::write(&path, event.to_markdown()) {
            error!(
                "event=event_save module=repo status=error file={} error={}",
                path.display(),
                source
            );
            return Err(self.io_error(path, source));
        }

        info!(
            "event=event_save module=repo status=ok file={} duration_ms={}",
            path.display(),
            started_at.elapsed().as_millis()
        );
        Ok(path)
    }

    fn load_event(&self, file_name: &str) -> RepoResult<Event> {
        let path = self.events_dir.join(file_name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(RepoError::NotFound(file_name.to_string()));
            }
            Err(source) => return Err(self.io_error(path, source)),
        };

        Event::from_markdown(&content).map_err(|source| RepoError::Decode { path, source })
    }

    fn list_events(&self) -> RepoResult<Vec<Event>> {
        // An absent directory is an empty journal, not an error.
        if !self.events_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.events_dir)
            .map_err(|source| self.io_error(self.events_dir.clone(), source))?;

        let mut events = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| self.io_error(self.events_dir.clone(), source))?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
                continue;
            }
            let content =
                fs::read_to_string(&path).map_err(|source| self.io_error(path.clone(), source))?;
            let event = Event::from_markdown(&content)
                .map_err(|source| RepoError::Decode { path, source })?;
            events.push(event);
        }

        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.title.cmp(&b.title)));

        info!(
            "event=events_list module=repo status=ok count={}",
            events.len()
        );
        Ok(events)
    }

    fn create_media_dir(&self, event: &Event) -> RepoResult<PathBuf> {
        let file_name = event.file_name();
        let media_dir = self.events_dir.join(file_name.trim_end_matches(".md"));
        fs::create_dir_all(&media_dir).map_err(|source| self.io_error(media_dir.clone(), source))?;
        Ok(media_dir)
    }
}
