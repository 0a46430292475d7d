//! Timeline use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for journaling and inspecting events.
//! - Project the journal into a validated `TimelineDataset`.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Assembled datasets satisfy the same graph invariants as declared ones.

use crate::dataset::{DatasetError, TimelineDataset};
use crate::model::event::{slugify, Event};
use crate::model::node::{Link, Node};
use crate::repo::event_repo::{EventRepository, RepoError, RepoResult};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Error raised while projecting the journal into a dataset.
#[derive(Debug)]
pub enum AssemblyError {
    Repo(RepoError),
    Dataset(DatasetError),
}

impl Display for AssemblyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::Dataset(err) => write!(f, "{err}"),
        }
    }
}

impl Error for AssemblyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::Dataset(err) => Some(err),
        }
    }
}

impl From<RepoError> for AssemblyError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<DatasetError> for AssemblyError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

/// Request model for journaling a new event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEventRequest {
    pub title: String,
    /// Calendar date of the event; past dates are as valid as future ones.
    pub date: NaiveDate,
    pub kind: String,
    pub description: String,
    /// Also create the sibling media directory for attachments.
    pub with_media_dir: bool,
}

/// Use-case service wrapper over an event repository.
pub struct TimelineService<R: EventRepository> {
    repo: R,
}

impl<R: EventRepository> TimelineService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Journals a new event.
    ///
    /// # Contract
    /// - Repository validation applies; invalid kinds and blank titles are
    ///   rejected before anything touches disk.
    /// - Returns the path of the written event file.
    pub fn record_event(&self, request: &RecordEventRequest) -> RepoResult<PathBuf> {
        let event = Event::new(
            request.title.clone(),
            request.date,
            request.kind.clone(),
            request.description.clone(),
        );
        let path = self.repo.save_event(&event)?;
        if request.with_media_dir {
            self.repo.create_media_dir(&event)?;
        }
        Ok(path)
    }

    /// All journaled events in chronological order.
    pub fn list_events(&self) -> RepoResult<Vec<Event>> {
        self.repo.list_events()
    }

    /// Loads one journaled event by file name.
    pub fn get_event(&self, file_name: &str) -> RepoResult<Event> {
        self.repo.load_event(file_name)
    }

    /// Projects the journal into a validated dataset.
    ///
    /// Each event becomes a node keyed by its title slug; consecutive
    /// events (by date) are chained with links, so the journal's
    /// chronology is materialized as graph edges.
    ///
    /// # Errors
    /// - Repository errors while reading the journal.
    /// - `DatasetError::DuplicateNodeId` when two event titles slug to the
    ///   same id.
    pub fn assemble_dataset(&self) -> Result<TimelineDataset, AssemblyError> {
        let events = self.repo.list_events()?;

        let nodes: Vec<Node> = events
            .iter()
            .map(|event| {
                Node::new(
                    slugify(&event.title),
                    event.title.clone(),
                    event.date,
                    event.description.clone(),
                    event.kind.clone(),
                )
            })
            .collect();

        let links: Vec<Link> = nodes
            .windows(2)
            .map(|pair| Link::new(pair[0].id.clone(), pair[1].id.clone()))
            .collect();

        let dataset = TimelineDataset::new(nodes, links)?;
        info!(
            "event=dataset_assemble module=service status=ok node_count={} link_count={}",
            dataset.node_count(),
            dataset.link_count()
        );
        Ok(dataset)
    }
}
