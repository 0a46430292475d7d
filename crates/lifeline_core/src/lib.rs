//! Core domain logic for Lifeline.
//! This crate is the single source of truth for timeline invariants.

pub mod dataset;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use dataset::{DatasetError, DatasetResult, TimelineDataset};
pub use logging::{default_log_level, init_logging};
pub use model::event::{
    slugify, Event, EventDecodeError, EventValidationError, DEFAULT_EVENT_KINDS,
};
pub use model::node::{Link, Node};
pub use repo::event_repo::{EventRepository, FsEventRepository, RepoError, RepoResult};
pub use service::timeline_service::{AssemblyError, RecordEventRequest, TimelineService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
