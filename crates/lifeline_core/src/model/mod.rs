//! Domain model for timeline data.
//!
//! # Responsibility
//! - Define the canonical node/link records consumed by visualization layers.
//! - Define the authored event record and its markdown file format.
//!
//! # Invariants
//! - Every node is identified by a stable, human-readable string `id`.
//! - Wire field naming (`type`, `source`, `target`) is fixed by external
//!   consumers and must not drift.

pub mod event;
pub mod node;
