//! Node and link records for the timeline graph.
//!
//! # Responsibility
//! - Define the exact record shapes the external visualization layer reads.
//!
//! # Invariants
//! - `Node.kind` is serialized as `type` to match the consumer schema.
//! - `Node.date` always serializes as an ISO 8601 `YYYY-MM-DD` string.
//! - `kind` is an open categorical tag; values are carried verbatim.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single timeline event record with identity, label, date and category.
///
/// Nodes are declared data: once part of a dataset they are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Stable string key used for graph lookups and link endpoints.
    pub id: String,
    /// Human-readable label.
    pub name: String,
    /// Calendar date of the event. Storage order is not date order.
    pub date: NaiveDate,
    /// Free-text description.
    pub description: String,
    /// Serialized as `type` to match the external schema naming.
    ///
    /// Kept as an open string: the data source is allowed to carry ad hoc
    /// categories and they must survive round-trips unchanged.
    #[serde(rename = "type")]
    pub kind: String,
}

impl Node {
    /// Creates a node from owned or borrowed string parts.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        date: NaiveDate,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            description: description.into(),
            kind: kind.into(),
        }
    }
}

/// A directed edge between two node ids expressing chronological or causal
/// sequencing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Id of the node this edge leaves from.
    pub source: String,
    /// Id of the node this edge points at.
    pub target: String,
}

impl Link {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
