//! Immutable timeline dataset and its integrity guarantees.
//!
//! # Responsibility
//! - Hold the complete node/link graph as one read-only value.
//! - Refuse to construct a dataset that violates graph invariants.
//!
//! # Invariants
//! - Node ids are pairwise distinct.
//! - Every link endpoint resolves to a declared node id.
//! - Node and link order is declaration order, never re-sorted.

use crate::model::node::{Link, Node};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod builtin;

pub use builtin::builtin;

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Integrity defect found while constructing a dataset.
///
/// These are data errors, not transient conditions: the fix is in the
/// source data, so there is no retry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    /// Two nodes share the same id.
    DuplicateNodeId(String),
    /// A link endpoint does not match any declared node id.
    DanglingLink {
        source: String,
        target: String,
        missing: String,
    },
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateNodeId(id) => write!(f, "duplicate node id: {id}"),
            Self::DanglingLink {
                source,
                target,
                missing,
            } => write!(
                f,
                "link {source} -> {target} references missing node id: {missing}"
            ),
        }
    }
}

impl Error for DatasetError {}

/// Raw wire shape accepted during deserialization, before validation.
#[derive(Deserialize)]
struct RawTimelineDataset {
    nodes: Vec<Node>,
    links: Vec<Link>,
}

/// The complete, immutable collection of nodes and links.
///
/// Constructed once, validated up front, then shared freely: there is no
/// mutating API, so any number of readers can hold references without
/// synchronization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTimelineDataset")]
pub struct TimelineDataset {
    nodes: Vec<Node>,
    links: Vec<Link>,
    /// Id-keyed positions into `nodes`, built at construction.
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl TimelineDataset {
    /// Builds a dataset, enforcing graph invariants before exposing it.
    ///
    /// # Errors
    /// - `DuplicateNodeId` when two nodes share an id.
    /// - `DanglingLink` when a link endpoint matches no node.
    pub fn new(nodes: Vec<Node>, links: Vec<Link>) -> DatasetResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), position).is_some() {
                return Err(DatasetError::DuplicateNodeId(node.id.clone()));
            }
        }

        for link in &links {
            for end in [&link.source, &link.target] {
                if !index.contains_key(end.as_str()) {
                    return Err(DatasetError::DanglingLink {
                        source: link.source.clone(),
                        target: link.target.clone(),
                        missing: end.clone(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            links,
            index,
        })
    }

    /// All nodes, in declaration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All links, in declaration order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Looks up a node by id. O(1) via the id index.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    /// All links leaving `id`, in declaration order.
    pub fn links_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.source == id)
    }

    /// All links arriving at `id`, in declaration order.
    pub fn links_into<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Link> + 'a {
        self.links.iter().filter(move |link| link.target == id)
    }
}

impl TryFrom<RawTimelineDataset> for TimelineDataset {
    type Error = DatasetError;

    fn try_from(raw: RawTimelineDataset) -> DatasetResult<Self> {
        Self::new(raw.nodes, raw.links)
    }
}
