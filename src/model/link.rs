//! Link — one directed appearance of an undirected edge.

use serde::{Deserialize, Serialize};

/// A `(source, target)` label pair at the export boundary.
///
/// An undirected edge A–B surfaces twice when the graph is flattened:
/// once as A→B while visiting A and once as B→A while visiting B. The
/// duplication mirrors the symmetric adjacency storage and is left to the
/// consumer to collapse if it wants a simple edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: String,
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
