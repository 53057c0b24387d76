//! Node in the graph.

use serde::{Deserialize, Serialize};

/// Opaque node identifier, stable for the lifetime of the graph.
///
/// Ids are minted sequentially by the registry and double as the node's
/// arena position. Adjacency is keyed by `NodeId`, so mutating a node's
/// fields never invalidates its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Position of this node in the registry arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled node.
///
/// Labels carry the semantic identity but are not unique: the registry
/// happily mints two distinct nodes for the same label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    /// Traversal scratch state. Construction never reads it.
    pub visited: bool,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            visited: false,
        }
    }
}
