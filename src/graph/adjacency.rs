//! Bidirectional adjacency storage.

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::model::NodeId;

/// Neighbor list. Chain construction gives degree ≤ 2, so most lists
/// stay inline.
pub type Neighbors = SmallVec<[NodeId; 4]>;

/// Symmetric adjacency map keyed by `NodeId`.
///
/// Every insert records both directions, appending and never replacing.
/// Nothing is removed or deduplicated: parallel edges stack up as
/// repeated entries, and a self-loop contributes two entries to the
/// node's own list. One insert therefore always adds exactly two
/// directed entries.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    edges: HashMap<NodeId, Neighbors>,
}

impl AdjacencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the undirected edge `a`–`b`.
    pub fn insert(&mut self, a: NodeId, b: NodeId) {
        self.edges.entry(a).or_default().push(b);
        self.edges.entry(b).or_default().push(a);
    }

    /// Neighbors of `id` in insertion order. Empty for edgeless nodes.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.edges.get(&id).map(|n| n.as_slice()).unwrap_or(&[])
    }

    /// Total directed entries across all neighbor lists — always twice
    /// the number of inserts.
    pub fn entry_count(&self) -> usize {
        self.edges.values().map(|n| n.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
