//! # Graph Construction
//!
//! The aggregate: an insertion-ordered node registry plus a symmetric
//! adjacency map. Construction happens in three strokes — populate a
//! chain, overlay random shortcuts, read.
//!
//! The graph is exclusively owned while it is being built; once built it
//! carries no interior mutability, so sharing `&Graph` across readers is
//! safe by construction.

pub mod registry;
pub mod adjacency;

use rand::Rng;
use tracing::{debug, trace};

use crate::model::{Node, NodeId};
use crate::{Error, Result};

pub use adjacency::AdjacencyMap;
pub use registry::NodeRegistry;

/// An undirected multigraph built as a chain plus a random overlay.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: NodeRegistry,
    edges: AdjacencyMap,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by chaining the first `limit` labels.
    pub fn from_labels<I, S>(labels: I, limit: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        graph.populate(labels, limit);
        graph
    }

    // ========================================================================
    // Construction
    // ========================================================================

    /// Register a node. Never fails; a duplicate label mints a distinct
    /// node.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        self.nodes.add(label)
    }

    /// Record an undirected edge between `a` and `b`.
    ///
    /// Appends to both neighbor lists. Repeated calls stack duplicate
    /// entries, and `a == b` records a self-loop (two entries in the same
    /// list).
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        trace!(%a, %b, "add edge");
        self.edges.insert(a, b);
    }

    /// Add the first `min(labels.len(), limit)` labels as nodes, chaining
    /// each new node to its immediate predecessor.
    ///
    /// On a non-empty graph the first new node chains to the existing
    /// tail, extending the chain rather than starting a disconnected
    /// segment. An empty label sequence or a zero limit adds nothing.
    pub fn populate<I, S>(&mut self, labels: I, limit: usize)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0usize;
        for label in labels.into_iter().take(limit) {
            let prev = self.nodes.last_id();
            let id = self.add_node(label);
            if let Some(prev) = prev {
                self.add_edge(prev, id);
            }
            added += 1;
        }
        debug!(added, total = self.node_count(), "populated chain");
    }

    /// Overlay `node_count()` random edges drawn from `rng`.
    ///
    /// Each edge picks two independent endpoints uniformly over the index
    /// range `[0, N-1)`. The exclusive upper bound leaves the newest node
    /// out of the overlay — it stays reachable only through its chain
    /// edge. Coinciding draws produce self-loops; nothing is filtered or
    /// deduplicated, so exactly N edges (2N directed entries) land in the
    /// adjacency map.
    pub fn add_random_edges_with<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let n = self.node_count();
        if n < 2 {
            return Err(Error::InsufficientNodes { got: n });
        }
        for _ in 0..n {
            let a = rng.random_range(0..n - 1);
            let b = rng.random_range(0..n - 1);
            self.add_edge(NodeId(a as u64), NodeId(b as u64));
        }
        debug!(count = n, "added random overlay");
        Ok(())
    }

    /// Overlay random edges using the thread-local generator.
    ///
    /// See [`Graph::add_random_edges_with`] for the selection semantics.
    pub fn add_random_edges(&mut self) -> Result<()> {
        self.add_random_edges_with(&mut rand::rng())
    }

    // ========================================================================
    // Lookup & read access
    // ========================================================================

    /// Resolve a label to its stored value, scanning insertion order.
    ///
    /// A miss is an ordinary [`Error::LabelNotFound`] — the caller
    /// decides whether it is fatal.
    pub fn lookup_label(&self, label: &str) -> Result<&str> {
        self.nodes.lookup_label(label)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Neighbors of `id` in insertion order. Empty for edgeless or
    /// unknown ids.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.edges.neighbors(id)
    }

    /// Total directed adjacency entries — twice the number of edge
    /// insertions.
    pub fn edge_entry_count(&self) -> usize {
        self.edges.entry_count()
    }

    // ========================================================================
    // Traversal state
    // ========================================================================

    /// Mark a node visited. Returns false for an unknown id.
    pub fn mark_visited(&mut self, id: NodeId) -> bool {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.visited = true;
                true
            }
            None => false,
        }
    }

    /// Reset every node's visited flag, ready for the next traversal.
    pub fn clear_visited(&mut self) {
        for node in self.nodes.iter_mut() {
            node.visited = false;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
