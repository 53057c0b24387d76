//! # smallworld — chain + random-overlay graph builder
//!
//! An in-memory undirected graph that ingests an ordered sequence of
//! labels, links them into a chain, then overlays randomized shortcut
//! edges — the classic small-world construction.
//!
//! ## Design Principles
//!
//! 1. **Arena-keyed adjacency**: edges are keyed by stable [`NodeId`]s,
//!    never by node values — mutating a node can't orphan its edges
//! 2. **Clean DTOs**: [`Node`] and [`Link`] cross all boundaries
//! 3. **Caller-owned randomness**: the overlay takes any [`rand::Rng`],
//!    so tests seed it and production uses the thread-local generator
//! 4. **Faithful multigraph**: parallel edges and self-loops are stored,
//!    not filtered
//!
//! ## Quick Start
//!
//! ```rust
//! use smallworld::Graph;
//!
//! fn main() -> smallworld::Result<()> {
//!     let mut graph = Graph::new();
//!     graph.populate(["Jakarta", "Surabaya", "Bandung", "Medan"], 20);
//!     graph.add_random_edges()?;
//!
//!     for link in smallworld::export::links(&graph) {
//!         println!("{} -- {}", link.source, link.target);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Construction Phases
//!
//! | Phase | Operation | Topology |
//! |-------|-----------|----------|
//! | Populate | [`Graph::populate`] | chain: each node linked to its predecessor |
//! | Overlay | [`Graph::add_random_edges`] | N uniform random edges on top |
//! | Read | [`Graph::neighbors`], [`export`] | stable until the caller mutates |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Link, Node, NodeId};

// ============================================================================
// Re-exports: Graph
// ============================================================================

pub use graph::{AdjacencyMap, Graph, NodeRegistry};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("label not found in graph: {0}")]
    LabelNotFound(String),

    #[error("cannot add random edges: need at least 2 nodes, got {got}")]
    InsufficientNodes { got: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
