//! Graph export — flatten nodes and links for downstream consumers.
//!
//! Produces the enumeration a rendering or serialization layer consumes:
//! node labels in insertion order, and one [`Link`] per directed
//! adjacency entry.
//!
//! ```text
//! Graph → node_names() + links() → feed a chart layer
//!       → write_json()           → pipe into any io::Write sink
//! ```

use std::io::Write;

use serde::Serialize;

use crate::Result;
use crate::graph::Graph;
use crate::model::Link;

/// Node labels in insertion order.
pub fn node_names(graph: &Graph) -> Vec<String> {
    graph.nodes().map(|n| n.label.clone()).collect()
}

/// Flatten the adjacency into `(source, target)` label pairs.
///
/// Each node is visited in insertion order and its whole neighbor list
/// is emitted, so an undirected edge appears once per endpoint and a
/// duplicate edge appears as often as it was inserted. Consumers that
/// want a simple edge list collapse the pairs themselves.
pub fn links(graph: &Graph) -> Vec<Link> {
    let mut links = Vec::new();
    for node in graph.nodes() {
        for neighbor in graph.neighbors(node.id) {
            if let Some(target) = graph.node(*neighbor) {
                links.push(Link::new(node.label.clone(), target.label.clone()));
            }
        }
    }
    links
}

/// JSON payload written by [`write_json`].
#[derive(Debug, Serialize)]
struct ExportDoc {
    nodes: Vec<String>,
    links: Vec<Link>,
}

/// Serialize the graph as `{"nodes": [...], "links": [...]}`.
///
/// The shape is what force-directed chart libraries and d3-style
/// consumers expect; the writer decides where it lands.
pub fn write_json(graph: &Graph, writer: &mut dyn Write) -> Result<()> {
    let doc = ExportDoc {
        nodes: node_names(graph),
        links: links(graph),
    };
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writeln!(writer)?;
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
