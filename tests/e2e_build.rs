//! End-to-end tests for chain construction and lookup.
//!
//! Each test exercises the public surface only: populate -> inspect via
//! `Graph` accessors, the way an embedding caller would.

use pretty_assertions::assert_eq;
use smallworld::{Error, Graph, NodeId};

fn neighbor_labels(graph: &Graph, id: NodeId) -> Vec<String> {
    graph
        .neighbors(id)
        .iter()
        .map(|n| graph.node(*n).unwrap().label.clone())
        .collect()
}

// ============================================================================
// 1. Populate caps at the limit, preserving order
// ============================================================================

#[test]
fn test_populate_caps_at_limit() {
    let graph = Graph::from_labels(["A", "B", "C", "D"], 3);

    let names: Vec<String> = graph.nodes().map(|n| n.label.clone()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

// ============================================================================
// 2. Chain adjacency is exactly predecessor/successor
// ============================================================================

#[test]
fn test_chain_topology() {
    let graph = Graph::from_labels(["A", "B", "C", "D"], 3);

    assert_eq!(neighbor_labels(&graph, NodeId(0)), vec!["B"]);
    assert_eq!(neighbor_labels(&graph, NodeId(1)), vec!["A", "C"]);
    assert_eq!(neighbor_labels(&graph, NodeId(2)), vec!["B"]);
    assert_eq!(graph.edge_entry_count(), 4);
}

// ============================================================================
// 3. Degenerate inputs: empty labels, zero limit, oversized limit
// ============================================================================

#[test]
fn test_empty_labels_make_empty_graph() {
    let graph = Graph::from_labels(Vec::<String>::new(), 5);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_entry_count(), 0);
}

#[test]
fn test_zero_limit_makes_empty_graph() {
    let graph = Graph::from_labels(["A", "B", "C"], 0);
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_entry_count(), 0);
}

#[test]
fn test_limit_beyond_labels_is_len() {
    let graph = Graph::from_labels(["A", "B"], 100);
    assert_eq!(graph.node_count(), 2);
}

// ============================================================================
// 4. Duplicate labels are distinct nodes with their own chain edges
// ============================================================================

#[test]
fn test_duplicate_labels_stay_distinct() {
    let graph = Graph::from_labels(["A", "A", "A"], 3);

    assert_eq!(graph.node_count(), 3);
    // Middle "A" is chained to both outer "A"s, each a separate node.
    assert_eq!(graph.neighbors(NodeId(1)), &[NodeId(0), NodeId(2)]);
}

// ============================================================================
// 5. Lookup: hit returns the stored label, miss is a recoverable error
// ============================================================================

#[test]
fn test_lookup_hit_and_miss() {
    let graph = Graph::from_labels(["Jakarta", "Surabaya"], 2);

    assert_eq!(graph.lookup_label("Jakarta").unwrap(), "Jakarta");

    let err = graph.lookup_label("Atlantis").unwrap_err();
    assert!(matches!(err, Error::LabelNotFound(label) if label == "Atlantis"));
}

// ============================================================================
// 6. Incremental populate extends the existing chain
// ============================================================================

#[test]
fn test_incremental_populate_extends_chain() {
    let mut graph = Graph::from_labels(["A", "B"], 10);
    graph.populate(["C", "D"], 10);

    assert_eq!(neighbor_labels(&graph, NodeId(1)), vec!["A", "C"]);
    assert_eq!(neighbor_labels(&graph, NodeId(2)), vec!["B", "D"]);
    assert_eq!(graph.node_count(), 4);
}
