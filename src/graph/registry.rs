//! Ordered node arena with label lookup.

use crate::model::{Node, NodeId};
use crate::{Error, Result};

/// Insertion-ordered arena of nodes.
///
/// Ids are handed out sequentially and double as arena positions, so a
/// `NodeId` held by the adjacency map resolves in O(1) and stays valid
/// across any mutation of the node it names. Nodes are never removed.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node with the given label and mint its id.
    ///
    /// No uniqueness check: a repeated label produces a second, distinct
    /// node.
    pub fn add(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(Node::new(id, label));
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Resolve a label to its stored value, scanning insertion order.
    /// Returns the first match.
    pub fn lookup_label(&self, label: &str) -> Result<&str> {
        self.nodes
            .iter()
            .find(|n| n.label == label)
            .map(|n| n.label.as_str())
            .ok_or_else(|| Error::LabelNotFound(label.to_string()))
    }

    /// Id of the most recently added node.
    pub fn last_id(&self) -> Option<NodeId> {
        self.nodes.last().map(|n| n.id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_sequential_arena_positions() {
        let mut registry = NodeRegistry::new();
        let a = registry.add("Jakarta");
        let b = registry.add("Surabaya");

        assert_eq!(a, NodeId(0));
        assert_eq!(b, NodeId(1));
        assert_eq!(registry.get(a).unwrap().label, "Jakarta");
        assert_eq!(registry.get(b).unwrap().label, "Surabaya");
    }

    #[test]
    fn test_duplicate_labels_mint_distinct_nodes() {
        let mut registry = NodeRegistry::new();
        let first = registry.add("Malang");
        let second = registry.add("Malang");

        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_returns_stored_label() {
        let mut registry = NodeRegistry::new();
        registry.add("Jakarta");
        registry.add("Surabaya");

        assert_eq!(registry.lookup_label("Surabaya").unwrap(), "Surabaya");
    }

    #[test]
    fn test_lookup_miss_is_recoverable() {
        let mut registry = NodeRegistry::new();
        registry.add("Jakarta");

        let err = registry.lookup_label("Atlantis").unwrap_err();
        assert!(matches!(err, Error::LabelNotFound(label) if label == "Atlantis"));
    }

    #[test]
    fn test_mutating_visited_keeps_id_resolution() {
        let mut registry = NodeRegistry::new();
        let id = registry.add("Bandung");

        registry.get_mut(id).unwrap().visited = true;
        assert!(registry.get(id).unwrap().visited);
        assert_eq!(registry.get(id).unwrap().label, "Bandung");
    }
}
