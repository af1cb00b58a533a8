// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Weighted graph over named nodes, stored as a flat square adjacency matrix.
// A cell holds `Some(weight)` when a link exists and `None` otherwise.  Map
// links are bidirectional, so `add_link` fills both cells; `add_arc` fills a
// single direction for callers that build directed graphs by hand.  The graph
// is immutable for the whole duration of a route search.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::HashMap;

/// Represents a unique identifier for a node in the graph.
pub type NodeId = usize;

/// Square weighted adjacency matrix over named nodes.
#[derive(Clone, Debug, Default)]
pub struct WeightedGraph {
    names: Vec<String>,
    ids: HashMap<String, NodeId>,
    matrix: Vec<Option<u32>>,
}

impl WeightedGraph {
    /// Builds a graph over the given node names, with no links yet.
    /// Node ids follow the order of the names.
    pub fn with_nodes(names: Vec<String>) -> Self {
        let count = names.len();
        let ids = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();
        Self {
            names,
            ids,
            matrix: vec![None; count * count],
        }
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Returns the display name of a node.
    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id]
    }

    /// Returns the id of the node with the given name, if present.
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Adds a one-directional link from `from` to `to`.
    pub fn add_arc(&mut self, from: NodeId, to: NodeId, weight: u32) {
        assert!(
            from < self.node_count() && to < self.node_count(),
            "Invalid node index"
        );
        let cell = self.cell(from, to);
        self.matrix[cell] = Some(weight);
    }

    /// Adds a bidirectional link between `a` and `b`.
    pub fn add_link(&mut self, a: NodeId, b: NodeId, weight: u32) {
        self.add_arc(a, b, weight);
        self.add_arc(b, a, weight);
    }

    /// Returns the weight of the link from `from` to `to`, or `None` when
    /// no such link exists (or either index is out of range).
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<u32> {
        if from >= self.node_count() || to >= self.node_count() {
            return None;
        }
        self.matrix[self.cell(from, to)]
    }

    fn cell(&self, from: NodeId, to: NodeId) -> usize {
        from * self.names.len() + to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> WeightedGraph {
        WeightedGraph::with_nodes(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn nodes_are_numbered_in_declaration_order() {
        let g = named(&["a", "b", "c"]);
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.node_id("a"), Some(0));
        assert_eq!(g.node_id("c"), Some(2));
        assert_eq!(g.node_id("d"), None);
        assert_eq!(g.name(1), "b");
    }

    #[test]
    fn link_is_bidirectional() {
        let mut g = named(&["a", "b"]);
        g.add_link(0, 1, 7);
        assert_eq!(g.weight(0, 1), Some(7));
        assert_eq!(g.weight(1, 0), Some(7));
    }

    #[test]
    fn arc_is_one_directional() {
        let mut g = named(&["a", "b"]);
        g.add_arc(0, 1, 7);
        assert_eq!(g.weight(0, 1), Some(7));
        assert_eq!(g.weight(1, 0), None);
    }

    #[test]
    fn missing_links_and_bad_indices_have_no_weight() {
        let g = named(&["a", "b"]);
        assert_eq!(g.weight(0, 1), None);
        assert_eq!(g.weight(0, 9), None);
        assert_eq!(g.weight(9, 0), None);
    }
}
