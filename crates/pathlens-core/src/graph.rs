//! # Graph Store
//!
//! The mutable node/edge collection the user edits, plus the immutable
//! snapshot view handed to the Tree Projector and the Search Service.
//!
//! All validation lives here, at creation time: label uniqueness, self-edge
//! and duplicate-edge rejection, non-negative weights, and the node/edge
//! ceilings. Everything downstream (projection, replay) assumes a valid
//! snapshot and performs no validation of its own.
//!
//! Storage uses `BTreeMap` keyed by monotonically assigned ids, so iteration
//! order is insertion order and every snapshot is deterministic.

use crate::primitives::{MAX_EDGES, MAX_NODES};
use crate::types::{Edge, EdgeId, Node, NodeId, PathlensError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// SNAPSHOT
// =============================================================================

/// A read-only, point-in-time view of the graph.
///
/// Owned by the caller; never mutated in place. Node and edge order is the
/// store's insertion order, which makes every downstream derivation
/// (tree projection, request encoding) deterministic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Nodes in insertion order.
    pub nodes: Vec<Node>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a node id by label.
    #[must_use]
    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.label == label).map(|n| n.id)
    }

    /// Find the undirected edge connecting two nodes, if any.
    #[must_use]
    pub fn edge_between(&self, a: NodeId, b: NodeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }
}

// =============================================================================
// GRAPH STORE
// =============================================================================

/// The mutable graph the user edits through direct actions.
///
/// Owned by the hosting application and passed by reference into the core
/// components; the core never holds its own copy beyond a per-call snapshot.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    nodes: BTreeMap<NodeId, Node>,
    edges: BTreeMap<EdgeId, Edge>,
    next_node_id: u64,
    next_edge_id: u64,
}

impl GraphStore {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the default sample graph: eight US cities with distance-weighted
    /// connections, a ready-made pathfinding scenario.
    #[must_use]
    pub fn sample() -> Self {
        let mut store = Self::new();
        let labels = [
            "New York",
            "Philadelphia",
            "Boston",
            "Washington",
            "Chicago",
            "Atlanta",
            "Miami",
            "Dallas",
        ];
        let edges = [
            (0usize, 1usize, 1.0),
            (0, 2, 2.0),
            (1, 3, 1.0),
            (1, 4, 8.0),
            (2, 4, 10.0),
            (3, 5, 4.0),
            (3, 4, 7.0),
            (4, 7, 9.0),
            (5, 6, 7.0),
            (5, 7, 8.0),
            (6, 7, 13.0),
        ];

        let mut ids = Vec::with_capacity(labels.len());
        for label in labels {
            // Sample data is statically valid; errors cannot occur here.
            if let Ok(id) = store.add_node(label) {
                ids.push(id);
            }
        }
        for (from, to, weight) in edges {
            let _ = store.add_edge(ids[from], ids[to], weight);
        }
        store
    }

    /// Add a node with a unique label. Returns the assigned id.
    pub fn add_node(&mut self, label: impl Into<String>) -> Result<NodeId, PathlensError> {
        let label = label.into();

        if self.nodes.len() >= MAX_NODES {
            return Err(PathlensError::NodeLimitExceeded { limit: MAX_NODES });
        }
        if self.nodes.values().any(|n| n.label == label) {
            return Err(PathlensError::DuplicateLabel(label));
        }

        let id = NodeId(self.next_node_id);
        self.next_node_id = self.next_node_id.saturating_add(1);
        self.nodes.insert(id, Node::new(id, label));
        Ok(id)
    }

    /// Add an undirected edge. Rejects self-edges, duplicates in either
    /// direction, negative weights, and unknown endpoints.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        weight: f64,
    ) -> Result<EdgeId, PathlensError> {
        if self.edges.len() >= MAX_EDGES {
            return Err(PathlensError::EdgeLimitExceeded { limit: MAX_EDGES });
        }
        let from_label = self
            .nodes
            .get(&from)
            .ok_or(PathlensError::UnknownNode(from))?
            .label
            .clone();
        let to_label = self
            .nodes
            .get(&to)
            .ok_or(PathlensError::UnknownNode(to))?
            .label
            .clone();
        if from == to {
            return Err(PathlensError::SelfEdge(from_label));
        }
        if self.edges.values().any(|e| e.connects(from, to)) {
            return Err(PathlensError::DuplicateEdge(from_label, to_label));
        }
        if weight < 0.0 {
            return Err(PathlensError::NegativeWeight(weight));
        }

        let id = EdgeId(self.next_edge_id);
        self.next_edge_id = self.next_edge_id.saturating_add(1);
        self.edges.insert(id, Edge::new(id, from, to, weight));
        Ok(id)
    }

    /// Remove a node and every edge incident to it.
    pub fn remove_node(&mut self, id: NodeId) -> Result<(), PathlensError> {
        if self.nodes.remove(&id).is_none() {
            return Err(PathlensError::UnknownNode(id));
        }
        self.edges.retain(|_, e| e.from != id && e.to != id);
        Ok(())
    }

    /// Remove an edge by id.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<(), PathlensError> {
        if self.edges.remove(&id).is_none() {
            return Err(PathlensError::UnknownEdge(id));
        }
        Ok(())
    }

    /// Remove every node and edge.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Look up a node id by its label.
    #[must_use]
    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|n| n.label == label)
            .map(|n| n.id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Capture an immutable point-in-time view. Pure read, no validation,
    /// no side effects.
    #[must_use]
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes.values().cloned().collect(),
            edges: self.edges.values().copied().collect(),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_snapshot_preserves_insertion_order() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        let c = store.add_node("C").expect("add");

        let snapshot = store.snapshot();
        let ids: Vec<_> = snapshot.nodes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[test]
    fn duplicate_label_rejected() {
        let mut store = GraphStore::new();
        store.add_node("Boston").expect("add");
        let result = store.add_node("Boston");
        assert!(matches!(result, Err(PathlensError::DuplicateLabel(_))));
    }

    #[test]
    fn self_edge_rejected() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let result = store.add_edge(a, a, 1.0);
        assert!(matches!(result, Err(PathlensError::SelfEdge(_))));
    }

    #[test]
    fn duplicate_edge_rejected_in_either_direction() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        store.add_edge(a, b, 1.0).expect("add edge");

        assert!(matches!(
            store.add_edge(a, b, 2.0),
            Err(PathlensError::DuplicateEdge(_, _))
        ));
        assert!(matches!(
            store.add_edge(b, a, 2.0),
            Err(PathlensError::DuplicateEdge(_, _))
        ));
    }

    #[test]
    fn negative_weight_rejected() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        assert!(matches!(
            store.add_edge(a, b, -1.0),
            Err(PathlensError::NegativeWeight(_))
        ));
    }

    #[test]
    fn edge_to_unknown_node_rejected() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let result = store.add_edge(a, NodeId(99), 1.0);
        assert!(matches!(result, Err(PathlensError::UnknownNode(_))));
    }

    #[test]
    fn node_ceiling_enforced_at_creation() {
        let mut store = GraphStore::new();
        for i in 0..MAX_NODES {
            store.add_node(format!("N{i}")).expect("add");
        }
        let result = store.add_node("overflow");
        assert!(matches!(
            result,
            Err(PathlensError::NodeLimitExceeded { limit: MAX_NODES })
        ));
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        let c = store.add_node("C").expect("add");
        store.add_edge(a, b, 1.0).expect("edge");
        store.add_edge(b, c, 1.0).expect("edge");

        store.remove_node(b).expect("remove");
        assert_eq!(store.edge_count(), 0);
        assert_eq!(store.node_count(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        store.remove_node(a).expect("remove");
        let b = store.add_node("B").expect("add");
        assert_ne!(a, b);
    }

    #[test]
    fn sample_graph_matches_default_scenario() {
        let store = GraphStore::sample();
        assert_eq!(store.node_count(), 8);
        assert_eq!(store.edge_count(), 11);

        let snapshot = store.snapshot();
        assert_eq!(snapshot.nodes[0].label, "New York");
        let ny = snapshot.node_by_label("New York").expect("node");
        let boston = snapshot.node_by_label("Boston").expect("node");
        let edge = snapshot.edge_between(ny, boston).expect("edge");
        assert!((edge.weight - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_is_detached_from_store() {
        let mut store = GraphStore::new();
        store.add_node("A").expect("add");
        let snapshot = store.snapshot();
        store.add_node("B").expect("add");
        assert_eq!(snapshot.nodes.len(), 1);
    }
}
