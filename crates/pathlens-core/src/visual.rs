//! # Visual State Store
//!
//! Pure-data highlight state for every node and edge id, decoupled from any
//! display technology. A renderer projects this state onto whatever surface
//! the hosting application uses; the store itself never touches a UI.
//!
//! Mutation is last-write-wins per id, with one engine-facing invariant:
//! at most one node is ever in the `Exploring` state. `begin_exploring`
//! demotes the previous `Exploring` node to the terminal `Explored` marker.
//! `Frontier` and `Found` markers are deliberately left untouched by that
//! demotion; the asymmetry matches the observed behavior of the original
//! visualization and is part of the contract.

use crate::graph::GraphSnapshot;
use crate::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highlight state of a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeHighlight {
    /// No highlight.
    #[default]
    None,
    /// The node currently being expanded.
    Exploring,
    /// Expanded earlier and not on the final path.
    Explored,
    /// Discovered but not yet expanded.
    Frontier,
    /// The goal node, at the moment it was found.
    Found,
    /// Part of the final path.
    OnPath,
}

/// Highlight state of a single edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeHighlight {
    /// No highlight.
    #[default]
    None,
    /// Part of the final path.
    OnPath,
}

/// Mapping from node/edge ids to their highlight state.
///
/// Ids are seeded from a snapshot; writes to untracked ids are ignored, so a
/// stale event can never grow the tracked set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualStateStore {
    nodes: BTreeMap<NodeId, NodeHighlight>,
    edges: BTreeMap<EdgeId, EdgeHighlight>,
}

impl VisualStateStore {
    /// Track every node and edge id in the snapshot, all starting at `None`.
    #[must_use]
    pub fn for_snapshot(snapshot: &GraphSnapshot) -> Self {
        Self {
            nodes: snapshot
                .nodes
                .iter()
                .map(|n| (n.id, NodeHighlight::None))
                .collect(),
            edges: snapshot
                .edges
                .iter()
                .map(|e| (e.id, EdgeHighlight::None))
                .collect(),
        }
    }

    /// Set a node's highlight. Last write wins; untracked ids are ignored.
    pub fn set_node_state(&mut self, id: NodeId, state: NodeHighlight) {
        if let Some(slot) = self.nodes.get_mut(&id) {
            *slot = state;
        }
    }

    /// Set an edge's highlight. Last write wins; untracked ids are ignored.
    pub fn set_edge_state(&mut self, id: EdgeId, state: EdgeHighlight) {
        if let Some(slot) = self.edges.get_mut(&id) {
            *slot = state;
        }
    }

    /// Demote the currently `Exploring` node (if any) to `Explored`, then
    /// mark `id` as `Exploring`.
    pub fn begin_exploring(&mut self, id: NodeId) {
        for state in self.nodes.values_mut() {
            if *state == NodeHighlight::Exploring {
                *state = NodeHighlight::Explored;
            }
        }
        self.set_node_state(id, NodeHighlight::Exploring);
    }

    /// Restore every tracked id to `None`. Idempotent.
    ///
    /// Clearing any transient result/log display is the caller's job; the
    /// store holds highlight state only.
    pub fn reset_all(&mut self) {
        for state in self.nodes.values_mut() {
            *state = NodeHighlight::None;
        }
        for state in self.edges.values_mut() {
            *state = EdgeHighlight::None;
        }
    }

    /// Current highlight of a node, or `None` if untracked.
    #[must_use]
    pub fn node_state(&self, id: NodeId) -> Option<NodeHighlight> {
        self.nodes.get(&id).copied()
    }

    /// Current highlight of an edge, or `None` if untracked.
    #[must_use]
    pub fn edge_state(&self, id: EdgeId) -> Option<EdgeHighlight> {
        self.edges.get(&id).copied()
    }

    /// Iterate node highlights in id order.
    pub fn node_states(&self) -> impl Iterator<Item = (NodeId, NodeHighlight)> + '_ {
        self.nodes.iter().map(|(id, s)| (*id, *s))
    }

    /// Iterate edge highlights in id order.
    pub fn edge_states(&self) -> impl Iterator<Item = (EdgeId, EdgeHighlight)> + '_ {
        self.edges.iter().map(|(id, s)| (*id, *s))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;

    fn two_node_store() -> (VisualStateStore, NodeId, NodeId) {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        store.add_edge(a, b, 1.0).expect("edge");
        (VisualStateStore::for_snapshot(&store.snapshot()), a, b)
    }

    #[test]
    fn tracked_ids_start_at_none() {
        let (visuals, a, _) = two_node_store();
        assert_eq!(visuals.node_state(a), Some(NodeHighlight::None));
        assert!(
            visuals
                .edge_states()
                .all(|(_, s)| s == EdgeHighlight::None)
        );
    }

    #[test]
    fn untracked_ids_are_ignored() {
        let (mut visuals, _, _) = two_node_store();
        visuals.set_node_state(NodeId(999), NodeHighlight::Found);
        assert_eq!(visuals.node_state(NodeId(999)), None);
    }

    #[test]
    fn begin_exploring_demotes_previous_node() {
        let (mut visuals, a, b) = two_node_store();
        visuals.begin_exploring(a);
        assert_eq!(visuals.node_state(a), Some(NodeHighlight::Exploring));

        visuals.begin_exploring(b);
        assert_eq!(visuals.node_state(a), Some(NodeHighlight::Explored));
        assert_eq!(visuals.node_state(b), Some(NodeHighlight::Exploring));

        let exploring = visuals
            .node_states()
            .filter(|(_, s)| *s == NodeHighlight::Exploring)
            .count();
        assert_eq!(exploring, 1);
    }

    #[test]
    fn demotion_leaves_frontier_and_found_untouched() {
        let (mut visuals, a, b) = two_node_store();
        visuals.set_node_state(a, NodeHighlight::Frontier);
        visuals.begin_exploring(b);
        // Frontier marker survives; only Exploring nodes are demoted.
        assert_eq!(visuals.node_state(a), Some(NodeHighlight::Frontier));
    }

    #[test]
    fn reset_all_restores_none_regardless_of_prior_state() {
        let (mut visuals, a, b) = two_node_store();
        visuals.begin_exploring(a);
        visuals.set_node_state(b, NodeHighlight::OnPath);
        let first_edge = visuals.edge_states().next().map(|(edge, _)| edge);
        if let Some(edge) = first_edge {
            visuals.set_edge_state(edge, EdgeHighlight::OnPath);
        }

        visuals.reset_all();
        assert!(
            visuals
                .node_states()
                .all(|(_, s)| s == NodeHighlight::None)
        );
        assert!(
            visuals
                .edge_states()
                .all(|(_, s)| s == EdgeHighlight::None)
        );

        // Idempotent.
        let before = visuals.clone();
        visuals.reset_all();
        assert_eq!(visuals, before);
    }
}
