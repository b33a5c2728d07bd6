//! # Search Service Protocol
//!
//! Request and response shapes exchanged with the Search Service, plus the
//! submission validation that runs before anything leaves the process.
//!
//! The service owns algorithm execution and heuristics; this side only
//! encodes a validated snapshot and decodes the event stream that comes
//! back. Edge weights travel twice: as a number for computation and as a
//! display label string, matching the service's expectations.

use crate::events::{Outcome, StepEvent};
use crate::graph::GraphSnapshot;
use crate::primitives::{MAX_EDGES, MAX_NODES};
use crate::types::{Algorithm, NodeId, PathlensError};
use serde::{Deserialize, Serialize};

// =============================================================================
// REQUEST
// =============================================================================

/// A node as the service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNode {
    /// Stable numeric id.
    pub id: u64,
    /// Display label, unique within the request.
    pub label: String,
}

/// An undirected edge as the service expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireEdge {
    /// Source node id.
    pub from: u64,
    /// Target node id.
    pub to: u64,
    /// Edge weight.
    pub weight: f64,
    /// Weight rendered for display, integer form when whole.
    pub label: String,
}

/// A fully validated search request, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Nodes in snapshot order.
    pub nodes: Vec<WireNode>,
    /// Edges in snapshot order.
    pub edges: Vec<WireEdge>,
    /// Source node label.
    pub source: String,
    /// Destination node label.
    pub destination: String,
    /// Algorithm identifier, service-side spelling.
    pub algorithm: String,
}

impl SearchRequest {
    /// Validate a submission and encode it.
    ///
    /// Rejects missing endpoints, identical source and destination, endpoints
    /// not in the snapshot, and snapshots over the node or edge ceiling. No
    /// network is involved; a rejected submission never leaves the process.
    pub fn build(
        snapshot: &GraphSnapshot,
        source: Option<NodeId>,
        destination: Option<NodeId>,
        algorithm: Algorithm,
    ) -> Result<Self, PathlensError> {
        let source = source.ok_or(PathlensError::MissingEndpoint)?;
        let destination = destination.ok_or(PathlensError::MissingEndpoint)?;
        if source == destination {
            return Err(PathlensError::SameSourceDestination);
        }
        if snapshot.nodes.len() > MAX_NODES {
            return Err(PathlensError::NodeLimitExceeded { limit: MAX_NODES });
        }
        if snapshot.edges.len() > MAX_EDGES {
            return Err(PathlensError::EdgeLimitExceeded { limit: MAX_EDGES });
        }
        let source_label = snapshot
            .node(source)
            .ok_or(PathlensError::UnknownNode(source))?
            .label
            .clone();
        let destination_label = snapshot
            .node(destination)
            .ok_or(PathlensError::UnknownNode(destination))?
            .label
            .clone();

        Ok(Self {
            nodes: snapshot
                .nodes
                .iter()
                .map(|n| WireNode {
                    id: n.id.0,
                    label: n.label.clone(),
                })
                .collect(),
            edges: snapshot
                .edges
                .iter()
                .map(|e| WireEdge {
                    from: e.from.0,
                    to: e.to.0,
                    weight: e.weight,
                    label: format!("{}", e.weight),
                })
                .collect(),
            source: source_label,
            destination: destination_label,
            algorithm: algorithm.as_str().to_string(),
        })
    }
}

// =============================================================================
// RESPONSE
// =============================================================================

/// The step-mode response body: the full event sequence plus the terminal
/// outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResponse {
    /// Ordered step events.
    pub steps: Vec<StepEvent>,
    /// Terminal outcome.
    pub result: Outcome,
}

/// Everything the step endpoint can answer with.
///
/// The service signals request-level failures with a bare `{"error": …}`
/// object instead of an HTTP error body, so decoding tries that shape first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StepReply {
    /// Request rejected before any algorithm ran.
    Failure {
        /// Service-provided description.
        error: String,
    },
    /// Request accepted; steps and outcome follow.
    Steps(StepResponse),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;

    fn sample_ids() -> (GraphStore, NodeId, NodeId) {
        let store = GraphStore::sample();
        let ny = store.node_by_label("New York").expect("node");
        let miami = store.node_by_label("Miami").expect("node");
        (store, ny, miami)
    }

    #[test]
    fn build_encodes_labels_and_weights() {
        let (store, ny, miami) = sample_ids();
        let request =
            SearchRequest::build(&store.snapshot(), Some(ny), Some(miami), Algorithm::Dijkstra)
                .expect("build");

        assert_eq!(request.source, "New York");
        assert_eq!(request.destination, "Miami");
        assert_eq!(request.algorithm, "dijkstra");
        assert_eq!(request.nodes.len(), 8);
        assert_eq!(request.edges.len(), 11);
        // Whole weights keep the integer display form.
        assert_eq!(request.edges[0].label, "1");
    }

    #[test]
    fn fractional_weight_label_keeps_decimals() {
        let mut store = GraphStore::new();
        let a = store.add_node("A").expect("add");
        let b = store.add_node("B").expect("add");
        store.add_edge(a, b, 3.5).expect("edge");

        let request = SearchRequest::build(&store.snapshot(), Some(a), Some(b), Algorithm::Bfs)
            .expect("build");
        assert_eq!(request.edges[0].label, "3.5");
    }

    #[test]
    fn missing_endpoint_rejected() {
        let (store, ny, _) = sample_ids();
        let result = SearchRequest::build(&store.snapshot(), Some(ny), None, Algorithm::Bfs);
        assert!(matches!(result, Err(PathlensError::MissingEndpoint)));
    }

    #[test]
    fn same_source_and_destination_rejected() {
        let (store, ny, _) = sample_ids();
        let result = SearchRequest::build(&store.snapshot(), Some(ny), Some(ny), Algorithm::Bfs);
        assert!(matches!(result, Err(PathlensError::SameSourceDestination)));
    }

    #[test]
    fn endpoint_outside_snapshot_rejected() {
        let (store, ny, _) = sample_ids();
        let result = SearchRequest::build(
            &store.snapshot(),
            Some(ny),
            Some(NodeId(999)),
            Algorithm::Bfs,
        );
        assert!(matches!(result, Err(PathlensError::UnknownNode(_))));
    }

    #[test]
    fn oversized_snapshot_rejected_before_encoding() {
        // Build an over-ceiling snapshot directly; the store itself would
        // refuse to grow this large.
        let mut snapshot = GraphStore::sample().snapshot();
        for i in 0..=MAX_NODES {
            snapshot.nodes.push(crate::types::Node::new(
                NodeId(100 + i as u64),
                format!("X{i}"),
            ));
        }
        let a = snapshot.nodes[0].id;
        let b = snapshot.nodes[1].id;
        let result = SearchRequest::build(&snapshot, Some(a), Some(b), Algorithm::Bfs);
        assert!(matches!(
            result,
            Err(PathlensError::NodeLimitExceeded { .. })
        ));
    }

    #[test]
    fn step_reply_decodes_error_object() {
        let reply: StepReply =
            serde_json::from_str(r#"{"error": "Rate limit exceeded"}"#).expect("decode");
        assert_eq!(
            reply,
            StepReply::Failure {
                error: "Rate limit exceeded".to_string()
            }
        );
    }

    #[test]
    fn step_reply_decodes_steps_and_result() {
        let json = r#"{
            "steps": [
                {"type": "start", "algorithm": "bfs", "source": "A", "destination": "B"},
                {"type": "found", "node": "B", "step": 1}
            ],
            "result": {"success": true, "path": ["A", "B"], "cost": 1.0,
                       "algorithm": "Breadth-First Search",
                       "nodes_explored": 2, "execution_time": 0.0001}
        }"#;
        let reply: StepReply = serde_json::from_str(json).expect("decode");
        match reply {
            StepReply::Steps(response) => {
                assert_eq!(response.steps.len(), 2);
                assert!(response.result.is_success());
            }
            StepReply::Failure { .. } => unreachable!("expected steps"),
        }
    }
}
