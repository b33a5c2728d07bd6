//! # Algorithm Execution Events
//!
//! The ordered event stream the Search Service emits while running an
//! algorithm, plus the terminal outcome. The core never produces these; it
//! only interprets them.
//!
//! `StepEvent` is a closed tagged variant with exhaustive matching in the
//! replay engine: a new event kind is a compile-time-checked variant
//! addition, not a string-keyed branch. The serde representation matches the
//! service wire format (`"type"` tag, snake_case, optional extras); unknown
//! extra fields on the wire are ignored.

use serde::{Deserialize, Serialize};

// =============================================================================
// STEP EVENTS
// =============================================================================

/// One discrete step of an algorithm's execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StepEvent {
    /// The search began.
    Start {
        /// Algorithm name as reported by the service.
        algorithm: String,
        /// Source node label.
        source: String,
        /// Destination node label.
        destination: String,
    },

    /// A node was taken off the frontier and expanded.
    Exploring {
        /// Node label.
        node: String,
        /// 1-based step counter.
        step: u64,
        /// Algorithm name, when the service includes it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        algorithm: Option<String>,
        /// Frontier size after removal, when reported.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        frontier_size: Option<u64>,
    },

    /// A neighbor was discovered and queued.
    AddedToFrontier {
        /// Node label.
        node: String,
        /// Label of the node it was reached through.
        parent: String,
        /// 1-based step counter.
        step: u64,
        /// Path cost to the node, when reported.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cost: Option<f64>,
    },

    /// The goal node was reached.
    Found {
        /// Goal node label.
        node: String,
        /// 1-based step counter.
        step: u64,
    },

    /// A local-search algorithm got stuck: no neighbor improves on the
    /// current node.
    LocalOptimum {
        /// Node label where the search stalled.
        node: String,
        /// 1-based step counter.
        step: u64,
    },

    /// A local-search algorithm moved to its best neighbor.
    MoveToNeighbor {
        /// Neighbor label moved to.
        node: String,
        /// 1-based step counter.
        step: u64,
        /// Heuristic value of the neighbor, when reported.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        heuristic: Option<f64>,
    },

    /// The complete solution path, emitted once before completion.
    FinalPath {
        /// Node labels from source to destination.
        path: Vec<String>,
        /// Total path cost.
        cost: f64,
        /// Wall-clock execution time in seconds.
        execution_time: f64,
    },

    /// The algorithm exhausted its options without reaching the goal.
    NoPath {
        /// Algorithm name, when the service includes it.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        algorithm: Option<String>,
        /// Service-provided explanation, when present.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },

    /// Explicit completion marker carrying the terminal outcome.
    Complete {
        /// The terminal outcome.
        result: Outcome,
    },

    /// The service reported an error mid-stream.
    Error {
        /// Error description.
        message: String,
    },
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Terminal result of a search: either a path with its statistics, or a
/// reason the search failed.
///
/// `Failure` is a normal, expected terminal state (no path exists, local
/// optimum reached), not an error.
///
/// On the wire the service encodes this as a flat `{"success": …}` object
/// ([`SearchResult`]); serde converts through that representation in both
/// directions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SearchResult", into = "SearchResult")]
pub enum Outcome {
    /// A path was found.
    Success {
        /// Node labels from source to destination.
        path: Vec<String>,
        /// Total path cost.
        cost: f64,
        /// Number of nodes the algorithm expanded.
        nodes_explored: usize,
        /// Wall-clock execution time in seconds.
        execution_time: f64,
        /// Human-readable algorithm name.
        algorithm: String,
    },
    /// No path was produced.
    Failure {
        /// Human-readable reason.
        reason: String,
    },
}

impl Outcome {
    /// True for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

// =============================================================================
// WIRE REPRESENTATION
// =============================================================================

/// The service's flat result object, as it appears on the wire.
///
/// All fields except `success` are optional; the service omits or zeroes
/// them depending on the branch taken. Failure reasons follow the original
/// display precedence: `message`, then `error`, then a fixed fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Whether a path was found.
    pub success: bool,
    /// Node labels from source to destination.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<String>,
    /// Total path cost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// Number of nodes the algorithm expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_explored: Option<usize>,
    /// Wall-clock execution time in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
    /// Human-readable algorithm name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    /// Human-readable summary or failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Machine-oriented failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SearchResult> for Outcome {
    fn from(result: SearchResult) -> Self {
        if result.success {
            Self::Success {
                nodes_explored: result.nodes_explored.unwrap_or(result.path.len()),
                path: result.path,
                cost: result.cost.unwrap_or(0.0),
                execution_time: result.execution_time.unwrap_or(0.0),
                algorithm: result.algorithm.unwrap_or_else(|| "unknown".to_string()),
            }
        } else {
            Self::Failure {
                reason: result
                    .message
                    .or(result.error)
                    .unwrap_or_else(|| "No path found".to_string()),
            }
        }
    }
}

impl From<Outcome> for SearchResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Success {
                path,
                cost,
                nodes_explored,
                execution_time,
                algorithm,
            } => Self {
                success: true,
                message: Some(format!("Path found using {algorithm}")),
                path,
                cost: Some(cost),
                nodes_explored: Some(nodes_explored),
                execution_time: Some(execution_time),
                algorithm: Some(algorithm),
                error: None,
            },
            Outcome::Failure { reason } => Self {
                success: false,
                path: Vec::new(),
                cost: None,
                nodes_explored: None,
                execution_time: None,
                algorithm: None,
                message: Some(reason),
                error: None,
            },
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
    fn exploring_deserializes_from_service_json() {
        // Captured from the service's step stream; extra fields are ignored.
        let json = r#"{
            "type": "exploring",
            "node": "Boston",
            "step": 3,
            "algorithm": "BFS",
            "frontier_size": 2,
            "cost": 4.5
        }"#;
        let event: StepEvent = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            event,
            StepEvent::Exploring {
                node: "Boston".to_string(),
                step: 3,
                algorithm: Some("BFS".to_string()),
                frontier_size: Some(2),
            }
        );
    }

    #[test]
    fn added_to_frontier_cost_is_optional() {
        let json = r#"{"type":"added_to_frontier","node":"B","parent":"A","step":1}"#;
        let event: StepEvent = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            event,
            StepEvent::AddedToFrontier {
                node: "B".to_string(),
                parent: "A".to_string(),
                step: 1,
                cost: None,
            }
        );
    }

    #[test]
    fn final_path_roundtrips() {
        let event = StepEvent::FinalPath {
            path: vec!["A".to_string(), "B".to_string()],
            cost: 3.5,
            execution_time: 0.002,
        };
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"type\":\"final_path\""));
        let back: StepEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn no_path_accepts_bare_and_annotated_forms() {
        let bare: StepEvent = serde_json::from_str(r#"{"type":"no_path"}"#).expect("deserialize");
        assert_eq!(
            bare,
            StepEvent::NoPath {
                algorithm: None,
                reason: None
            }
        );

        let annotated: StepEvent = serde_json::from_str(
            r#"{"type":"no_path","algorithm":"Hill Climbing","reason":"Maximum steps reached","node":"C","step":7}"#,
        )
        .expect("deserialize");
        assert_eq!(
            annotated,
            StepEvent::NoPath {
                algorithm: Some("Hill Climbing".to_string()),
                reason: Some("Maximum steps reached".to_string()),
            }
        );
    }

    #[test]
    fn outcome_failure_is_not_success() {
        let outcome = Outcome::Failure {
            reason: "No path found using BFS".to_string(),
        };
        assert!(!outcome.is_success());
    }

    #[test]
    fn outcome_deserializes_from_wire_result() {
        let json = r#"{
            "success": true,
            "path": ["New York", "Philadelphia", "Washington"],
            "cost": 2.0,
            "algorithm": "Breadth-First Search",
            "nodes_explored": 3,
            "execution_time": 0.000134,
            "message": "Path found using Breadth-First Search"
        }"#;
        let outcome: Outcome = serde_json::from_str(json).expect("deserialize");
        match outcome {
            Outcome::Success {
                path,
                nodes_explored,
                ..
            } => {
                assert_eq!(path.len(), 3);
                assert_eq!(nodes_explored, 3);
            }
            Outcome::Failure { .. } => unreachable!("expected success"),
        }
    }

    #[test]
    fn failure_reason_prefers_message_over_error() {
        let json = r#"{"success": false, "message": "No path exists between A and B", "error": "No path found"}"#;
        let outcome: Outcome = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            outcome,
            Outcome::Failure {
                reason: "No path exists between A and B".to_string()
            }
        );
    }

    #[test]
    fn failure_without_message_falls_back_to_error_field() {
        let json = r#"{"success": false, "error": "Unknown algorithm: warp"}"#;
        let outcome: Outcome = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            outcome,
            Outcome::Failure {
                reason: "Unknown algorithm: warp".to_string()
            }
        );
    }

    #[test]
    fn complete_event_carries_wire_result() {
        let json = r#"{"type":"complete","result":{"success":false,"message":"No path found using DFS"}}"#;
        let event: StepEvent = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            event,
            StepEvent::Complete {
                result: Outcome::Failure {
                    reason: "No path found using DFS".to_string()
                }
            }
        );
    }
}
