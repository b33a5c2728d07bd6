//! # Core Type Definitions
//!
//! This module contains the shared types for the Pathlens replay core:
//! - Graph identifiers (`NodeId`, `EdgeId`)
//! - Graph elements (`Node`, `Edge`)
//! - The algorithm selector sent to the Search Service (`Algorithm`)
//! - Error types (`PathlensError`)
//!
//! ## Determinism Guarantees
//!
//! Identifiers implement `Ord` so every collection in the core can use
//! `BTreeMap`/`BTreeSet` and iterate in a stable order. Ids are assigned
//! monotonically by the `GraphStore`, so iteration order equals insertion
//! order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// GRAPH IDENTIFIERS
// =============================================================================

/// Unique identifier for a node in the graph.
///
/// Opaque and immutable once created; display labels are a separate,
/// user-facing concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

/// Unique identifier for an edge in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub u64);

// =============================================================================
// GRAPH ELEMENTS
// =============================================================================

/// A graph node: an opaque id plus a unique display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Immutable identifier assigned at creation.
    pub id: NodeId,
    /// Display label, unique within a graph.
    pub label: String,
}

impl Node {
    /// Create a new node.
    #[must_use]
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// An undirected weighted edge between two nodes.
///
/// An edge A↔B is the same logical edge as B↔A; the store rejects
/// duplicates in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier assigned at creation.
    pub id: EdgeId,
    /// One endpoint.
    pub from: NodeId,
    /// The other endpoint.
    pub to: NodeId,
    /// Non-negative traversal cost.
    pub weight: f64,
}

impl Edge {
    /// Create a new edge.
    #[must_use]
    pub const fn new(id: EdgeId, from: NodeId, to: NodeId, weight: f64) -> Self {
        Self {
            id,
            from,
            to,
            weight,
        }
    }

    /// True if this edge connects `a` and `b` in either direction.
    #[must_use]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

// =============================================================================
// ALGORITHM SELECTOR
// =============================================================================

/// The search algorithm requested from the Search Service.
///
/// The core never executes any of these; the variant is carried on the wire
/// and echoed back in log lines and result payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
    BestFirst,
    HillClimbing,
}

impl Algorithm {
    /// The wire identifier sent to the Search Service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::AStar => "a_star",
            Self::BestFirst => "best_first",
            Self::HillClimbing => "hill_climbing",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = PathlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "dijkstra" => Ok(Self::Dijkstra),
            "a_star" | "astar" => Ok(Self::AStar),
            "best_first" => Ok(Self::BestFirst),
            "hill_climbing" => Ok(Self::HillClimbing),
            other => Err(PathlensError::UnknownAlgorithm(other.to_string())),
        }
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors produced by the Pathlens core.
///
/// All validation happens synchronously, before any request leaves the
/// process; every variant is user-actionable. Transport failures live in the
/// app layer, and an algorithm that finds no path is an `Outcome::Failure`,
/// not an error.
#[derive(Debug, Error)]
pub enum PathlensError {
    /// A node with this label already exists.
    #[error("a node labeled \"{0}\" already exists")]
    DuplicateLabel(String),

    /// Edges from a node to itself are rejected.
    #[error("cannot create an edge from \"{0}\" to itself")]
    SelfEdge(String),

    /// An undirected edge between these nodes already exists.
    #[error("an edge between \"{0}\" and \"{1}\" already exists")]
    DuplicateEdge(String, String),

    /// Edge weights must be non-negative.
    #[error("edge weight {0} is negative")]
    NegativeWeight(f64),

    /// The graph already holds the maximum number of nodes.
    #[error("too many nodes: the maximum is {limit} nodes")]
    NodeLimitExceeded {
        /// The enforced ceiling.
        limit: usize,
    },

    /// The graph already holds the maximum number of edges.
    #[error("too many edges: the maximum is {limit} edges")]
    EdgeLimitExceeded {
        /// The enforced ceiling.
        limit: usize,
    },

    /// Source or destination was not supplied.
    #[error("both source and destination nodes must be selected")]
    MissingEndpoint,

    /// Source and destination must differ.
    #[error("source and destination cannot be the same node")]
    SameSourceDestination,

    /// The referenced node id does not exist in the snapshot.
    #[error("node not found: {0:?}")]
    UnknownNode(NodeId),

    /// The referenced label does not exist in the graph.
    #[error("no node labeled \"{0}\"")]
    UnknownLabel(String),

    /// The referenced edge id does not exist.
    #[error("edge not found: {0:?}")]
    UnknownEdge(EdgeId),

    /// The algorithm name was not recognized.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A replay is already running against this visual state.
    #[error("a replay is already in progress")]
    ReplayInProgress,

    /// A serialization or deserialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_connects_either_direction() {
        let edge = Edge::new(EdgeId(0), NodeId(1), NodeId(2), 4.0);
        assert!(edge.connects(NodeId(1), NodeId(2)));
        assert!(edge.connects(NodeId(2), NodeId(1)));
        assert!(!edge.connects(NodeId(1), NodeId(3)));
    }

    #[test]
    fn algorithm_roundtrips_through_str() {
        for alg in [
            Algorithm::Bfs,
            Algorithm::Dfs,
            Algorithm::Dijkstra,
            Algorithm::AStar,
            Algorithm::BestFirst,
            Algorithm::HillClimbing,
        ] {
            let parsed: Algorithm = alg.as_str().parse().expect("parse");
            assert_eq!(parsed, alg);
        }
    }

    #[test]
    fn algorithm_accepts_astar_alias() {
        let parsed: Algorithm = "astar".parse().expect("parse");
        assert_eq!(parsed, Algorithm::AStar);
    }

    #[test]
    fn algorithm_rejects_unknown_name() {
        let result = "quantum_walk".parse::<Algorithm>();
        assert!(matches!(result, Err(PathlensError::UnknownAlgorithm(_))));
    }

    #[test]
    fn node_limit_error_names_ceiling() {
        let err = PathlensError::NodeLimitExceeded { limit: 20 };
        assert!(err.to_string().contains("20"));
    }

    #[test]
    fn algorithm_serde_uses_snake_case() {
        let json = serde_json::to_string(&Algorithm::AStar).expect("serialize");
        assert_eq!(json, "\"a_star\"");
    }
}
