//! # Graph File Format
//!
//! TOML load/save for user-edited graphs. Nodes are declared by label and
//! edges reference labels, so files stay hand-editable; ids are assigned on
//! load. All core validation applies, so a file that breaks a graph rule
//! (duplicate label, self-edge, ceiling) fails to load with the same error a
//! direct edit would produce.
//!
//! ```toml
//! [[nodes]]
//! label = "New York"
//!
//! [[edges]]
//! from = "New York"
//! to = "Boston"
//! weight = 2.0
//! ```

use crate::error::AppError;
use pathlens_core::{GraphStore, PathlensError};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize)]
struct GraphFile {
    #[serde(default)]
    nodes: Vec<NodeSpec>,
    #[serde(default)]
    edges: Vec<EdgeSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeSpec {
    label: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeSpec {
    from: String,
    to: String,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Parse a graph from TOML text.
pub fn from_toml_str(text: &str) -> Result<GraphStore, AppError> {
    let file: GraphFile = toml::from_str(text).map_err(|e| AppError::Config(e.to_string()))?;

    let mut store = GraphStore::new();
    for node in &file.nodes {
        store.add_node(node.label.clone())?;
    }
    for edge in &file.edges {
        let from = store
            .node_by_label(&edge.from)
            .ok_or_else(|| PathlensError::UnknownLabel(edge.from.clone()))?;
        let to = store
            .node_by_label(&edge.to)
            .ok_or_else(|| PathlensError::UnknownLabel(edge.to.clone()))?;
        store.add_edge(from, to, edge.weight)?;
    }
    Ok(store)
}

/// Load a graph from a TOML file.
pub fn load(path: &Path) -> Result<GraphStore, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("cannot read '{}': {e}", path.display())))?;
    from_toml_str(&text)
}

/// Encode a graph as TOML text.
pub fn to_toml_string(store: &GraphStore) -> Result<String, AppError> {
    let snapshot = store.snapshot();
    let file = GraphFile {
        nodes: snapshot
            .nodes
            .iter()
            .map(|n| NodeSpec {
                label: n.label.clone(),
            })
            .collect(),
        edges: snapshot
            .edges
            .iter()
            .map(|e| {
                // Snapshot edges always reference snapshot nodes.
                let from = snapshot.node(e.from).map(|n| n.label.clone());
                let to = snapshot.node(e.to).map(|n| n.label.clone());
                EdgeSpec {
                    from: from.unwrap_or_default(),
                    to: to.unwrap_or_default(),
                    weight: e.weight,
                }
            })
            .collect(),
    };
    toml::to_string(&file).map_err(|e| AppError::Config(e.to_string()))
}

/// Save a graph to a TOML file.
pub fn save(store: &GraphStore, path: &Path) -> Result<(), AppError> {
    let text = to_toml_string(store)?;
    std::fs::write(path, text)
        .map_err(|e| AppError::Io(format!("cannot write '{}': {e}", path.display())))
}

// =============================================================================
// TESTS
// =============================================================================
