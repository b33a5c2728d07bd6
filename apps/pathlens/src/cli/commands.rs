//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::client::SearchClient;
use crate::driver::{Renderer, ReplayDriver};
use crate::error::AppError;
use crate::graphfile;
use pathlens_core::{
    Algorithm, DisplayPayload, GraphStore, NodeHighlight, NodeId, PathlensError, SearchRequest,
    VisualStateStore, present, project, render, to_text,
    primitives::{MAX_EDGES, MAX_NODES},
};
use std::path::Path;
use std::time::Duration;

/// Load the working graph: the given file, or the built-in sample.
fn load_graph(file: Option<&Path>) -> Result<GraphStore, AppError> {
    match file {
        Some(path) => graphfile::load(path),
        None => Ok(GraphStore::sample()),
    }
}

/// Resolve source and destination labels against the store.
fn resolve_endpoints(
    store: &GraphStore,
    source: &str,
    destination: &str,
) -> Result<(NodeId, NodeId), AppError> {
    let src = store
        .node_by_label(source)
        .ok_or_else(|| PathlensError::UnknownLabel(source.to_string()))?;
    let dst = store
        .node_by_label(destination)
        .ok_or_else(|| PathlensError::UnknownLabel(destination.to_string()))?;
    Ok((src, dst))
}

// =============================================================================
// REPLAY COMMAND
// =============================================================================

/// Prints replay output to the terminal.
struct TerminalRenderer {
    json_mode: bool,
    /// Node labels in snapshot order, aligned with the store's id order.
    labels: Vec<String>,
}

impl Renderer for TerminalRenderer {
    fn render_step(&mut self, line: &str, _visuals: &VisualStateStore) {
        println!("{line}");
    }

    fn render_outcome(&mut self, payload: &DisplayPayload, visuals: &VisualStateStore) {
        println!();
        if self.json_mode {
            match serde_json::to_string_pretty(payload) {
                Ok(json) => println!("{json}"),
                Err(e) => tracing::error!("cannot encode result: {e}"),
            }
        } else {
            print!("{}", to_text(payload));
            let highlighted: Vec<String> = self
                .labels
                .iter()
                .zip(visuals.node_states())
                .filter(|(_, (_, state))| *state != NodeHighlight::None)
                .map(|(label, (_, state))| format!("{label} [{state:?}]"))
                .collect();
            if !highlighted.is_empty() {
                println!("Final state: {}", highlighted.join(", "));
            }
        }
    }
}

/// Run a search in step mode and animate the recorded events.
pub async fn cmd_replay(
    file: Option<&Path>,
    server: &str,
    json_mode: bool,
    source: &str,
    destination: &str,
    algorithm: &str,
    interval_ms: u64,
) -> Result<(), AppError> {
    let store = load_graph(file)?;
    let snapshot = store.snapshot();
    let (src, dst) = resolve_endpoints(&store, source, destination)?;
    let algorithm: Algorithm = algorithm.parse().map_err(AppError::Core)?;
    let request = SearchRequest::build(&snapshot, Some(src), Some(dst), algorithm)?;

    let client = SearchClient::new(server.to_string());
    let response = client.run_steps(&request).await?;

    println!(
        "Replaying {algorithm} from \"{source}\" to \"{destination}\" ({} steps, {interval_ms} ms apart)",
        response.steps.len()
    );
    println!("Press Ctrl+C to stop");
    println!();

    let driver = ReplayDriver::new(Duration::from_millis(interval_ms));
    let mut renderer = TerminalRenderer {
        json_mode,
        labels: snapshot.nodes.iter().map(|n| n.label.clone()).collect(),
    };
    let finished = driver
        .run(&snapshot, response.steps, response.result, &mut renderer, async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    if finished.is_none() {
        println!();
        println!("Replay cancelled");
    }
    Ok(())
}

// =============================================================================
// SEARCH COMMAND
// =============================================================================

/// Run a search in direct mode and show the result immediately.
pub async fn cmd_search(
    file: Option<&Path>,
    server: &str,
    json_mode: bool,
    source: &str,
    destination: &str,
    algorithm: &str,
) -> Result<(), AppError> {
    let store = load_graph(file)?;
    let snapshot = store.snapshot();
    let (src, dst) = resolve_endpoints(&store, source, destination)?;
    let algorithm: Algorithm = algorithm.parse().map_err(AppError::Core)?;
    let request = SearchRequest::build(&snapshot, Some(src), Some(dst), algorithm)?;

    let client = SearchClient::new(server.to_string());
    let outcome = client.run_direct(&request).await?;
    let payload = present(&outcome);

    if json_mode {
        let json =
            serde_json::to_string_pretty(&payload).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{json}");
    } else {
        print!("{}", to_text(&payload));
    }
    Ok(())
}

// =============================================================================
// TREE COMMAND
// =============================================================================

/// Show the graph as a rooted spanning tree.
pub fn cmd_tree(file: Option<&Path>, json_mode: bool) -> Result<(), AppError> {
    let store = load_graph(file)?;
    let snapshot = store.snapshot();

    match project(&snapshot) {
        Some(tree) => {
            if json_mode {
                let json = serde_json::to_string_pretty(&tree)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                println!("{json}");
            } else {
                print!("{}", render(&tree));
            }
        }
        None => println!("Graph is empty"),
    }
    Ok(())
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate a graph and show its contents.
pub fn cmd_check(file: Option<&Path>, json_mode: bool) -> Result<(), AppError> {
    let store = load_graph(file)?;
    let snapshot = store.snapshot();

    if json_mode {
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AppError::Config(e.to_string()))?;
        println!("{json}");
        return Ok(());
    }

    println!("Graph:");
    println!("  Nodes: {} / {}", store.node_count(), MAX_NODES);
    println!("  Edges: {} / {}", store.edge_count(), MAX_EDGES);
    println!();
    for node in &snapshot.nodes {
        println!("  {}", node.label);
    }
    println!();
    for edge in &snapshot.edges {
        let from = snapshot.node(edge.from).map_or("?", |n| n.label.as_str());
        let to = snapshot.node(edge.to).map_or("?", |n| n.label.as_str());
        println!("  {from} <-> {to} (weight {})", edge.weight);
    }
    Ok(())
}

// =============================================================================
// SAMPLE COMMAND
// =============================================================================

/// Emit the built-in sample graph.
pub fn cmd_sample(output: Option<&Path>) -> Result<(), AppError> {
    let store = GraphStore::sample();
    match output {
        Some(path) => {
            graphfile::save(&store, path)?;
            println!("Sample graph written to '{}'", path.display());
        }
        None => {
            let text = graphfile::to_toml_string(&store)?;
            print!("{text}");
        }
    }
    Ok(())
}
