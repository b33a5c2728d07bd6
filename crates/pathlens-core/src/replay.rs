//! # Step Replay Engine
//!
//! Turns a finite, ordered [`StepEvent`] sequence plus a terminal
//! [`Outcome`] into visual-state mutations and a textual step log, one event
//! per tick.
//!
//! The engine is deliberately time-free: it advances only when `tick` is
//! called, so the fixed inter-event cadence belongs to whatever scheduler
//! drives it (the app uses a tokio interval). Only one event is ever in
//! flight, events are never reordered or re-applied, and the terminal
//! outcome handling runs exactly once — after which the engine holds no
//! state and further ticks are inert. `cancel` halts the remaining ticks
//! without any further mutation.

use crate::events::{Outcome, StepEvent};
use crate::graph::GraphSnapshot;
use crate::types::{EdgeId, NodeId};
use crate::visual::{EdgeHighlight, NodeHighlight, VisualStateStore};
use std::collections::BTreeMap;

// =============================================================================
// STEP LOG
// =============================================================================

/// Ordered, human-readable record of replayed steps.
///
/// One line per applied event; terminal outcome handling does not log (the
/// outcome itself reaches the caller through [`Tick::Finished`] and the
/// Result Presenter).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    lines: Vec<String>,
}

impl StepLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Drop every line. Called when a new search starts.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// The recorded lines, oldest first.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if nothing has been logged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// SNAPSHOT INDEX
// =============================================================================

/// Label→id lookup over the snapshot the replay runs against.
///
/// Events address nodes by label; highlights address them by id. Edges are
/// keyed by their normalized endpoint pair for undirected lookup.
#[derive(Debug, Clone)]
struct SnapshotIndex {
    nodes: BTreeMap<String, NodeId>,
    edges: BTreeMap<(NodeId, NodeId), EdgeId>,
}

impl SnapshotIndex {
    fn build(snapshot: &GraphSnapshot) -> Self {
        let nodes = snapshot
            .nodes
            .iter()
            .map(|n| (n.label.clone(), n.id))
            .collect();
        let edges = snapshot
            .edges
            .iter()
            .map(|e| (Self::key(e.from, e.to), e.id))
            .collect();
        Self { nodes, edges }
    }

    fn key(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
        if a <= b { (a, b) } else { (b, a) }
    }

    fn node(&self, label: &str) -> Option<NodeId> {
        self.nodes.get(label).copied()
    }

    fn edge_between(&self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        self.edges.get(&Self::key(a, b)).copied()
    }
}

// =============================================================================
// REPLAY
// =============================================================================

/// Result of a single replay tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Tick {
    /// One event was applied; more remain.
    Applied,
    /// The terminal outcome was handled on this tick. Happens exactly once
    /// per replay.
    Finished(Outcome),
    /// The replay already finished or was cancelled; nothing was mutated.
    Idle,
}

/// The replay state machine.
///
/// Construct with the snapshot the events refer to, then drive with `tick`
/// until it yields [`Tick::Finished`].
#[derive(Debug, Clone)]
pub struct Replay {
    index: SnapshotIndex,
    events: Vec<StepEvent>,
    cursor: usize,
    outcome: Option<Outcome>,
    cancelled: bool,
}

impl Replay {
    /// Create a replay over `events`, resolving to `outcome` when exhausted.
    #[must_use]
    pub fn new(snapshot: &GraphSnapshot, events: Vec<StepEvent>, outcome: Outcome) -> Self {
        Self {
            index: SnapshotIndex::build(snapshot),
            events,
            cursor: 0,
            outcome: Some(outcome),
            cancelled: false,
        }
    }

    /// True once the terminal handler has run or the replay was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.outcome.is_none()
    }

    /// Halt the replay: remaining ticks become inert and perform no further
    /// mutation. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Apply the next event, or the terminal outcome handling if the event
    /// sequence is exhausted.
    pub fn tick(&mut self, visuals: &mut VisualStateStore, log: &mut StepLog) -> Tick {
        if self.is_finished() {
            return Tick::Idle;
        }

        if self.cursor < self.events.len() {
            let event = self.events[self.cursor].clone();
            self.cursor += 1;

            // An explicit completion marker short-circuits to the same
            // terminal handling as running off the end of the sequence.
            if let StepEvent::Complete { result } = event {
                self.outcome = Some(result);
                return self.finish(visuals);
            }

            self.apply(&event, visuals, log);
            // Even when this was the last event, terminal handling waits for
            // the next tick so the event holds the screen for one interval.
            Tick::Applied
        } else {
            self.finish(visuals)
        }
    }

    /// Terminal outcome handling. Runs at most once.
    fn finish(&mut self, visuals: &mut VisualStateStore) -> Tick {
        let Some(outcome) = self.outcome.take() else {
            return Tick::Idle;
        };
        if let Outcome::Success { path, .. } = &outcome {
            self.highlight_path(path, visuals);
        }
        // Failure leaves interim highlighting as-is; the reason reaches the
        // caller inside the outcome.
        Tick::Finished(outcome)
    }

    /// Apply one event's visual mutations and log line.
    fn apply(&self, event: &StepEvent, visuals: &mut VisualStateStore, log: &mut StepLog) {
        match event {
            StepEvent::Start {
                algorithm,
                source,
                destination,
            } => {
                log.push(format!(
                    "Starting {algorithm} from {source} to {destination}"
                ));
            }

            StepEvent::Exploring {
                node,
                step,
                algorithm,
                frontier_size,
            } => {
                if let Some(id) = self.index.node(node) {
                    visuals.begin_exploring(id);
                }
                let mut line = format!("Step {step}: Exploring node \"{node}\"");
                if let Some(algorithm) = algorithm {
                    line.push_str(&format!(" ({algorithm})"));
                }
                if let Some(size) = frontier_size {
                    line.push_str(&format!(" | Frontier size: {size}"));
                }
                log.push(line);
            }

            StepEvent::AddedToFrontier {
                node,
                parent,
                step,
                cost,
            } => {
                if let Some(id) = self.index.node(node) {
                    visuals.set_node_state(id, NodeHighlight::Frontier);
                }
                let mut line =
                    format!("Step {step}: Added \"{node}\" to frontier from \"{parent}\"");
                if let Some(cost) = cost {
                    line.push_str(&format!(" (Cost: {cost:.2})"));
                }
                log.push(line);
            }

            StepEvent::Found { node, step } => {
                if let Some(id) = self.index.node(node) {
                    visuals.set_node_state(id, NodeHighlight::Found);
                }
                log.push(format!("Step {step}: Found goal \"{node}\"!"));
            }

            StepEvent::LocalOptimum { node, step } => {
                if let Some(id) = self.index.node(node) {
                    visuals.begin_exploring(id);
                }
                log.push(format!(
                    "Step {step}: Local optimum reached at \"{node}\""
                ));
            }

            StepEvent::MoveToNeighbor {
                node,
                step,
                heuristic,
            } => {
                if let Some(id) = self.index.node(node) {
                    visuals.begin_exploring(id);
                }
                let mut line = format!("Step {step}: Moving to better neighbor \"{node}\"");
                if let Some(heuristic) = heuristic {
                    line.push_str(&format!(" (Heuristic: {heuristic:.2})"));
                }
                log.push(line);
            }

            StepEvent::FinalPath {
                path,
                cost,
                execution_time,
            } => {
                self.highlight_path(path, visuals);
                log.push(format!(
                    "Path found: {} (Cost: {cost:.2}) (Time: {})",
                    path.join(" → "),
                    crate::present::format_duration(*execution_time),
                ));
            }

            StepEvent::NoPath { algorithm, reason } => {
                let line = match (algorithm, reason) {
                    (Some(algorithm), _) => format!("No path found using {algorithm}"),
                    (None, Some(reason)) => format!("No path found: {reason}"),
                    (None, None) => "No path found".to_string(),
                };
                log.push(line);
            }

            StepEvent::Error { message } => {
                log.push(format!("Error: {message}"));
            }

            // Handled in `tick` before dispatch.
            StepEvent::Complete { .. } => {}
        }
    }

    /// Full-path highlight: clear interim markers, then set every path node
    /// and each connecting undirected edge to `OnPath`.
    fn highlight_path(&self, path: &[String], visuals: &mut VisualStateStore) {
        visuals.reset_all();
        for label in path {
            if let Some(id) = self.index.node(label) {
                visuals.set_node_state(id, NodeHighlight::OnPath);
            }
        }
        for pair in path.windows(2) {
            let from = self.index.node(&pair[0]);
            let to = self.index.node(&pair[1]);
            if let (Some(from), Some(to)) = (from, to) {
                if let Some(edge) = self.index.edge_between(from, to) {
                    visuals.set_edge_state(edge, EdgeHighlight::OnPath);
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
