//! # pathlens-core
//!
//! The deterministic replay engine for Pathlens - THE LOGIC.
//!
//! This crate implements the visualization substrate: an editable graph with
//! immutable snapshots, a spanning-tree projector, a display-agnostic visual
//! state store, and a tick-driven step replay engine that animates the event
//! stream a search service produces.
//!
//! ## Architectural Constraints
//!
//! The CORE:
//! - Owns all validation: snapshots handed downstream are always valid
//! - Never runs an algorithm; it only interprets recorded step events
//! - Is time-free: cadence belongs to whatever scheduler drives `tick`
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod events;
pub mod graph;
pub mod present;
pub mod primitives;
pub mod protocol;
pub mod replay;
pub mod tree;
pub mod types;
pub mod visual;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{Algorithm, Edge, EdgeId, Node, NodeId, PathlensError};

// =============================================================================
// RE-EXPORTS: Graph and Projections
// =============================================================================

pub use graph::{GraphSnapshot, GraphStore};
pub use tree::{TreeNode, project, render};
pub use visual::{EdgeHighlight, NodeHighlight, VisualStateStore};

// =============================================================================
// RE-EXPORTS: Replay and Presentation
// =============================================================================

pub use events::{Outcome, SearchResult, StepEvent};
pub use present::{DisplayPayload, format_cost, format_duration, present, to_text};
pub use protocol::{SearchRequest, StepReply, StepResponse, WireEdge, WireNode};
pub use replay::{Replay, StepLog, Tick};
