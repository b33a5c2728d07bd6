//! # Result Presenter
//!
//! Turns a terminal [`Outcome`] into a display payload: joined path string,
//! two-decimal cost, adaptive execution-time formatting. Pure data in, pure
//! data out.

use crate::events::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A terminal outcome shaped for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayPayload {
    /// Whether a path was found.
    pub success: bool,
    /// Headline line, e.g. `"Path found using Dijkstra"`.
    pub headline: String,
    /// `"A → B → C"`, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Cost with two decimal places, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    /// Nodes-explored count, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_explored: Option<usize>,
    /// Adaptive execution time, e.g. `"134 µs"`, present only on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<String>,
}

/// Build the display payload for an outcome.
#[must_use]
pub fn present(outcome: &Outcome) -> DisplayPayload {
    match outcome {
        Outcome::Success {
            path,
            cost,
            nodes_explored,
            execution_time,
            algorithm,
        } => DisplayPayload {
            success: true,
            headline: format!("Path found using {algorithm}"),
            path: Some(path.join(" → ")),
            cost: Some(format_cost(*cost)),
            nodes_explored: Some(*nodes_explored),
            execution_time: Some(format_duration(*execution_time)),
        },
        Outcome::Failure { reason } => DisplayPayload {
            success: false,
            headline: reason.clone(),
            path: None,
            cost: None,
            nodes_explored: None,
            execution_time: None,
        },
    }
}

/// Render the payload as a small text block for terminal output.
#[must_use]
pub fn to_text(payload: &DisplayPayload) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", payload.headline);
    if let Some(path) = &payload.path {
        let _ = writeln!(out, "Path: {path}");
    }
    if let Some(cost) = &payload.cost {
        let _ = writeln!(out, "Cost: {cost}");
    }
    if let Some(count) = payload.nodes_explored {
        let _ = writeln!(out, "Nodes explored: {count}");
    }
    if let Some(time) = &payload.execution_time {
        let _ = writeln!(out, "Time: {time}");
    }
    out
}

/// Two-decimal cost formatting.
#[must_use]
pub fn format_cost(cost: f64) -> String {
    format!("{cost:.2}")
}

/// Adaptive duration formatting from seconds: microseconds below one
/// millisecond, milliseconds below one second, seconds otherwise. Trailing
/// zeros after the decimal point are trimmed.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.001 {
        format!("{:.0} µs", seconds * 1_000_000.0)
    } else if seconds < 1.0 {
        format!("{} ms", trim_zeros(&format!("{:.2}", seconds * 1000.0)))
    } else {
        format!("{} s", trim_zeros(&format!("{seconds:.3}")))
    }
}

fn trim_zeros(value: &str) -> String {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        value.to_string()
    }
}

// =============================================================================
// TESTS
// =============================================================================
