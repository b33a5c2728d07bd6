//! # Innate Primitives
//!
//! Hardcoded runtime constants for the Pathlens core.
//!
//! These values are compiled into the binary and immutable at runtime. The
//! graph-size ceilings are enforced at the boundary (graph construction and
//! request building), never inside the replay engine.

/// Maximum number of nodes a graph may hold.
///
/// Submissions above this ceiling are rejected before any request is sent,
/// with an error that names the limit.
pub const MAX_NODES: usize = 20;

/// Maximum number of edges a graph may hold.
pub const MAX_EDGES: usize = 50;

/// Default delay between consecutive replay events, in milliseconds.
///
/// The scheduler owns the cadence; the core engine itself is tick-driven
/// and time-free.
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 800;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceilings_match_service_limits() {
        assert_eq!(MAX_NODES, 20);
        assert_eq!(MAX_EDGES, 50);
    }
}
