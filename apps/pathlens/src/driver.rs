//! # Replay Driver
//!
//! Owns the cadence the pure core engine deliberately does not: a tokio
//! interval calls `tick` at a fixed rate, a renderer shows each applied step,
//! and a shutdown future cancels the replay mid-flight.
//!
//! The driver admits one replay at a time; starting a second while one runs
//! is rejected without touching the active replay.

use pathlens_core::{
    DisplayPayload, GraphSnapshot, Outcome, PathlensError, Replay, StepEvent, StepLog, Tick,
    VisualStateStore, present,
};
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Receives replay output as it happens.
pub trait Renderer {
    /// A step was applied; `line` is its log entry.
    fn render_step(&mut self, line: &str, visuals: &VisualStateStore);

    /// The replay reached its terminal outcome.
    fn render_outcome(&mut self, payload: &DisplayPayload, visuals: &VisualStateStore);
}

/// Drives replays at a fixed interval, one at a time.
pub struct ReplayDriver {
    interval: Duration,
    active: AtomicBool,
}

impl ReplayDriver {
    /// Create a driver with the given inter-step interval.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            active: AtomicBool::new(false),
        }
    }

    /// Run a replay to completion or cancellation.
    ///
    /// Returns `Ok(Some(outcome))` when the replay finished, `Ok(None)` when
    /// the shutdown future fired first, and `Err(ReplayInProgress)` when
    /// another replay is already running on this driver.
    pub async fn run<R: Renderer>(
        &self,
        snapshot: &GraphSnapshot,
        steps: Vec<StepEvent>,
        outcome: Outcome,
        renderer: &mut R,
        shutdown: impl Future<Output = ()>,
    ) -> Result<Option<Outcome>, PathlensError> {
        if self.active.swap(true, Ordering::SeqCst) {
            return Err(PathlensError::ReplayInProgress);
        }
        let result = self
            .drive(snapshot, steps, outcome, renderer, shutdown)
            .await;
        self.active.store(false, Ordering::SeqCst);
        Ok(result)
    }

    async fn drive<R: Renderer>(
        &self,
        snapshot: &GraphSnapshot,
        steps: Vec<StepEvent>,
        outcome: Outcome,
        renderer: &mut R,
        shutdown: impl Future<Output = ()>,
    ) -> Option<Outcome> {
        let step_count = steps.len();
        tracing::info!(steps = step_count, "starting replay");

        let mut visuals = VisualStateStore::for_snapshot(snapshot);
        let mut log = StepLog::new();
        let mut replay = Replay::new(snapshot, steps, outcome);

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    match replay.tick(&mut visuals, &mut log) {
                        Tick::Applied => {
                            if let Some(line) = log.lines().last() {
                                renderer.render_step(line, &visuals);
                            }
                        }
                        Tick::Finished(outcome) => {
                            tracing::info!(success = outcome.is_success(), "replay finished");
                            renderer.render_outcome(&present(&outcome), &visuals);
                            return Some(outcome);
                        }
                        Tick::Idle => return None,
                    }
                }
                () = &mut shutdown => {
                    replay.cancel();
                    tracing::info!(applied = log.len(), "replay cancelled");
                    return None;
                }
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
