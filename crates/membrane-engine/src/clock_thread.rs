//! Frame loop run by the realtime clock thread.
//!
//! The clock thread owns the [`MembraneSimulator`] exclusively (moved in
//! via `thread::spawn`). Strikes arrive over a bounded crossbeam channel;
//! the only lock is the publish slot, taken once per frame after
//! `advance()` has finished.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use membrane_core::GridPoint;
use membrane_sim::{MembraneSimulator, MembraneSnapshot};

use crate::metrics::FrameMetrics;

/// Latest frame handed from the clock thread to readers.
#[derive(Debug, Default)]
pub(crate) struct Published {
    pub snapshot: Option<Arc<MembraneSnapshot>>,
    pub metrics: FrameMetrics,
}

/// Shared publish slot.
pub(crate) type PublishSlot = Arc<Mutex<Published>>;

/// Lock the publish slot, ignoring poisoning: the slot holds plain data
/// that is replaced wholesale each frame.
pub(crate) fn lock(slot: &Mutex<Published>) -> std::sync::MutexGuard<'_, Published> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// State held by the clock thread's main loop.
pub(crate) struct ClockThreadState {
    sim: MembraneSimulator,
    strike_rx: Receiver<GridPoint>,
    published: PublishSlot,
    shutdown_flag: Arc<AtomicBool>,
    clock_stopped: Arc<AtomicBool>,
    frame_budget: Duration,
    metrics: FrameMetrics,
}

impl ClockThreadState {
    pub fn new(
        sim: MembraneSimulator,
        strike_rx: Receiver<GridPoint>,
        published: PublishSlot,
        shutdown_flag: Arc<AtomicBool>,
        clock_stopped: Arc<AtomicBool>,
        frame_budget: Duration,
    ) -> Self {
        let metrics = FrameMetrics {
            frame: sim.frame(),
            ..FrameMetrics::default()
        };
        Self {
            sim,
            strike_rx,
            published,
            shutdown_flag,
            clock_stopped,
            frame_budget,
            metrics,
        }
    }

    /// Main frame loop. Runs until `shutdown_flag` is set.
    ///
    /// Consumes self and returns the simulator so the owner can recover
    /// it through the `JoinHandle`.
    pub fn run(mut self) -> MembraneSimulator {
        tracing::info!(
            budget_us = self.frame_budget.as_micros() as u64,
            grid_size = self.sim.grid_size(),
            "membrane clock started"
        );

        while !self.shutdown_flag.load(Ordering::Acquire) {
            let frame_start = Instant::now();

            // 1. Strikes received since the last frame.
            self.drain_strikes();

            // 2. Advance.
            let advance_start = Instant::now();
            self.sim.advance();
            self.metrics.advance_us = advance_start.elapsed().as_micros() as u64;
            self.metrics.frame = self.sim.frame();

            // 3. Publish.
            let snapshot = Arc::new(self.sim.snapshot());
            {
                let mut slot = lock(&self.published);
                slot.snapshot = Some(snapshot);
                slot.metrics = self.metrics;
            }

            // 4. Sleep for the remaining budget.
            let elapsed = frame_start.elapsed();
            if elapsed < self.frame_budget {
                self.park_until(frame_start + self.frame_budget);
            } else {
                self.metrics.overruns += 1;
                tracing::warn!(
                    frame = %self.metrics.frame,
                    elapsed_us = elapsed.as_micros() as u64,
                    budget_us = self.frame_budget.as_micros() as u64,
                    "frame overran its budget"
                );
            }
        }

        self.clock_stopped.store(true, Ordering::Release);
        tracing::info!(
            frames = self.metrics.frame.0,
            strikes_applied = self.metrics.strikes_applied,
            strikes_rejected = self.metrics.strikes_rejected,
            overruns = self.metrics.overruns,
            "membrane clock stopped"
        );
        self.sim
    }

    /// Apply every queued strike, in arrival order.
    fn drain_strikes(&mut self) {
        while let Ok(point) = self.strike_rx.try_recv() {
            match self.sim.excite_at(point) {
                Ok(()) => self.metrics.strikes_applied += 1,
                Err(e) => {
                    self.metrics.strikes_rejected += 1;
                    tracing::debug!(%point, error = %e, "strike rejected");
                }
            }
        }
    }

    /// Park until `deadline` or until shutdown is requested. `park_timeout`
    /// can wake spuriously, and the owner unparks on shutdown.
    fn park_until(&self, deadline: Instant) {
        loop {
            if self.shutdown_flag.load(Ordering::Acquire) {
                return;
            }
            let now = Instant::now();
            if now >= deadline {
                return;
            }
            std::thread::park_timeout(deadline - now);
        }
    }
}
