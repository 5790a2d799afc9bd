//! User-facing [`RealtimeMembrane`] API.
//!
//! A background clock thread advances the membrane at a fixed rate while
//! any number of user threads strike it and read the latest frame.
//!
//! ```text
//! User Thread(s)                 Clock Thread
//!     |                              |
//!     |--strike(point)-------------->| strike_rx.try_recv()
//!     |   [strike_tx: bounded(64)]   | sim.excite_at(point)
//!     |                              | sim.advance()
//!     |<--latest()/metrics()---------| publish snapshot + metrics
//!     |   [Mutex<Published>]         | park(budget - elapsed)
//!     |                              |
//!     |--shutdown()----------------->| flag + unpark, loop exits
//!     |<--MembraneSimulator----------| returned through join()
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, TrySendError};
use membrane_core::GridPoint;
use membrane_sim::{MembraneConfig, MembraneSimulator, MembraneSnapshot};

use crate::clock_thread::{lock, ClockThreadState, PublishSlot};
use crate::config::{EngineConfig, EngineError};
use crate::metrics::FrameMetrics;

// ── SubmitError ──────────────────────────────────────────────────

/// Error queueing a strike for the clock thread.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The clock thread has shut down.
    Shutdown,
    /// The strike queue is full (back-pressure).
    ChannelFull,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Shutdown => write!(f, "clock thread has shut down"),
            Self::ChannelFull => write!(f, "strike queue full"),
        }
    }
}

impl std::error::Error for SubmitError {}

// ── RealtimeMembrane ─────────────────────────────────────────────

/// A membrane advanced by a background clock thread.
///
/// Dropping a `RealtimeMembrane` stops and joins the clock thread; call
/// [`shutdown()`](Self::shutdown) instead to get the simulator back.
pub struct RealtimeMembrane {
    strike_tx: Option<Sender<GridPoint>>,
    published: PublishSlot,
    shutdown_flag: Arc<AtomicBool>,
    clock_stopped: Arc<AtomicBool>,
    clock_thread: Option<JoinHandle<MembraneSimulator>>,
    config: EngineConfig,
    grid_size: u32,
}

impl RealtimeMembrane {
    /// Build a zeroed membrane from `membrane` and start its clock.
    pub fn new(membrane: MembraneConfig, engine: EngineConfig) -> Result<Self, EngineError> {
        let sim = MembraneSimulator::new(membrane)?;
        Self::start(sim, engine)
    }

    /// Move `sim` onto a new clock thread and start advancing it.
    ///
    /// The first frame runs immediately; [`latest()`](Self::latest) stays
    /// `None` until it has been published.
    pub fn start(sim: MembraneSimulator, config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let frame_budget = config.frame_budget()?;
        let grid_size = sim.grid_size();

        let published = PublishSlot::default();
        let shutdown_flag = Arc::new(AtomicBool::new(false));
        let clock_stopped = Arc::new(AtomicBool::new(false));
        let (strike_tx, strike_rx) = crossbeam_channel::bounded(config.strike_queue_capacity);

        let state = ClockThreadState::new(
            sim,
            strike_rx,
            Arc::clone(&published),
            Arc::clone(&shutdown_flag),
            Arc::clone(&clock_stopped),
            frame_budget,
        );
        let clock_thread = thread::Builder::new()
            .name("membrane-clock".into())
            .spawn(move || state.run())
            .map_err(|e| EngineError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            strike_tx: Some(strike_tx),
            published,
            shutdown_flag,
            clock_stopped,
            clock_thread: Some(clock_thread),
            config,
            grid_size,
        })
    }

    /// Queue a strike for the next frame.
    ///
    /// Non-blocking. Whether the strike lands inside the membrane is
    /// decided on the clock thread; rejected strikes are counted in
    /// [`FrameMetrics::strikes_rejected`].
    pub fn strike(&self, point: GridPoint) -> Result<(), SubmitError> {
        let tx = self.strike_tx.as_ref().ok_or(SubmitError::Shutdown)?;
        tx.try_send(point).map_err(|e| match e {
            TrySendError::Full(_) => SubmitError::ChannelFull,
            TrySendError::Disconnected(_) => SubmitError::Shutdown,
        })
    }

    /// The most recently published frame, if any.
    pub fn latest(&self) -> Option<Arc<MembraneSnapshot>> {
        lock(&self.published).snapshot.clone()
    }

    /// Metrics of the most recently published frame.
    pub fn metrics(&self) -> FrameMetrics {
        lock(&self.published).metrics
    }

    /// Whether the clock thread is still running.
    pub fn is_running(&self) -> bool {
        !self.clock_stopped.load(Ordering::Acquire)
    }

    /// Side length of the simulated grid.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// The engine configuration in effect.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Stop the clock and recover the simulator, including every strike
    /// applied so far.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ClockThreadPanicked`] if the clock thread
    /// panicked.
    pub fn shutdown(mut self) -> Result<MembraneSimulator, EngineError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<MembraneSimulator, EngineError> {
        self.shutdown_flag.store(true, Ordering::Release);
        self.strike_tx.take();
        let handle = self
            .clock_thread
            .take()
            .ok_or(EngineError::ClockThreadPanicked)?;
        // Wake the clock thread from its budget sleep.
        handle.thread().unpark();
        handle.join().map_err(|_| EngineError::ClockThreadPanicked)
    }
}

impl Drop for RealtimeMembrane {
    fn drop(&mut self) {
        if self.clock_thread.is_some() {
            let _ = self.stop();
        }
    }
}

impl std::fmt::Debug for RealtimeMembrane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RealtimeMembrane")
            .field("grid_size", &self.grid_size)
            .field("frame_rate_hz", &self.config.frame_rate_hz)
            .field("running", &self.is_running())
            .finish()
    }
}
