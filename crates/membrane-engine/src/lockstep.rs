//! Lockstep (caller-driven) frame driver.
//!
//! [`LockstepMembrane`] owns a simulator and advances it exactly once per
//! [`step_frame()`](LockstepMembrane::step_frame) call. Strikes passed to
//! a frame are applied in order before that frame's `advance()`, matching
//! a GUI that collects pointer presses between timer ticks. No background
//! threads are involved.

use membrane_core::{ExciteError, FrameId, GridPoint};
use membrane_sim::{ConfigError, MembraneConfig, MembraneSimulator, MembraneSnapshot};

// ── FrameReport ─────────────────────────────────────────────────

/// Outcome of one [`LockstepMembrane::step_frame()`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Frame produced by this call.
    pub frame: FrameId,
    /// Strikes that excited the membrane.
    pub applied: usize,
    /// Strikes that were rejected, in submission order. The membrane was
    /// left untouched by each of them.
    pub rejected: Vec<ExciteError>,
    /// Largest absolute displacement after the frame.
    pub peak_amplitude: f32,
}

// ── LockstepMembrane ────────────────────────────────────────────

/// Single-threaded membrane driven one frame at a time.
///
/// # Example
///
/// ```
/// use membrane_core::GridPoint;
/// use membrane_engine::LockstepMembrane;
/// use membrane_sim::MembraneConfig;
///
/// let mut drum = LockstepMembrane::new(MembraneConfig::default()).unwrap();
/// let report = drum.step_frame(&[GridPoint::new(50, 50), GridPoint::new(0, 0)]);
/// assert_eq!(report.applied, 1);
/// assert_eq!(report.rejected.len(), 1);
/// assert_eq!(report.frame.0, 1);
/// ```
#[derive(Debug)]
pub struct LockstepMembrane {
    sim: MembraneSimulator,
}

impl LockstepMembrane {
    /// Build a zeroed membrane from `config`.
    pub fn new(config: MembraneConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            sim: MembraneSimulator::new(config)?,
        })
    }

    /// Wrap an existing simulator, keeping its state.
    pub fn from_simulator(sim: MembraneSimulator) -> Self {
        Self { sim }
    }

    /// Apply `strikes` in order, then advance one frame.
    pub fn step_frame(&mut self, strikes: &[GridPoint]) -> FrameReport {
        let mut applied = 0;
        let mut rejected = Vec::new();
        for &point in strikes {
            match self.sim.excite_at(point) {
                Ok(()) => applied += 1,
                Err(e) => {
                    tracing::debug!(%point, error = %e, "strike rejected");
                    rejected.push(e);
                }
            }
        }
        self.sim.advance();
        FrameReport {
            frame: self.sim.frame(),
            applied,
            rejected,
            peak_amplitude: self.sim.peak_amplitude(),
        }
    }

    /// Advance `frames` frames with no strikes.
    pub fn run(&mut self, frames: u64) {
        for _ in 0..frames {
            self.sim.advance();
        }
    }

    /// The driven simulator.
    pub fn simulator(&self) -> &MembraneSimulator {
        &self.sim
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> MembraneSnapshot {
        self.sim.snapshot()
    }

    /// Frame counter (0 after construction or reset).
    pub fn frame(&self) -> FrameId {
        self.sim.frame()
    }

    /// Return the membrane to rest at frame 0.
    pub fn reset(&mut self) {
        self.sim.reset();
    }

    /// Release the simulator.
    pub fn into_inner(self) -> MembraneSimulator {
        self.sim
    }
}
