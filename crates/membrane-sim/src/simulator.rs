//! Damped leapfrog integrator on a circular domain.
//!
//! Per sub-step, for every interior cell `1 <= x, y <= n - 2`:
//! ```text
//! inactive:  next = 0
//! active:    L    = cur[y+1][x] + cur[y-1][x] + cur[y][x+1] + cur[y][x-1] - 4 cur[y][x]
//!            next = damping * (2 cur - prev + c2 * L)
//! ```
//! followed by a buffer rotation. The border ring is never written and so
//! stays at zero: a fixed (Dirichlet) boundary.
//!
//! Damping multiplies the whole update rather than just the velocity term,
//! so every spatial mode decays by exactly `sqrt(damping)` per sub-step in
//! magnitude for any `c2` within the CFL bound.

use membrane_core::{AmplitudeField, ExciteError, FrameId, GridPoint};
use membrane_space::{Disk, SquareGrid};

use crate::buffers::TripleBuffer;
use crate::config::{ConfigError, MembraneConfig};
use crate::snapshot::MembraneSnapshot;

/// A vibrating circular membrane.
///
/// Owns three `grid_size²` displacement slices and a precomputed active
/// mask derived from the inscribed [`Disk`]. No method allocates after
/// construction except [`snapshot`](Self::snapshot).
#[derive(Clone)]
pub struct MembraneSimulator {
    config: MembraneConfig,
    grid: SquareGrid,
    disk: Disk,
    active: Vec<bool>,
    buffers: TripleBuffer,
    frame: FrameId,
    substeps_run: u64,
}

impl MembraneSimulator {
    /// Create a zeroed membrane from a config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use membrane_sim::{MembraneConfig, MembraneSimulator};
    ///
    /// let mut sim = MembraneSimulator::new(MembraneConfig::default()).unwrap();
    /// sim.excite(50, 50).unwrap();
    /// assert_eq!(sim.sample(50, 50), Some(1.0));
    ///
    /// sim.advance();
    /// assert_eq!(sim.frame().0, 1);
    /// assert!(sim.peak_amplitude() < 1.0);
    /// ```
    pub fn new(config: MembraneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = SquareGrid::new(config.grid_size)?;
        let disk = grid.disk();
        let active = disk.mask(&grid);
        let buffers = TripleBuffer::zeroed(grid.cell_count());
        tracing::debug!(
            grid_size = config.grid_size,
            substeps = config.substeps,
            damping = config.damping,
            c2 = config.c2,
            active_cells = active.iter().filter(|&&a| a).count(),
            "membrane created"
        );
        Ok(Self {
            config,
            grid,
            disk,
            active,
            buffers,
            frame: FrameId(0),
            substeps_run: 0,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &MembraneConfig {
        &self.config
    }

    /// Side length of the grid.
    pub fn grid_size(&self) -> u32 {
        self.grid.size()
    }

    /// Grid geometry.
    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    /// Domain circle.
    pub fn disk(&self) -> &Disk {
        &self.disk
    }

    /// Number of completed `advance()` calls since construction or reset.
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Number of completed sub-steps since construction or reset.
    pub fn substeps_run(&self) -> u64 {
        self.substeps_run
    }

    /// Run one frame: exactly `config.substeps` integration sub-steps.
    pub fn advance(&mut self) {
        for _ in 0..self.config.substeps {
            self.step();
        }
        self.frame = self.frame.next();
    }

    /// Run a single integration sub-step and rotate the buffers.
    pub fn step(&mut self) {
        let n = self.grid.size() as usize;
        let damping = self.config.damping;
        let c2 = self.config.c2;
        let active = &self.active;
        let (prev, cur, next) = self.buffers.split_mut();

        for y in 1..n - 1 {
            let row = y * n;
            for x in 1..n - 1 {
                let i = row + x;
                if !active[i] {
                    next[i] = 0.0;
                    continue;
                }
                let laplacian =
                    cur[i + n] + cur[i - n] + cur[i + 1] + cur[i - 1] - 4.0 * cur[i];
                next[i] = damping * (2.0 * cur[i] - prev[i] + c2 * laplacian);
            }
        }

        self.buffers.rotate();
        self.substeps_run += 1;
    }

    /// Strike the membrane at `(x, y)`.
    ///
    /// Accepted only when `1 < x < n - 1`, `1 < y < n - 1` and the cell is
    /// inside the domain. Sets `current = strike_amplitude` and
    /// `previous = strike_kick` at that cell; the difference acts as an
    /// initial velocity. Repeated strikes overwrite, last write wins.
    ///
    /// # Errors
    ///
    /// Returns [`ExciteError`] and leaves every cell untouched if the point
    /// is rejected.
    pub fn excite(&mut self, x: i32, y: i32) -> Result<(), ExciteError> {
        let point = GridPoint::new(x, y);
        let last = self.grid.size() as i32 - 1;
        if !(x > 1 && x < last && y > 1 && y < last) {
            return Err(ExciteError::OutOfBounds {
                point,
                grid_size: self.grid.size(),
            });
        }
        if !self.disk.contains(x, y) {
            return Err(ExciteError::OutsideDomain { point });
        }
        // In bounds: checked above.
        let i = y as usize * self.grid.size() as usize + x as usize;
        self.buffers.current_mut()[i] = self.config.strike_amplitude;
        self.buffers.previous_mut()[i] = self.config.strike_kick;
        Ok(())
    }

    /// Strike at a [`GridPoint`]. See [`excite`](Self::excite).
    pub fn excite_at(&mut self, point: GridPoint) -> Result<(), ExciteError> {
        self.excite(point.x, point.y)
    }

    /// Current displacement at `(x, y)`, or `None` off the grid.
    pub fn sample(&self, x: i32, y: i32) -> Option<f32> {
        self.grid.index(x, y).map(|i| self.buffers.current()[i])
    }

    /// Whether `(x, y)` is part of the physical membrane.
    pub fn is_active(&self, x: i32, y: i32) -> bool {
        self.grid.index(x, y).is_some_and(|i| self.active[i])
    }

    /// Current slice (`t`), row-major.
    pub fn current(&self) -> &[f32] {
        self.buffers.current()
    }

    /// Previous slice (`t-1`), row-major.
    pub fn previous(&self) -> &[f32] {
        self.buffers.previous()
    }

    /// Precomputed row-major active mask.
    pub fn active_mask(&self) -> &[bool] {
        &self.active
    }

    /// Largest absolute displacement in the current slice.
    pub fn peak_amplitude(&self) -> f32 {
        self.buffers
            .current()
            .iter()
            .fold(0.0f32, |acc, v| acc.max(v.abs()))
    }

    /// Whether every cell of the current and previous slices is finite.
    pub fn is_finite(&self) -> bool {
        self.buffers.current().iter().all(|v| v.is_finite())
            && self.buffers.previous().iter().all(|v| v.is_finite())
    }

    /// Owned copy of the current slice for cross-thread readers.
    pub fn snapshot(&self) -> MembraneSnapshot {
        MembraneSnapshot::new(self.frame, self.grid, self.buffers.current().to_vec())
    }

    /// Return to the all-zero state, keeping the configuration.
    pub fn reset(&mut self) {
        self.buffers.clear();
        self.frame = FrameId(0);
        self.substeps_run = 0;
        tracing::debug!(grid_size = self.grid.size(), "membrane reset");
    }
}

impl Default for MembraneSimulator {
    fn default() -> Self {
        Self::new(MembraneConfig::default()).expect("reference config is valid")
    }
}

impl std::fmt::Debug for MembraneSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembraneSimulator")
            .field("config", &self.config)
            .field("disk", &self.disk)
            .field("frame", &self.frame)
            .field("substeps_run", &self.substeps_run)
            .finish()
    }
}

impl AmplitudeField for MembraneSimulator {
    fn grid_size(&self) -> u32 {
        self.grid.size()
    }

    fn sample(&self, x: i32, y: i32) -> Option<f32> {
        MembraneSimulator::sample(self, x, y)
    }

    fn is_active(&self, x: i32, y: i32) -> bool {
        MembraneSimulator::is_active(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(size: u32) -> MembraneSimulator {
        let cfg = MembraneConfig::builder().grid_size(size).build().unwrap();
        MembraneSimulator::new(cfg).unwrap()
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_is_zeroed() {
        let sim = small(16);
        assert_eq!(sim.grid_size(), 16);
        assert_eq!(sim.current().len(), 256);
        assert!(sim.current().iter().all(|&v| v == 0.0));
        assert!(sim.previous().iter().all(|&v| v == 0.0));
        assert_eq!(sim.frame(), FrameId(0));
        assert_eq!(sim.substeps_run(), 0);
    }

    #[test]
    fn new_rejects_invalid_config() {
        let cfg = MembraneConfig {
            c2: 0.75,
            ..MembraneConfig::default()
        };
        assert!(matches!(
            MembraneSimulator::new(cfg),
            Err(ConfigError::InvalidTension { .. })
        ));
    }

    #[test]
    fn default_matches_reference_config() {
        let sim = MembraneSimulator::default();
        assert_eq!(sim.config(), &MembraneConfig::default());
        let built = MembraneSimulator::new(MembraneConfig::default()).unwrap();
        assert_eq!(sim.active_mask(), built.active_mask());
        assert_eq!(format!("{sim:?}"), format!("{built:?}"));
    }

    #[test]
    fn largest_strike_stays_finite() {
        let edge = MembraneConfig::max_strike_magnitude();
        let cfg = MembraneConfig::builder()
            .grid_size(24)
            .damping(1.0)
            .c2(MembraneConfig::max_stable_c2())
            .strike(edge, -edge)
            .build()
            .unwrap();
        let mut sim = MembraneSimulator::new(cfg).unwrap();
        for (x, y) in [(11, 12), (12, 12), (13, 12), (12, 11), (12, 13)] {
            sim.excite(x, y).unwrap();
        }
        for _ in 0..50 {
            sim.advance();
        }
        assert!(sim.is_finite());
    }

    #[test]
    fn mask_agrees_with_disk() {
        let sim = small(20);
        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(sim.is_active(x, y), sim.disk().contains(x, y));
            }
        }
    }

    // ── Excitation ──────────────────────────────────────────────

    #[test]
    fn excite_sets_current_and_previous() {
        let mut sim = MembraneSimulator::default();
        sim.excite(50, 50).unwrap();
        let i = 50 * 100 + 50;
        assert_eq!(sim.current()[i], 1.0);
        assert_eq!(sim.previous()[i], 0.5);
    }

    #[test]
    fn excite_rejects_border_and_first_ring() {
        let mut sim = MembraneSimulator::default();
        for (x, y) in [(0, 50), (1, 50), (50, 1), (99, 50), (50, 99), (-3, 50)] {
            let err = sim.excite(x, y).unwrap_err();
            assert!(
                matches!(err, ExciteError::OutOfBounds { grid_size: 100, .. }),
                "({x}, {y}) -> {err:?}"
            );
        }
        assert!(sim.current().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn excite_rejects_outside_domain() {
        let mut sim = MembraneSimulator::default();
        assert_eq!(
            sim.excite(2, 2),
            Err(ExciteError::OutsideDomain {
                point: GridPoint::new(2, 2)
            })
        );
        assert!(sim.current().iter().all(|&v| v == 0.0));
        assert!(sim.previous().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn excite_accepts_just_inside_window() {
        let mut sim = MembraneSimulator::default();
        // (2, 50) is inside the disk (dx = -48) and inside the window.
        sim.excite(2, 50).unwrap();
        assert_eq!(sim.sample(2, 50), Some(1.0));
        // (98, 50) is the largest accepted column.
        sim.excite(98, 50).unwrap();
        assert_eq!(sim.sample(98, 50), Some(1.0));
    }

    #[test]
    fn excite_last_write_wins() {
        let mut sim = MembraneSimulator::default();
        sim.excite(50, 50).unwrap();
        sim.advance();
        sim.excite(50, 50).unwrap();
        assert_eq!(sim.sample(50, 50), Some(1.0));
        assert_eq!(sim.previous()[50 * 100 + 50], 0.5);
    }

    #[test]
    fn excite_at_uses_point() {
        let mut sim = MembraneSimulator::default();
        sim.excite_at(GridPoint::new(40, 45)).unwrap();
        assert_eq!(sim.sample(40, 45), Some(1.0));
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn sample_off_grid_is_none() {
        let sim = small(8);
        assert_eq!(sim.sample(-1, 0), None);
        assert_eq!(sim.sample(0, 8), None);
        assert_eq!(sim.sample(7, 7), Some(0.0));
    }

    #[test]
    fn is_active_off_grid_is_false() {
        let sim = small(8);
        assert!(!sim.is_active(-1, 4));
        assert!(!sim.is_active(4, 100));
        assert!(sim.is_active(4, 4));
    }

    // ── Integration step ────────────────────────────────────────

    #[test]
    fn first_substep_matches_hand_computation() {
        let mut sim = MembraneSimulator::default();
        sim.excite(50, 50).unwrap();
        sim.step();
        // center: 0.99 * (2*1 - 0.5 + 0.25 * (-4)) = 0.99 * 0.5
        let center = sim.sample(50, 50).unwrap();
        assert!((center - 0.495).abs() < 1e-6, "center = {center}");
        // neighbour: 0.99 * (0 - 0 + 0.25 * 1)
        let north = sim.sample(50, 49).unwrap();
        assert!((north - 0.2475).abs() < 1e-6, "north = {north}");
        // previous now holds the struck state.
        assert_eq!(sim.previous()[50 * 100 + 50], 1.0);
        assert_eq!(sim.substeps_run(), 1);
    }

    #[test]
    fn advance_runs_configured_substeps() {
        let cfg = MembraneConfig::builder()
            .grid_size(12)
            .substeps(7)
            .build()
            .unwrap();
        let mut sim = MembraneSimulator::new(cfg).unwrap();
        sim.advance();
        sim.advance();
        assert_eq!(sim.substeps_run(), 14);
        assert_eq!(sim.frame(), FrameId(2));
    }

    #[test]
    fn advance_matches_repeated_step() {
        let mut a = MembraneSimulator::default();
        a.excite(30, 60).unwrap();
        let mut b = a.clone();
        a.advance();
        for _ in 0..10 {
            b.step();
        }
        assert_eq!(a.current(), b.current());
        assert_eq!(a.previous(), b.previous());
    }

    #[test]
    fn inactive_interior_cells_forced_to_zero() {
        let mut sim = MembraneSimulator::default();
        sim.excite(50, 50).unwrap();
        for _ in 0..20 {
            sim.advance();
        }
        for y in 0..100 {
            for x in 0..100 {
                if !sim.is_active(x, y) {
                    assert_eq!(sim.sample(x, y), Some(0.0), "cell ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn undamped_stays_finite_at_cfl_limit() {
        let cfg = MembraneConfig::builder()
            .grid_size(24)
            .damping(1.0)
            .c2(MembraneConfig::max_stable_c2())
            .build()
            .unwrap();
        let mut sim = MembraneSimulator::new(cfg).unwrap();
        sim.excite(12, 12).unwrap();
        for _ in 0..200 {
            sim.advance();
        }
        assert!(sim.is_finite());
    }

    // ── Snapshot / reset ────────────────────────────────────────

    #[test]
    fn snapshot_copies_current() {
        let mut sim = small(16);
        sim.excite(8, 8).unwrap();
        sim.advance();
        let snap = sim.snapshot();
        assert_eq!(snap.frame(), FrameId(1));
        assert_eq!(snap.values(), sim.current());
        sim.advance();
        assert_ne!(snap.values(), sim.current(), "snapshot is detached");
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut sim = MembraneSimulator::default();
        sim.excite(50, 50).unwrap();
        sim.advance();
        sim.reset();
        assert!(sim.current().iter().all(|&v| v == 0.0));
        assert!(sim.previous().iter().all(|&v| v == 0.0));
        assert_eq!(sim.frame(), FrameId(0));
        assert_eq!(sim.substeps_run(), 0);
        assert_eq!(sim.peak_amplitude(), 0.0);
    }
}
