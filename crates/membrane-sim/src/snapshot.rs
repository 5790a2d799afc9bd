//! Owned, detached copies of the displacement field.

use membrane_core::{AmplitudeField, FrameId};
use membrane_space::{Disk, SquareGrid};

/// The current displacement slice at a given frame.
///
/// Detached from the simulator, so it can be handed to another thread
/// while the simulator keeps advancing.
#[derive(Clone, PartialEq)]
pub struct MembraneSnapshot {
    frame: FrameId,
    grid: SquareGrid,
    disk: Disk,
    values: Vec<f32>,
}

impl MembraneSnapshot {
    /// Wrap a row-major slice of `grid.cell_count()` values.
    ///
    /// # Panics
    ///
    /// Panics if `values.len() != grid.cell_count()`.
    pub fn new(frame: FrameId, grid: SquareGrid, values: Vec<f32>) -> Self {
        assert_eq!(
            values.len(),
            grid.cell_count(),
            "snapshot length must match grid"
        );
        Self {
            frame,
            disk: grid.disk(),
            grid,
            values,
        }
    }

    /// Frame this snapshot was taken at.
    pub fn frame(&self) -> FrameId {
        self.frame
    }

    /// Row-major displacement values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Largest absolute displacement.
    pub fn peak_amplitude(&self) -> f32 {
        self.values.iter().fold(0.0f32, |acc, v| acc.max(v.abs()))
    }
}

impl AmplitudeField for MembraneSnapshot {
    fn grid_size(&self) -> u32 {
        self.grid.size()
    }

    fn sample(&self, x: i32, y: i32) -> Option<f32> {
        self.grid.index(x, y).map(|i| self.values[i])
    }

    fn is_active(&self, x: i32, y: i32) -> bool {
        self.grid.contains(x, y) && self.disk.contains(x, y)
    }
}

impl std::fmt::Debug for MembraneSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembraneSnapshot")
            .field("frame", &self.frame)
            .field("grid_size", &self.grid.size())
            .field("peak_amplitude", &self.peak_amplitude())
            .finish()
    }
}
