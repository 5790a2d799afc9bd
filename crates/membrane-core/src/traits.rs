//! Read-side trait for displacement fields.

/// Read-only access to a square displacement field masked by a domain.
///
/// Implemented by the live simulator and by owned snapshots, so a
/// renderer can consume either without knowing which.
///
/// # Contract
///
/// - `sample` returns `Some` exactly for `0 <= x, y < grid_size`.
/// - `is_active` returns `false` for any coordinate outside the grid.
pub trait AmplitudeField {
    /// Side length of the square grid.
    fn grid_size(&self) -> u32;

    /// Displacement at `(x, y)`, or `None` if the cell lies outside the grid.
    fn sample(&self, x: i32, y: i32) -> Option<f32>;

    /// Whether `(x, y)` lies inside the physical membrane domain.
    fn is_active(&self, x: i32, y: i32) -> bool;

    /// Number of cells in the grid.
    fn cell_count(&self) -> usize {
        let n = self.grid_size() as usize;
        n * n
    }
}
