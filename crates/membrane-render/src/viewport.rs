//! Pixel-space viewport and pointer-to-grid translation.

use membrane_core::{ExciteError, GridPoint};
use membrane_sim::MembraneSimulator;

use crate::error::RenderError;

/// The on-screen rectangle a membrane is drawn into, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Create a viewport. Both dimensions must be finite and positive.
    pub fn new(width: f32, height: f32) -> Result<Self, RenderError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(RenderError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Pixel size of one cell: `(width / n, height / n)`.
    pub fn cell_size(&self, grid_size: u32) -> (f32, f32) {
        let n = grid_size as f32;
        (self.width / n, self.height / n)
    }

    /// Translate a pointer position to the grid cell under it.
    ///
    /// `x = floor(px / width * n)`, `y = floor(py / height * n)`. The result
    /// is not bounds-checked: positions outside the viewport map to cells
    /// outside the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use membrane_core::GridPoint;
    /// use membrane_render::Viewport;
    ///
    /// let vp = Viewport::new(400.0, 400.0).unwrap();
    /// assert_eq!(vp.to_grid(200.0, 203.9, 100), GridPoint::new(50, 50));
    /// assert_eq!(vp.to_grid(-1.0, 0.0, 100), GridPoint::new(-1, 0));
    /// ```
    pub fn to_grid(&self, px: f32, py: f32, grid_size: u32) -> GridPoint {
        let n = grid_size as f32;
        // Float-to-int casts saturate; NaN maps to 0.
        GridPoint::new(
            (px / self.width * n).floor() as i32,
            (py / self.height * n).floor() as i32,
        )
    }

    /// Translate a pointer press into a strike on `sim`.
    ///
    /// Returns the struck cell, or the [`ExciteError`] describing why the
    /// cell was rejected (the membrane is left untouched in that case).
    pub fn strike(
        &self,
        sim: &mut MembraneSimulator,
        px: f32,
        py: f32,
    ) -> Result<GridPoint, ExciteError> {
        let point = self.to_grid(px, py, sim.grid_size());
        sim.excite_at(point)?;
        Ok(point)
    }
}
