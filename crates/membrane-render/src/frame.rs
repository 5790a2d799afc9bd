//! Draw commands and grayscale pixel frames.
//!
//! [`DrawList`] is what a GUI painter consumes: one filled rectangle per
//! active cell, in raster order, gray level `R = G = B = brightness`.
//! [`GrayFrame`] rasterizes the same picture into an 8-bit buffer for
//! headless use.

use membrane_core::AmplitudeField;

use crate::error::RenderError;
use crate::tone::ToneCurve;
use crate::viewport::Viewport;

/// One filled cell rectangle in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Rectangle width (one cell).
    pub width: f32,
    /// Rectangle height (one cell).
    pub height: f32,
    /// Gray level for all three channels.
    pub brightness: u8,
}

/// Rectangles for every active cell, in raster order (rows top to bottom,
/// cells left to right). Inactive cells produce nothing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    cells: Vec<CellRect>,
}

impl DrawList {
    /// Build the draw list for `field` in `viewport`.
    pub fn build<F: AmplitudeField>(field: &F, viewport: &Viewport, curve: ToneCurve) -> Self {
        let n = field.grid_size() as i32;
        let (cell_w, cell_h) = viewport.cell_size(field.grid_size());
        let mut cells = Vec::new();
        for y in 0..n {
            for x in 0..n {
                if !field.is_active(x, y) {
                    continue;
                }
                let Some(v) = field.sample(x, y) else {
                    continue;
                };
                cells.push(CellRect {
                    x: x as f32 * cell_w,
                    y: y as f32 * cell_h,
                    width: cell_w,
                    height: cell_h,
                    brightness: curve.brightness(v),
                });
            }
        }
        Self { cells }
    }

    /// The rectangles, in raster order.
    pub fn cells(&self) -> &[CellRect] {
        &self.cells
    }

    /// Number of rectangles.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over the rectangles.
    pub fn iter(&self) -> std::slice::Iter<'_, CellRect> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a CellRect;
    type IntoIter = std::slice::Iter<'a, CellRect>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// An 8-bit grayscale image of a field, row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct GrayFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayFrame {
    /// Gray level of pixels over inactive cells.
    pub const BACKGROUND: u8 = 0;

    /// Rasterize `field` into a `width x height` image.
    ///
    /// Each pixel takes the brightness of the cell under its center;
    /// pixels over inactive cells are [`BACKGROUND`](Self::BACKGROUND).
    pub fn rasterize<F: AmplitudeField>(
        field: &F,
        width: u32,
        height: u32,
        curve: ToneCurve,
    ) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::EmptyFrame { width, height });
        }
        let n = u64::from(field.grid_size());
        // Pixel center (p + 0.5) falls in cell floor((2p + 1) * n / (2 * len)).
        let cell_of = |p: u32, len: u32| ((2 * u64::from(p) + 1) * n / (2 * u64::from(len))) as i32;

        // Cache per-cell brightness so each cell is mapped once.
        let levels: Vec<Option<u8>> = (0..n as i32)
            .flat_map(|y| (0..n as i32).map(move |x| (x, y)))
            .map(|(x, y)| {
                if field.is_active(x, y) {
                    field.sample(x, y).map(|v| curve.brightness(v))
                } else {
                    None
                }
            })
            .collect();

        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for py in 0..height {
            let cy = cell_of(py, height) as usize;
            for px in 0..width {
                let cx = cell_of(px, width) as usize;
                let level = levels[cy * n as usize + cx];
                pixels.push(level.unwrap_or(Self::BACKGROUND));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major gray levels.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Gray level at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Expand to interleaved RGB with `R = G = B`.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&g| [g, g, g]).collect()
    }
}

impl std::fmt::Debug for GrayFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrayFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use membrane_test_utils::{ConstField, MockField};

    #[test]
    fn draw_list_covers_active_cells_only() {
        let field = ConstField::new(10, 0.0);
        let vp = Viewport::new(100.0, 100.0).unwrap();
        let list = DrawList::build(&field, &vp, ToneCurve::Reference);
        let active = (0..10)
            .flat_map(|y| (0..10).map(move |x| (x, y)))
            .filter(|&(x, y)| field.is_active(x, y))
            .count();
        assert_eq!(list.len(), active);
        assert!(list.iter().all(|c| c.brightness == 191));
        assert!(list.iter().all(|c| c.width == 10.0 && c.height == 10.0));
    }

    #[test]
    fn draw_list_is_raster_ordered() {
        let field = ConstField::new(12, 0.0);
        let vp = Viewport::new(120.0, 120.0).unwrap();
        let list = DrawList::build(&field, &vp, ToneCurve::Reference);
        let keys: Vec<(i64, i64)> = list
            .iter()
            .map(|c| (c.y as i64, c.x as i64))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn draw_list_positions_cells() {
        let mut field = MockField::all_active(4);
        field.set(2, 1, 1.0);
        let vp = Viewport::new(40.0, 20.0).unwrap();
        let list = DrawList::build(&field, &vp, ToneCurve::SingleAffine);
        assert_eq!(list.len(), 16);
        let hit = list.cells()[4 + 2];
        assert_eq!(
            hit,
            CellRect {
                x: 20.0,
                y: 5.0,
                width: 10.0,
                height: 5.0,
                brightness: 255
            }
        );
    }

    #[test]
    fn draw_list_skips_masked_cells() {
        let mut field = MockField::all_active(4);
        field.set_active(0, 0, false);
        field.set_active(3, 3, false);
        let vp = Viewport::new(4.0, 4.0).unwrap();
        let list = DrawList::build(&field, &vp, ToneCurve::Reference);
        assert_eq!(list.len(), 14);
        assert_eq!((&list).into_iter().next().map(|c| c.x), Some(1.0));
    }

    #[test]
    fn rasterize_rejects_empty_frame() {
        let field = ConstField::new(8, 0.0);
        assert_eq!(
            GrayFrame::rasterize(&field, 0, 10, ToneCurve::Reference),
            Err(RenderError::EmptyFrame {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn rasterize_one_pixel_per_cell() {
        let mut field = MockField::inscribed(10);
        field.set(5, 5, -1.0);
        let frame = GrayFrame::rasterize(&field, 10, 10, ToneCurve::Reference).unwrap();
        assert_eq!(frame.pixels().len(), 100);
        assert_eq!(frame.pixel(5, 5), Some(127));
        assert_eq!(frame.pixel(4, 5), Some(191));
        assert_eq!(frame.pixel(0, 0), Some(GrayFrame::BACKGROUND));
        assert_eq!(frame.pixel(10, 0), None);
    }

    #[test]
    fn rasterize_upscales_cells() {
        let mut field = MockField::all_active(4);
        field.set(1, 2, 1.0);
        let frame = GrayFrame::rasterize(&field, 8, 8, ToneCurve::Reference).unwrap();
        // Cell (1, 2) covers pixels x in 2..4, y in 4..6.
        for py in 4..6 {
            for px in 2..4 {
                assert_eq!(frame.pixel(px, py), Some(255));
            }
        }
        assert_eq!(frame.pixel(1, 4), Some(191));
        assert_eq!(frame.pixel(2, 6), Some(191));
    }

    #[test]
    fn to_rgb_triplicates() {
        let field = ConstField::new(4, 0.0);
        let frame = GrayFrame::rasterize(&field, 4, 4, ToneCurve::Reference).unwrap();
        let rgb = frame.to_rgb();
        assert_eq!(rgb.len(), 48);
        for (i, chunk) in rgb.chunks_exact(3).enumerate() {
            let g = frame.pixels()[i];
            assert_eq!(chunk, [g, g, g]);
        }
    }
}
