//! Square lattice with row-major indexing and a fixed border ring.

use std::ops::Range;

use membrane_core::GridPoint;

use crate::disk::Disk;
use crate::error::SpaceError;

/// An `n x n` square lattice.
///
/// Cell `(x, y)` lives at flat index `y * n + x`. The outermost ring of
/// cells (`x` or `y` in `{0, n - 1}`) is the *border*: it is never updated
/// by the integrator and acts as a fixed zero boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareGrid {
    size: u32,
}

impl SquareGrid {
    /// Smallest side length whose inscribed disk has radius >= 1.
    pub const MIN_SIZE: u32 = 4;

    /// Largest supported side length.
    pub const MAX_SIZE: u32 = 4096;

    /// Create a new `size x size` grid.
    ///
    /// Returns `Err(SpaceError::GridTooSmall)` below [`MIN_SIZE`](Self::MIN_SIZE)
    /// and `Err(SpaceError::GridTooLarge)` above [`MAX_SIZE`](Self::MAX_SIZE).
    ///
    /// # Examples
    ///
    /// ```
    /// use membrane_space::SquareGrid;
    ///
    /// let grid = SquareGrid::new(100).unwrap();
    /// assert_eq!(grid.cell_count(), 10_000);
    /// assert_eq!(grid.index(3, 2), Some(203));
    /// assert_eq!(grid.index(100, 0), None);
    /// ```
    pub fn new(size: u32) -> Result<Self, SpaceError> {
        if size < Self::MIN_SIZE {
            return Err(SpaceError::GridTooSmall {
                size,
                min: Self::MIN_SIZE,
            });
        }
        if size > Self::MAX_SIZE {
            return Err(SpaceError::GridTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Side length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn cell_count(&self) -> usize {
        let n = self.size as usize;
        n * n
    }

    /// Whether `(x, y)` lies on the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let n = self.size as i64;
        let (x, y) = (i64::from(x), i64::from(y));
        (0..n).contains(&x) && (0..n).contains(&y)
    }

    /// Flat row-major index of `(x, y)`, or `None` if off the grid.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.contains(x, y) {
            return None;
        }
        Some(y as usize * self.size as usize + x as usize)
    }

    /// Flat index of a [`GridPoint`].
    pub fn index_of(&self, point: GridPoint) -> Option<usize> {
        self.index(point.x, point.y)
    }

    /// Inverse of [`index`](Self::index). `idx` must be `< cell_count()`.
    pub fn point(&self, idx: usize) -> GridPoint {
        let n = self.size as usize;
        GridPoint::new((idx % n) as i32, (idx / n) as i32)
    }

    /// Whether `(x, y)` is on the fixed border ring.
    pub fn is_border(&self, x: i32, y: i32) -> bool {
        let last = self.size as i32 - 1;
        self.contains(x, y) && (x == 0 || y == 0 || x == last || y == last)
    }

    /// Row or column range updated by the integrator: `1..size - 1`.
    pub fn interior(&self) -> Range<usize> {
        1..self.size as usize - 1
    }

    /// The domain circle inscribed in this grid.
    pub fn disk(&self) -> Disk {
        Disk::inscribed(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_too_small() {
        assert_eq!(
            SquareGrid::new(3),
            Err(SpaceError::GridTooSmall { size: 3, min: 4 })
        );
        assert!(SquareGrid::new(4).is_ok());
    }

    #[test]
    fn rejects_too_large() {
        assert!(matches!(
            SquareGrid::new(SquareGrid::MAX_SIZE + 1),
            Err(SpaceError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn index_is_row_major() {
        let g = SquareGrid::new(10).unwrap();
        assert_eq!(g.index(0, 0), Some(0));
        assert_eq!(g.index(9, 0), Some(9));
        assert_eq!(g.index(0, 1), Some(10));
        assert_eq!(g.index(9, 9), Some(99));
    }

    #[test]
    fn index_rejects_off_grid() {
        let g = SquareGrid::new(10).unwrap();
        assert_eq!(g.index(-1, 0), None);
        assert_eq!(g.index(0, 10), None);
        assert_eq!(g.index(i32::MIN, i32::MAX), None);
    }

    #[test]
    fn border_ring() {
        let g = SquareGrid::new(5).unwrap();
        assert!(g.is_border(0, 2));
        assert!(g.is_border(4, 4));
        assert!(g.is_border(2, 0));
        assert!(!g.is_border(1, 1));
        assert!(!g.is_border(3, 3));
        assert!(!g.is_border(5, 2), "off-grid is not border");
    }

    #[test]
    fn interior_excludes_border() {
        let g = SquareGrid::new(100).unwrap();
        assert_eq!(g.interior(), 1..99);
    }

    proptest! {
        #[test]
        fn point_inverts_index(size in 4u32..64, raw in 0usize..4096) {
            let g = SquareGrid::new(size).unwrap();
            let idx = raw % g.cell_count();
            let p = g.point(idx);
            prop_assert_eq!(g.index_of(p), Some(idx));
        }
    }
}
