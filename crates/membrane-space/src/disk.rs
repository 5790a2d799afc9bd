//! Circular membrane domain.

use crate::grid::SquareGrid;

/// A closed disk of lattice cells: `(x - cx)² + (y - cy)² <= r²`.
///
/// The membrane domain for an `n x n` grid is [`Disk::inscribed(n)`](Disk::inscribed):
/// center `(n / 2, n / 2)`, radius `n / 2 - 1`. The inscribed disk always
/// fits on the grid, so off-grid coordinates are never contained.
///
/// # Examples
///
/// ```
/// use membrane_space::Disk;
///
/// let disk = Disk::inscribed(100);
/// assert_eq!(disk.center(), (50, 50));
/// assert_eq!(disk.radius(), 49);
/// assert!(disk.contains(50, 50));
/// assert!(disk.contains(1, 50));
/// assert!(!disk.contains(0, 50));
/// assert!(!disk.contains(2, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disk {
    cx: i32,
    cy: i32,
    radius: i32,
}

impl Disk {
    /// Create a disk with an explicit center and radius.
    pub const fn new(cx: i32, cy: i32, radius: i32) -> Self {
        Self { cx, cy, radius }
    }

    /// The domain disk inscribed in an `size x size` grid.
    pub fn inscribed(size: u32) -> Self {
        let half = (size / 2) as i32;
        Self::new(half, half, half - 1)
    }

    /// Center `(cx, cy)`.
    pub fn center(&self) -> (i32, i32) {
        (self.cx, self.cy)
    }

    /// Radius in cells.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Whether `(x, y)` lies inside or on the circle.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        // Two squared i32 spans exceed i64::MAX; i128 holds their sum.
        let dx = i128::from(x) - i128::from(self.cx);
        let dy = i128::from(y) - i128::from(self.cy);
        let r = i128::from(self.radius);
        dx * dx + dy * dy <= r * r
    }

    /// Row-major membership mask over `grid`.
    pub fn mask(&self, grid: &SquareGrid) -> Vec<bool> {
        let n = grid.size() as i32;
        (0..n)
            .flat_map(|y| (0..n).map(move |x| (x, y)))
            .map(|(x, y)| self.contains(x, y))
            .collect()
    }
}
