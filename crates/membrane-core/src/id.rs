//! Grid coordinates and strongly-typed frame identifiers.

use std::fmt;

/// A cell coordinate on the membrane grid.
///
/// Coordinates are signed so that pointer translation can represent
/// positions left of or above the viewport; any query taking a
/// `GridPoint` bounds-checks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPoint {
    /// Column (horizontal axis).
    pub x: i32,
    /// Row (vertical axis).
    pub y: i32,
}

impl GridPoint {
    /// Create a new grid point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Monotonically increasing frame counter.
///
/// One frame is one `advance()` call, i.e. a fixed number of integration
/// sub-steps. `FrameId(0)` is the state before the first advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

impl FrameId {
    /// The frame that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FrameId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
