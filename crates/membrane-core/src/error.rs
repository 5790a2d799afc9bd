//! Error types shared across the membrane workspace.

use std::error::Error;
use std::fmt;

use crate::id::GridPoint;

/// Reasons an excitation request is rejected.
///
/// A rejected excitation never mutates the membrane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExciteError {
    /// The point lies on the fixed border ring or outside the grid.
    /// Accepted points satisfy `1 < x < grid_size - 1` on both axes.
    OutOfBounds {
        /// The offending point.
        point: GridPoint,
        /// Side length of the grid.
        grid_size: u32,
    },
    /// The point is inside the grid but outside the domain circle.
    OutsideDomain {
        /// The offending point.
        point: GridPoint,
    },
}

impl fmt::Display for ExciteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { point, grid_size } => {
                let hi = i64::from(*grid_size) - 1;
                write!(f, "excitation at {point} outside (1, {hi}) x (1, {hi})")
            }
            Self::OutsideDomain { point } => {
                write!(f, "excitation at {point} outside the membrane domain")
            }
        }
    }
}

impl Error for ExciteError {}
