//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// The grid is too small to hold a domain of radius at least one.
    GridTooSmall {
        /// The requested side length.
        size: u32,
        /// Minimum accepted side length.
        min: u32,
    },
    /// The grid side length exceeds the supported maximum.
    GridTooLarge {
        /// The requested side length.
        size: u32,
        /// Maximum accepted side length.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { size, min } => {
                write!(f, "grid size {size} is below minimum of {min}")
            }
            Self::GridTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
