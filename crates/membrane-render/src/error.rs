//! Error types for rendering.

use std::fmt;

/// Errors from viewport and frame construction.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    /// Viewport width or height is not finite and positive.
    InvalidViewport {
        /// Requested width in pixels.
        width: f32,
        /// Requested height in pixels.
        height: f32,
    },
    /// A pixel frame was requested with a zero dimension.
    EmptyFrame {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidViewport { width, height } => {
                write!(
                    f,
                    "viewport must be finite and positive, got {width} x {height}"
                )
            }
            Self::EmptyFrame { width, height } => {
                write!(f, "frame must be non-empty, got {width} x {height}")
            }
        }
    }
}

impl std::error::Error for RenderError {}
