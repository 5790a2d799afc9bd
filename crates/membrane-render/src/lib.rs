//! Rendering and input translation for membrane fields.
//!
//! The framework-free half of a drum-head widget:
//!
//! - [`ToneCurve`]: maps raw displacement to 8-bit grayscale brightness
//! - [`Viewport`]: translates pointer coordinates to grid cells and strikes
//! - [`DrawList`] / [`GrayFrame`]: per-cell rectangles or a pixel buffer
//!   for any [`AmplitudeField`](membrane_core::AmplitudeField)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod frame;
pub mod tone;
pub mod viewport;

pub use error::RenderError;
pub use frame::{CellRect, DrawList, GrayFrame};
pub use tone::ToneCurve;
pub use viewport::Viewport;
