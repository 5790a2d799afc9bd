//! Core types and traits for the membrane simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! grid coordinate and frame identifier types, the excitation error type,
//! and the [`AmplitudeField`] read trait through which renderers and
//! observers consume a displacement field.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod traits;

pub use error::ExciteError;
pub use id::{FrameId, GridPoint};
pub use traits::AmplitudeField;
