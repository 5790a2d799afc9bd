//! Spatial geometry for the membrane simulation.
//!
//! # Types
//!
//! - [`SquareGrid`]: validated `n x n` lattice with row-major indexing and
//!   a fixed border ring
//! - [`Disk`]: the circular domain inscribed in the grid; cells outside it
//!   are inert

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod disk;
pub mod error;
pub mod grid;

pub use disk::Disk;
pub use error::SpaceError;
pub use grid::SquareGrid;
