//! Vibrating circular membrane simulation.
//!
//! [`MembraneSimulator`] integrates the damped 2D wave equation on a square
//! grid masked to an inscribed disk, using three rotating time slices
//! (previous, current, next). It is driven by three calls:
//!
//! 1. [`advance`](MembraneSimulator::advance): a fixed number of leapfrog
//!    sub-steps, invoked by an external clock (reference cadence 60 Hz)
//! 2. [`excite`](MembraneSimulator::excite): a point impulse from user input
//! 3. [`sample`](MembraneSimulator::sample) /
//!    [`is_active`](MembraneSimulator::is_active): read-back for rendering
//!
//! All three run on one thread; the simulator holds no locks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffers;
pub mod config;
pub mod simulator;
pub mod snapshot;

pub use buffers::TripleBuffer;
pub use config::{ConfigError, MembraneConfig, MembraneConfigBuilder};
pub use simulator::MembraneSimulator;
pub use snapshot::MembraneSnapshot;
