//! Frame clocks for the membrane simulation.
//!
//! The simulator itself has no notion of time; it advances one frame per
//! [`advance()`](membrane_sim::MembraneSimulator::advance) call. This crate
//! supplies the two ways of calling it:
//!
//! - [`LockstepMembrane`]: the caller drives each frame explicitly, passing
//!   the strikes that landed since the previous one.
//! - [`RealtimeMembrane`]: a background clock thread owns the simulator and
//!   advances it at a fixed rate (60 Hz by default), accepting strikes over
//!   a bounded channel and publishing an owned snapshot after every frame.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub(crate) mod clock_thread;
pub mod config;
pub mod lockstep;
pub mod metrics;
pub mod realtime;

pub use config::{EngineConfig, EngineError};
pub use lockstep::{FrameReport, LockstepMembrane};
pub use metrics::FrameMetrics;
pub use realtime::{RealtimeMembrane, SubmitError};
