//! Membrane: a vibrating circular drum head.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all membrane sub-crates. For most users, adding `membrane` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use membrane::prelude::*;
//!
//! let mut sim = MembraneSimulator::new(MembraneConfig::default()).unwrap();
//!
//! // A pointer press in the middle of a 400x400 widget.
//! let viewport = Viewport::new(400.0, 400.0).unwrap();
//! let hit = viewport.strike(&mut sim, 200.0, 200.0).unwrap();
//! assert_eq!(hit, GridPoint::new(50, 50));
//!
//! // One timer tick, then paint.
//! sim.advance();
//! let cells = DrawList::build(&sim, &viewport, ToneCurve::default());
//! assert!(!cells.is_empty());
//! assert!(cells.iter().any(|c| c.brightness != 191));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `membrane-core` | `GridPoint`, `FrameId`, `ExciteError`, `AmplitudeField` |
//! | [`space`] | `membrane-space` | `SquareGrid`, `Disk` |
//! | [`sim`] | `membrane-sim` | `MembraneSimulator`, `MembraneConfig`, snapshots |
//! | [`render`] | `membrane-render` | `ToneCurve`, `Viewport`, `DrawList`, `GrayFrame` |
//! | [`engine`] | `membrane-engine` | `LockstepMembrane`, `RealtimeMembrane` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`membrane-core`).
pub use membrane_core as types;

/// Grid and domain geometry (`membrane-space`).
pub use membrane_space as space;

/// The leapfrog integrator (`membrane-sim`).
///
/// [`sim::MembraneSimulator`] is the whole physics model; everything else
/// in this crate reads from it or drives it.
pub use membrane_sim as sim;

/// Brightness mapping, pointer translation, and frame output
/// (`membrane-render`).
pub use membrane_render as render;

/// Frame clocks (`membrane-engine`).
///
/// [`engine::LockstepMembrane`] for caller-driven frames,
/// [`engine::RealtimeMembrane`] for a fixed-rate background clock.
pub use membrane_engine as engine;

/// Common imports for typical membrane usage.
///
/// ```rust
/// use membrane::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use membrane_core::{AmplitudeField, ExciteError, FrameId, GridPoint};

    // Space
    pub use membrane_space::{Disk, SquareGrid};

    // Simulation
    pub use membrane_sim::{ConfigError, MembraneConfig, MembraneSimulator, MembraneSnapshot};

    // Rendering
    pub use membrane_render::{CellRect, DrawList, GrayFrame, ToneCurve, Viewport};

    // Engine
    pub use membrane_engine::{
        EngineConfig, EngineError, FrameMetrics, FrameReport, LockstepMembrane, RealtimeMembrane,
        SubmitError,
    };
}
