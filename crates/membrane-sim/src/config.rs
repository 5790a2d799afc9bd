//! Membrane configuration, validation, and error types.
//!
//! [`MembraneConfig`] carries the physical constants of the integrator.
//! [`MembraneConfig::default()`] is the reference drum head: a 100x100
//! grid, 10 sub-steps per frame, damping 0.99, tension `c2 = 0.25`.

use std::error::Error;
use std::fmt;

use membrane_space::{SpaceError, SquareGrid};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MembraneConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Grid size is outside the supported range.
    Space(SpaceError),
    /// `substeps` is zero.
    InvalidSubsteps,
    /// `damping` is NaN, infinite, non-positive, or above 1.
    InvalidDamping {
        /// The invalid value.
        value: f32,
    },
    /// `c2` is NaN, infinite, non-positive, or above the CFL bound.
    InvalidTension {
        /// The invalid value.
        value: f32,
        /// Largest stable value.
        max: f32,
    },
    /// Strike amplitude or kick is not finite, or exceeds
    /// [`MembraneConfig::max_strike_magnitude()`].
    InvalidStrike {
        /// Which parameter was rejected.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::InvalidSubsteps => write!(f, "substeps must be at least 1"),
            Self::InvalidDamping { value } => {
                write!(f, "damping must be finite and in (0, 1], got {value}")
            }
            Self::InvalidTension { value, max } => {
                write!(f, "c2 must be finite and in (0, {max}], got {value}")
            }
            Self::InvalidStrike { name, value } => {
                write!(
                    f,
                    "{name} must be finite with magnitude at most {}, got {value}",
                    MembraneConfig::max_strike_magnitude()
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── MembraneConfig ─────────────────────────────────────────────────

/// Physical and numerical parameters of the membrane.
///
/// Fields are public so a config can be assembled by hand; call
/// [`validate()`](Self::validate) (or go through [`builder()`](Self::builder))
/// before use. [`MembraneSimulator::new`](crate::MembraneSimulator::new)
/// validates on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct MembraneConfig {
    /// Side length of the square grid. Default: 100.
    pub grid_size: u32,
    /// Leapfrog sub-steps per `advance()` call. Default: 10.
    pub substeps: u32,
    /// Multiplicative decay applied to every update. Default: 0.99.
    pub damping: f32,
    /// Squared Courant number `c² dt² / dx²` (membrane tension). Default: 0.25.
    pub c2: f32,
    /// Displacement written to the current slice by a strike. Default: 1.0.
    pub strike_amplitude: f32,
    /// Displacement written to the previous slice by a strike. Default: 0.5.
    ///
    /// A non-zero kick makes the leapfrog see an initial velocity
    /// `strike_amplitude - strike_kick` at the struck cell.
    pub strike_kick: f32,
}

impl Default for MembraneConfig {
    fn default() -> Self {
        Self {
            grid_size: 100,
            substeps: 10,
            damping: 0.99,
            c2: 0.25,
            strike_amplitude: 1.0,
            strike_kick: 0.5,
        }
    }
}

impl MembraneConfig {
    /// Create a builder seeded with the reference defaults.
    pub fn builder() -> MembraneConfigBuilder {
        MembraneConfigBuilder {
            config: Self::default(),
        }
    }

    /// CFL bound of the five-point leapfrog in two dimensions.
    ///
    /// Every mode stays bounded while `c2 * 8 <= 4`.
    pub const fn max_stable_c2() -> f32 {
        0.5
    }

    /// Largest accepted `|strike_amplitude|` and `|strike_kick|`.
    ///
    /// Sums of neighbouring strikes stay far below `f32::MAX` at this size.
    pub const fn max_strike_magnitude() -> f32 {
        1.0e6
    }

    /// Validate all invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid must hold a disk of radius >= 1.
        SquareGrid::new(self.grid_size)?;
        // 2. At least one sub-step per frame.
        if self.substeps == 0 {
            return Err(ConfigError::InvalidSubsteps);
        }
        // 3. Damping in (0, 1]: above 1 the scheme amplifies every mode.
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::InvalidDamping {
                value: self.damping,
            });
        }
        // 4. Tension within the CFL bound.
        let max = Self::max_stable_c2();
        if !(self.c2 > 0.0 && self.c2 <= max) {
            return Err(ConfigError::InvalidTension {
                value: self.c2,
                max,
            });
        }
        // 5. Strike values finite and bounded.
        let bound = Self::max_strike_magnitude();
        for (name, value) in [
            ("strike_amplitude", self.strike_amplitude),
            ("strike_kick", self.strike_kick),
        ] {
            if !(value.abs() <= bound) {
                return Err(ConfigError::InvalidStrike { name, value });
            }
        }
        Ok(())
    }
}

// ── MembraneConfigBuilder ──────────────────────────────────────────

/// Builder for [`MembraneConfig`].
///
/// Every setter is optional; unset values keep the reference defaults.
#[derive(Clone, Debug)]
pub struct MembraneConfigBuilder {
    config: MembraneConfig,
}

impl MembraneConfigBuilder {
    /// Set the grid side length (default: 100).
    pub fn grid_size(mut self, size: u32) -> Self {
        self.config.grid_size = size;
        self
    }

    /// Set the sub-steps per frame (default: 10). Must be >= 1.
    pub fn substeps(mut self, substeps: u32) -> Self {
        self.config.substeps = substeps;
        self
    }

    /// Set the damping factor (default: 0.99). Must be in (0, 1].
    pub fn damping(mut self, damping: f32) -> Self {
        self.config.damping = damping;
        self
    }

    /// Set the tension `c2` (default: 0.25). Must be in (0, 0.5].
    pub fn c2(mut self, c2: f32) -> Self {
        self.config.c2 = c2;
        self
    }

    /// Set the strike amplitude and kick (defaults: 1.0 and 0.5).
    pub fn strike(mut self, amplitude: f32, kick: f32) -> Self {
        self.config.strike_amplitude = amplitude;
        self.config.strike_kick = kick;
        self
    }

    /// Build the config, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found by
    /// [`MembraneConfig::validate`].
    pub fn build(self) -> Result<MembraneConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
