//! Engine configuration, validation, and error types.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use membrane_sim::ConfigError;

// ── EngineError ────────────────────────────────────────────────────

/// Errors starting or stopping a frame clock.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineError {
    /// The membrane configuration was rejected.
    Config(ConfigError),
    /// `frame_rate_hz` is NaN, infinite, zero, negative, or so small that
    /// the frame budget does not fit in a [`Duration`].
    InvalidFrameRate {
        /// The invalid value.
        value: f64,
    },
    /// `strike_queue_capacity` is zero.
    QueueCapacityZero,
    /// The clock thread could not be spawned.
    ThreadSpawnFailed {
        /// OS error description.
        reason: String,
    },
    /// The clock thread panicked; the simulator could not be recovered.
    ClockThreadPanicked,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "membrane config: {e}"),
            Self::InvalidFrameRate { value } => {
                write!(f, "frame_rate_hz must be finite and positive, got {value}")
            }
            Self::QueueCapacityZero => write!(f, "strike_queue_capacity must be at least 1"),
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "clock thread spawn failed: {reason}")
            }
            Self::ClockThreadPanicked => write!(f, "clock thread panicked"),
        }
    }
}

impl Error for EngineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Configuration for [`RealtimeMembrane`](crate::RealtimeMembrane).
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Target frames per second. Default: 60.
    pub frame_rate_hz: f64,
    /// Strikes buffered between frames before
    /// [`strike()`](crate::RealtimeMembrane::strike) reports back-pressure.
    /// Default: 64.
    pub strike_queue_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            frame_rate_hz: 60.0,
            strike_queue_capacity: 64,
        }
    }
}

impl EngineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), EngineError> {
        self.frame_budget()?;
        if self.strike_queue_capacity == 0 {
            return Err(EngineError::QueueCapacityZero);
        }
        Ok(())
    }

    /// Wall-clock time allotted to one frame: `1 / frame_rate_hz`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use membrane_engine::EngineConfig;
    ///
    /// let cfg = EngineConfig { frame_rate_hz: 50.0, ..Default::default() };
    /// assert_eq!(cfg.frame_budget().unwrap(), Duration::from_millis(20));
    /// ```
    pub fn frame_budget(&self) -> Result<Duration, EngineError> {
        let rate = self.frame_rate_hz;
        let invalid = EngineError::InvalidFrameRate { value: rate };
        if !rate.is_finite() || rate <= 0.0 {
            return Err(invalid);
        }
        Duration::try_from_secs_f64(1.0 / rate).map_err(|_| invalid)
    }
}
