//! Per-frame metrics published by the realtime clock.

use membrane_core::FrameId;

/// Timing and counters for the most recent frame.
///
/// `advance_us` describes the latest frame only; the strike and overrun
/// counters are cumulative since the clock started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameMetrics {
    /// Frame produced by the latest `advance()`.
    pub frame: FrameId,
    /// Wall-clock time of that `advance()`, in microseconds.
    pub advance_us: u64,
    /// Strikes applied to the membrane.
    pub strikes_applied: u64,
    /// Strikes rejected because they fell outside the excitable window or
    /// the membrane domain.
    pub strikes_rejected: u64,
    /// Frames whose work exceeded the frame budget.
    pub overruns: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = FrameMetrics::default();
        assert_eq!(m.frame, FrameId(0));
        assert_eq!(m.advance_us, 0);
        assert_eq!(m.strikes_applied, 0);
        assert_eq!(m.strikes_rejected, 0);
        assert_eq!(m.overruns, 0);
    }
}
