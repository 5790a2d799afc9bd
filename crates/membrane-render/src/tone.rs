//! Displacement-to-brightness mapping.
//!
//! Both curves first compress the magnitude logarithmically:
//! ```text
//! log = log10(1 + |v| * 100) / log10(101)      // in [0, 1] for |v| <= 1
//! ```
//! then re-center the signed value around mid-gray.
//!
//! [`ToneCurve::Reference`] applies the `0.5 + 0.5 * _` affine step twice,
//! which folds the whole `[-1, 1]` range into the upper half of the
//! brightness scale (`v = 0` renders as 191). It is the default and keeps
//! frames identical to those of the drum widget it was taken from.
//! [`ToneCurve::SingleAffine`] applies the step once and uses the full
//! scale (`v = 0` renders as 127).

/// Brightness mapping applied per cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToneCurve {
    /// Double affine re-centering, `v = 0` maps to 191.
    #[default]
    Reference,
    /// Single affine re-centering, `v = 0` maps to 127.
    SingleAffine,
}

/// `log10(1 + |v| * 100) / log10(101)`.
pub fn log_compress(v: f32) -> f32 {
    (1.0 + v.abs() * 100.0).log10() / 101.0f32.log10()
}

impl ToneCurve {
    /// Normalized brightness in `[0, 1]` (NaN for NaN input).
    pub fn level(self, v: f32) -> f32 {
        let signed = 0.5 + 0.5 * log_compress(v).copysign(v);
        let level = match self {
            Self::Reference => 0.5 + 0.5 * signed,
            Self::SingleAffine => signed,
        };
        level.clamp(0.0, 1.0)
    }

    /// 8-bit brightness, truncated. NaN renders as 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use membrane_render::ToneCurve;
    ///
    /// assert_eq!(ToneCurve::Reference.brightness(0.0), 191);
    /// assert_eq!(ToneCurve::Reference.brightness(1.0), 255);
    /// assert_eq!(ToneCurve::SingleAffine.brightness(0.0), 127);
    /// assert_eq!(ToneCurve::SingleAffine.brightness(-1.0), 0);
    /// ```
    pub fn brightness(self, v: f32) -> u8 {
        // `as` saturates and maps NaN to 0.
        (self.level(v) * 255.0) as u8
    }
}
