//! Reusable assertions over displacement fields.
//!
//! - [`peak_abs`]: largest absolute value in a slice
//! - [`windowed_peaks`]: per-window maxima of a peak series
//! - [`assert_symmetric_about`]: mirror and transpose symmetry of a square
//!   field about a center cell

use membrane_core::AmplitudeField;

/// Largest absolute value in `values` (0 for an empty slice).
pub fn peak_abs(values: &[f32]) -> f32 {
    values.iter().fold(0.0f32, |acc, v| acc.max(v.abs()))
}

/// Split `series` into consecutive windows of `window` entries and return
/// the maximum of each full window. A trailing partial window is dropped.
pub fn windowed_peaks(series: &[f32], window: usize) -> Vec<f32> {
    series
        .chunks_exact(window)
        .map(|chunk| chunk.iter().copied().fold(0.0f32, f32::max))
        .collect()
}

/// Assert that `field` is symmetric under horizontal and vertical
/// reflection and under transposition about `(center, center)`, for every
/// cell within `extent` of the center on both axes.
///
/// Values are compared with an absolute tolerance `tol`, since mirrored
/// stencils sum their neighbours in a different order.
///
/// # Panics
///
/// Panics on the first asymmetric pair.
pub fn assert_symmetric_about<F: AmplitudeField>(
    field: &F,
    center: i32,
    extent: i32,
    tol: f32,
) {
    let at = |x: i32, y: i32| {
        field
            .sample(x, y)
            .unwrap_or_else(|| panic!("cell ({x}, {y}) off grid"))
    };
    for dy in -extent..=extent {
        for dx in -extent..=extent {
            let v = at(center + dx, center + dy);
            let images = [
                ("mirror-x", at(center - dx, center + dy)),
                ("mirror-y", at(center + dx, center - dy)),
                ("transpose", at(center + dy, center + dx)),
            ];
            for (name, w) in images {
                assert!(
                    (v - w).abs() <= tol,
                    "{name} asymmetry at offset ({dx}, {dy}): {v} vs {w}"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockField;

    #[test]
    fn peak_abs_takes_magnitude() {
        assert_eq!(peak_abs(&[0.5, -2.0, 1.0]), 2.0);
        assert_eq!(peak_abs(&[]), 0.0);
    }

    #[test]
    fn windowed_peaks_drops_partial_window() {
        let peaks = windowed_peaks(&[1.0, 3.0, 2.0, 0.5, 0.25, 9.0, 7.0], 3);
        assert_eq!(peaks, vec![3.0, 9.0]);
    }

    #[test]
    fn symmetric_field_passes() {
        let mut f = MockField::all_active(9);
        f.set(4, 4, 1.0);
        for (x, y) in [(3, 4), (5, 4), (4, 3), (4, 5)] {
            f.set(x, y, 0.25);
        }
        assert_symmetric_about(&f, 4, 3, 1e-6);
    }

    #[test]
    #[should_panic(expected = "asymmetry")]
    fn asymmetric_field_fails() {
        let mut f = MockField::all_active(9);
        f.set(5, 4, 1.0);
        assert_symmetric_about(&f, 4, 2, 1e-6);
    }
}
