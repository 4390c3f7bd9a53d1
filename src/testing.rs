//! Shared assertion helpers for unit and integration tests.

use approx::AbsDiffEq;

/// Default tolerance for floating point comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Assert two f64 slices are elementwise approximately equal.
///
/// Panics with the first mismatching index and values.
pub fn assert_slices_approx_eq(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "slice lengths differ: {} vs {}",
        actual.len(),
        expected.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.abs_diff_eq(e, tolerance),
            "mismatch at index {i}: {a} vs {e} (tolerance {tolerance})"
        );
    }
}
