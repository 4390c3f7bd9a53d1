//! Regression quality metrics.
//!
//! Metrics are separate from the fit itself — the solver minimizes squared
//! error, but a model can be evaluated with any of these. All metrics return
//! `0.0` on empty input.

/// Denominator floor for MAPE.
///
/// Actual values with magnitude below this are clamped up to it so a
/// near-zero actual cannot blow the ratio up.
pub const MAPE_EPSILON: f64 = 1e-8;

/// Evaluation metric over paired prediction/actual slices.
pub trait Metric {
    /// Compute the metric. Slices must be equal length.
    fn evaluate(&self, predictions: &[f64], actuals: &[f64]) -> f64;

    /// Whether larger values indicate a better model.
    fn higher_is_better(&self) -> bool;

    /// Short lowercase name for report lines.
    fn name(&self) -> &str;
}

// =============================================================================
// MSE (Mean Squared Error)
// =============================================================================

/// Mean Squared Error: mean((pred - actual)²)
///
/// Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mse;

impl Metric for Mse {
    fn evaluate(&self, predictions: &[f64], actuals: &[f64]) -> f64 {
        debug_assert_eq!(predictions.len(), actuals.len());

        if predictions.is_empty() {
            return 0.0;
        }

        predictions
            .iter()
            .zip(actuals.iter())
            .map(|(p, a)| {
                let diff = p - a;
                diff * diff
            })
            .sum::<f64>()
            / predictions.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "mse"
    }
}

// =============================================================================
// R² (Coefficient of Determination)
// =============================================================================

/// Coefficient of determination: 1 − SS_res / SS_tot.
///
/// Fraction of target variance explained by the model; 1.0 is a perfect fit.
/// Higher is better. Can be negative for models worse than predicting the
/// target mean.
///
/// For a constant target vector SS_tot is zero and the ratio is undefined;
/// this returns 1.0 when the residuals are also zero and 0.0 otherwise, so
/// the score stays finite.
#[derive(Debug, Clone, Copy, Default)]
pub struct RSquared;

impl Metric for RSquared {
    fn evaluate(&self, predictions: &[f64], actuals: &[f64]) -> f64 {
        debug_assert_eq!(predictions.len(), actuals.len());

        if predictions.is_empty() {
            return 0.0;
        }

        let mean = actuals.iter().sum::<f64>() / actuals.len() as f64;
        let ss_tot: f64 = actuals.iter().map(|a| (a - mean) * (a - mean)).sum();
        let ss_res: f64 = predictions
            .iter()
            .zip(actuals.iter())
            .map(|(p, a)| (a - p) * (a - p))
            .sum();

        if ss_tot == 0.0 {
            if ss_res == 0.0 {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        }
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        "r2"
    }
}

// =============================================================================
// MAPE (Mean Absolute Percentage Error)
// =============================================================================

/// Mean Absolute Percentage Error over rows with a nonzero actual value.
///
/// Each included row contributes `|actual − pred| / max(|actual|, ε)` with
/// ε = [`MAPE_EPSILON`]. Rows where the actual value is exactly zero are
/// excluded from both the sum and the count — this changes which rows weigh
/// into the average and is intentional, not a division guard. Returns a
/// fraction (0.375, not 37.5); report formatting scales to percent.
///
/// Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mape;

impl Metric for Mape {
    fn evaluate(&self, predictions: &[f64], actuals: &[f64]) -> f64 {
        debug_assert_eq!(predictions.len(), actuals.len());

        let (sum, count) = predictions
            .iter()
            .zip(actuals.iter())
            .filter(|(_, a)| **a != 0.0)
            .fold((0.0f64, 0usize), |(sum, count), (p, a)| {
                let ape = (a - p).abs() / a.abs().max(MAPE_EPSILON);
                (sum + ape, count + 1)
            });

        if count == 0 {
            return 0.0;
        }

        sum / count as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        "mape"
    }
}
