//! Benchmark report formatting.

use std::fmt;
use std::time::Duration;

/// Metric summary produced by [`Predictor::benchmark`](crate::predictor::Predictor::benchmark).
///
/// `r_squared` and `mape` are fractions; `Display` scales them to
/// percentages with two decimals. MSE is printed as a plain decimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkReport {
    /// Wall-clock duration of the most recent fit.
    pub train_duration: Duration,
    pub mse: f64,
    pub r_squared: f64,
    pub mape: f64,
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Train time: {} seconds", self.train_duration.as_secs_f64())?;
        writeln!(f, "Train MSE: {}", self.mse)?;
        writeln!(f, "Train R2: {:.2}%", self.r_squared * 100.0)?;
        write!(f, "Train MAPE: {:.2}%", self.mape * 100.0)
    }
}
