//! Input table aliases and shape validation.

use ndarray::{Array1, Array2};

use crate::error::PredictorError;

/// Feature matrix: one row per observation, one column per predictor.
///
/// When charting, column 0 is treated as a date/ordinal key. The fit itself
/// makes no distinction and consumes every column.
pub type Features = Array2<f64>;

/// Target vector, same length and row order as the feature matrix.
pub type Targets = Array1<f64>;

/// Validate a training pair before it reaches the solver.
pub fn validate_train_shapes(features: &Features, targets: &Targets) -> Result<(), PredictorError> {
    if features.nrows() == 0 {
        return Err(PredictorError::EmptyDataset);
    }
    if features.nrows() != targets.len() {
        return Err(PredictorError::TargetLenMismatch {
            rows: features.nrows(),
            targets: targets.len(),
        });
    }
    Ok(())
}

/// Validate that a prediction input has the width the model was fitted on.
pub fn validate_feature_width(expected: usize, features: &Features) -> Result<(), PredictorError> {
    if features.ncols() != expected {
        return Err(PredictorError::FeatureCountMismatch {
            expected,
            got: features.ncols(),
        });
    }
    Ok(())
}
