//! Crate-wide error type.

use crate::chart::ChartError;

/// Errors surfaced by [`Predictor`](crate::predictor::Predictor) operations.
///
/// Shape and fitted-state preconditions are checked here before anything is
/// handed to the solver; everything the solver itself rejects is wrapped in
/// [`PredictorError::Solver`].
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("model is not fitted; call train first")]
    NotFitted,

    #[error("number of targets ({targets}) does not match number of rows ({rows})")]
    TargetLenMismatch { rows: usize, targets: usize },

    #[error("prediction length ({predicted}) does not match actual length ({actual})")]
    PredictionLenMismatch { actual: usize, predicted: usize },

    #[error("feature count mismatch: model was fitted on {expected} columns, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("linear solver error: {0}")]
    Solver(#[from] linfa_linear::LinearError<f64>),

    #[error("chart error: {0}")]
    Chart(#[from] ChartError),
}
