//! The stateful fit/score/chart helper.

use std::time::{Duration, Instant};

use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_linear::{FittedLinearRegression, LinearRegression};
use ndarray::Array1;

use crate::chart::{ChartRenderer, ChartTable};
use crate::data::{self, Features, Targets};
use crate::error::PredictorError;
use crate::metrics::{Mape, Metric, Mse, RSquared};
use crate::report::BenchmarkReport;

/// Ordinary-least-squares predictor.
///
/// Owns one fitted model handle and the wall-clock duration of the most
/// recent fit. The lifecycle is unfitted → fitted, transitioning on the
/// first successful [`train`](Predictor::train); there is no transition
/// back. Every later train replaces the model and overwrites the duration.
/// A train that fails validation or solving leaves the previous state
/// untouched.
///
/// # Example
///
/// ```
/// use ndarray::{arr1, arr2};
/// use stockcast::predictor::Predictor;
///
/// let features = arr2(&[[1.0], [2.0], [3.0], [4.0]]);
/// let targets = arr1(&[2.0, 4.0, 6.0, 8.0]);
///
/// let mut predictor = Predictor::new();
/// predictor.train(&features, &targets).unwrap();
///
/// let out = predictor.predict(&arr2(&[[5.0]])).unwrap();
/// assert!((out[0] - 10.0).abs() < 1e-6);
/// ```
#[derive(Debug, Default)]
pub struct Predictor {
    model: Option<FittedLinearRegression<f64>>,
    /// Feature width the model was fitted on. Valid while `model` is `Some`.
    n_features: usize,
    last_train_duration: Option<Duration>,
}

impl Predictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Duration of the most recent successful fit.
    pub fn last_train_duration(&self) -> Option<Duration> {
        self.last_train_duration
    }

    /// Fit an OLS model with intercept on the given data.
    ///
    /// Inputs are copied, never mutated. Only the solver call itself is
    /// timed. In-sample predictions are not returned here; call
    /// [`predict`](Predictor::predict) with the training features instead.
    pub fn train(&mut self, features: &Features, targets: &Targets) -> Result<(), PredictorError> {
        data::validate_train_shapes(features, targets)?;

        let dataset = Dataset::new(features.to_owned(), targets.to_owned());
        let params = LinearRegression::new().with_intercept(true);

        let start = Instant::now();
        let fitted = params.fit(&dataset)?;
        let elapsed = start.elapsed();

        log::debug!(
            "fitted {} rows x {} cols in {:?}",
            features.nrows(),
            features.ncols(),
            elapsed
        );

        self.n_features = features.ncols();
        self.model = Some(fitted);
        self.last_train_duration = Some(elapsed);
        Ok(())
    }

    /// Apply the fitted model to a feature matrix.
    ///
    /// The matrix must have the column count seen at train time; the output
    /// has one prediction per input row.
    pub fn predict(&self, features: &Features) -> Result<Array1<f64>, PredictorError> {
        let model = self.model.as_ref().ok_or(PredictorError::NotFitted)?;
        data::validate_feature_width(self.n_features, features)?;
        Ok(model.predict(features))
    }

    /// Compute MSE, R², and MAPE and print the report to stdout.
    ///
    /// The returned [`BenchmarkReport`] carries the same numbers so callers
    /// and tests can inspect them without capturing output.
    pub fn benchmark(
        &self,
        actual: &Targets,
        predicted: &Targets,
    ) -> Result<BenchmarkReport, PredictorError> {
        let train_duration = match (&self.model, self.last_train_duration) {
            (Some(_), Some(duration)) => duration,
            _ => return Err(PredictorError::NotFitted),
        };
        if actual.len() != predicted.len() {
            return Err(PredictorError::PredictionLenMismatch {
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }

        let actual = actual.to_vec();
        let predicted = predicted.to_vec();
        let report = BenchmarkReport {
            train_duration,
            mse: Mse.evaluate(&predicted, &actual),
            r_squared: RSquared.evaluate(&predicted, &actual),
            mape: Mape.evaluate(&predicted, &actual),
        };

        println!("{report}");
        Ok(report)
    }

    /// Print the date-sorted actual/predicted table and hand it to the
    /// renderer.
    ///
    /// Column 0 of `features` is the date key; sorting happens regardless of
    /// input row order. Rendering is synchronous on the calling thread.
    pub fn plot(
        &self,
        features: &Features,
        actual: &Targets,
        predicted: &Targets,
        renderer: &dyn ChartRenderer,
    ) -> Result<(), PredictorError> {
        if self.model.is_none() {
            return Err(PredictorError::NotFitted);
        }

        let table = ChartTable::from_parts(features, actual, predicted)?;
        println!("{table}");
        renderer.render(&table)?;
        Ok(())
    }
}
