//! End-to-end demo: train on a synthetic price series, report metrics, and
//! render an SVG chart.
//!
//! Run with:
//! ```bash
//! cargo run --bin stock_demo
//! ```
//!
//! The chart is written to `stock_demo.svg` in the working directory.

use ndarray::{Array1, Array2};

use stockcast::chart::SvgRenderer;
use stockcast::error::PredictorError;
use stockcast::predictor::Predictor;

/// Synthetic daily price series: a trend plus deterministic wiggle.
///
/// Column 0 is the day ordinal (the chart's date key), columns 1-2 are
/// auxiliary signals. Rows are emitted out of date order on purpose so the
/// chart path exercises its sort.
fn generate_series(n_days: usize) -> (Array2<f64>, Array1<f64>) {
    let mut features = Vec::with_capacity(n_days * 3);
    let mut prices = Vec::with_capacity(n_days);

    for i in 0..n_days {
        // Reverse the day order; the plot sorts it back.
        let day = (n_days - 1 - i) as f64;
        let momentum = ((i * 7) % 100) as f64 / 10.0;
        let volume = ((i * 13) % 100) as f64 / 10.0;

        features.push(day);
        features.push(momentum);
        features.push(volume);

        let wiggle = ((i * 31) % 100) as f64 / 500.0 - 0.1;
        prices.push(100.0 + 0.8 * day + 0.5 * momentum + 0.25 * volume + wiggle);
    }

    let features = Array2::from_shape_vec((n_days, 3), features)
        .expect("shape matches construction");
    (features, Array1::from_vec(prices))
}

fn main() -> Result<(), PredictorError> {
    env_logger::init();

    let (features, prices) = generate_series(200);

    let mut predictor = Predictor::new();
    predictor.train(&features, &prices)?;

    let predicted = predictor.predict(&features)?;
    predictor.benchmark(&prices, &predicted)?;

    let renderer = SvgRenderer::new("stock_demo.svg");
    predictor.plot(&features, &prices, &predicted, &renderer)?;
    println!("chart written to stock_demo.svg");

    Ok(())
}
