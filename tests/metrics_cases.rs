//! JSON-driven metric expectations.
//!
//! Cases live in `tests/test-cases/metrics.json`; each names a metric and an
//! expected value for a small actual/predicted pair.

use std::fs::File;
use std::path::PathBuf;

use serde::Deserialize;

use stockcast::metrics::{Mape, Metric, Mse, RSquared};

#[derive(Debug, Deserialize)]
struct MetricCase {
    name: String,
    metric: String,
    actual: Vec<f64>,
    predicted: Vec<f64>,
    expected: f64,
}

fn load_cases() -> Vec<MetricCase> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/test-cases/metrics.json");
    let file = File::open(&path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()));
    serde_json::from_reader(file)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

fn evaluate(metric: &str, predicted: &[f64], actual: &[f64]) -> f64 {
    match metric {
        "mse" => Mse.evaluate(predicted, actual),
        "r2" => RSquared.evaluate(predicted, actual),
        "mape" => Mape.evaluate(predicted, actual),
        other => panic!("unknown metric in test case: {other}"),
    }
}

#[test]
fn metric_cases_match_expected_values() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in cases {
        let got = evaluate(&case.metric, &case.predicted, &case.actual);
        assert!(
            (got - case.expected).abs() < 1e-9,
            "case {}: {} = {}, expected {}",
            case.name,
            case.metric,
            got,
            case.expected
        );
    }
}

#[test]
fn metric_names_are_stable() {
    assert_eq!(Mse.name(), "mse");
    assert_eq!(RSquared.name(), "r2");
    assert_eq!(Mape.name(), "mape");
    assert!(RSquared.higher_is_better());
    assert!(!Mse.higher_is_better());
    assert!(!Mape.higher_is_better());
}
