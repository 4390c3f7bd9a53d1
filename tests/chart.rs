//! Chart plumbing tests: renderer injection through `Predictor::plot` and
//! the SVG backend smoke test.

use std::cell::RefCell;

use ndarray::{arr1, arr2};

use stockcast::chart::{ChartError, ChartRenderer, ChartTable, SvgRenderer};
use stockcast::error::PredictorError;
use stockcast::predictor::Predictor;

/// Records what it was asked to render instead of drawing anything.
#[derive(Default)]
struct RecordingRenderer {
    rendered: RefCell<Option<Vec<f64>>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, table: &ChartTable) -> Result<(), ChartError> {
        let dates = table.rows().iter().map(|r| r.date).collect();
        *self.rendered.borrow_mut() = Some(dates);
        Ok(())
    }
}

fn fitted_predictor() -> Predictor {
    let features = arr2(&[[1.0], [2.0], [3.0]]);
    let targets = arr1(&[2.0, 4.0, 6.0]);
    let mut predictor = Predictor::new();
    predictor.train(&features, &targets).unwrap();
    predictor
}

#[test]
fn plot_hands_the_sorted_table_to_the_renderer() {
    let predictor = fitted_predictor();
    let renderer = RecordingRenderer::default();

    // Dates deliberately out of order.
    let features = arr2(&[[3.0], [1.0], [2.0]]);
    let actual = arr1(&[6.0, 2.0, 4.0]);
    let predicted = predictor.predict(&features).unwrap();

    predictor
        .plot(&features, &actual, &predicted, &renderer)
        .unwrap();

    let dates = renderer.rendered.borrow().clone().unwrap();
    assert_eq!(dates, vec![1.0, 2.0, 3.0]);
}

#[test]
fn plot_before_train_is_not_fitted() {
    let predictor = Predictor::new();
    let renderer = RecordingRenderer::default();
    let features = arr2(&[[1.0]]);
    let values = arr1(&[1.0]);

    let err = predictor
        .plot(&features, &values, &values, &renderer)
        .unwrap_err();
    assert!(matches!(err, PredictorError::NotFitted));
    assert!(renderer.rendered.borrow().is_none());
}

#[test]
fn plot_propagates_table_errors() {
    let predictor = fitted_predictor();
    let renderer = RecordingRenderer::default();

    let features = arr2(&[[1.0], [2.0]]);
    let actual = arr1(&[1.0, 2.0]);
    let predicted = arr1(&[1.0]);

    let err = predictor
        .plot(&features, &actual, &predicted, &renderer)
        .unwrap_err();
    assert!(matches!(
        err,
        PredictorError::Chart(ChartError::RowCountMismatch { .. })
    ));
}

#[test]
fn svg_renderer_writes_a_chart_file() {
    let features = arr2(&[[1.0], [3.0], [2.0]]);
    let actual = arr1(&[10.0, 30.0, 20.0]);
    let predicted = arr1(&[11.0, 29.0, 21.0]);
    let table = ChartTable::from_parts(&features, &actual, &predicted).unwrap();

    let path = std::env::temp_dir().join("stockcast_chart_test.svg");
    let renderer = SvgRenderer::new(path.clone()).with_size(640, 480);
    renderer.render(&table).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("<svg"));
    std::fs::remove_file(&path).ok();
}
