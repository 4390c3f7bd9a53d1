//! Actual-vs-predicted presentation table and chart rendering.
//!
//! Table building and sorting are plain data work and live in
//! [`ChartTable`]; the display side is behind the [`ChartRenderer`] trait so
//! callers can swap the plotting backend (or a recording fake in tests)
//! without touching the table logic.

use std::fmt;
use std::path::PathBuf;

use plotters::prelude::*;

use crate::data::{Features, Targets};

/// Chart-specific errors.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error(
        "row count mismatch: features={features}, actual={actual}, predicted={predicted}"
    )]
    RowCountMismatch {
        features: usize,
        actual: usize,
        predicted: usize,
    },

    #[error("feature matrix has no date column")]
    MissingDateColumn,

    #[error("cannot render an empty table")]
    EmptyTable,

    #[error("chart backend error: {0}")]
    Backend(String),
}

/// One charted observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartRow {
    pub date: f64,
    pub actual: f64,
    pub predicted: f64,
}

/// Rows of {actual, predicted, date}, sorted ascending by date.
///
/// The date key is taken from column 0 of the feature matrix. Input row
/// order does not matter; construction sorts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartTable {
    rows: Vec<ChartRow>,
}

impl ChartTable {
    /// Build and sort the table from a feature matrix and two value vectors.
    pub fn from_parts(
        features: &Features,
        actual: &Targets,
        predicted: &Targets,
    ) -> Result<Self, ChartError> {
        if features.nrows() != actual.len() || actual.len() != predicted.len() {
            return Err(ChartError::RowCountMismatch {
                features: features.nrows(),
                actual: actual.len(),
                predicted: predicted.len(),
            });
        }
        if features.ncols() == 0 {
            return Err(ChartError::MissingDateColumn);
        }

        let dates = features.column(0);
        let mut rows: Vec<ChartRow> = dates
            .iter()
            .zip(actual.iter())
            .zip(predicted.iter())
            .map(|((&date, &actual), &predicted)| ChartRow {
                date,
                actual,
                predicted,
            })
            .collect();
        rows.sort_by(|a, b| a.date.total_cmp(&b.date));

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// (min, max) of the date column. Empty tables yield `None`.
    fn date_range(&self) -> Option<(f64, f64)> {
        let first = self.rows.first()?.date;
        let last = self.rows.last()?.date;
        Some((first, last))
    }

    /// (min, max) over both value series.
    fn value_range(&self) -> Option<(f64, f64)> {
        self.rows.iter().fold(None, |range, row| {
            let lo = row.actual.min(row.predicted);
            let hi = row.actual.max(row.predicted);
            Some(match range {
                None => (lo, hi),
                Some((min, max)) => (min.min(lo), max.max(hi)),
            })
        })
    }
}

impl fmt::Display for ChartTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>12} {:>12} {:>12}", "Actual", "Predicted", "Date")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:>12.4} {:>12.4} {:>12.4}",
                row.actual, row.predicted, row.date
            )?;
        }
        Ok(())
    }
}

/// Rendering capability injected into [`Predictor::plot`](crate::predictor::Predictor::plot).
pub trait ChartRenderer {
    /// Render a sorted table. Synchronous; returns once the chart exists.
    fn render(&self, table: &ChartTable) -> Result<(), ChartError>;
}

/// Line chart of Actual vs Predicted over Date, written as an SVG file.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    path: PathBuf,
    size: (u32, u32),
}

impl SvgRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: (800, 600),
        }
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.size = (width, height);
        self
    }

    fn draw(&self, table: &ChartTable) -> Result<(), Box<dyn std::error::Error>> {
        let (date_min, date_max) = table.date_range().ok_or(ChartError::EmptyTable)?;
        let (value_min, value_max) = table.value_range().ok_or(ChartError::EmptyTable)?;

        // Degenerate ranges (single row, flat series) still need nonzero extent.
        let x_pad = ((date_max - date_min) * 0.05).max(0.5);
        let y_pad = ((value_max - value_min) * 0.05).max(0.5);

        let root = SVGBackend::new(&self.path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption("Actual vs Predicted", ("sans-serif", 24))
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(
                (date_min - x_pad)..(date_max + x_pad),
                (value_min - y_pad)..(value_max + y_pad),
            )?;

        chart
            .configure_mesh()
            .x_desc("Date")
            .y_desc("Value")
            .draw()?;

        chart
            .draw_series(LineSeries::new(
                table.rows().iter().map(|r| (r.date, r.actual)),
                &BLUE,
            ))?
            .label("Actual")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

        chart
            .draw_series(LineSeries::new(
                table.rows().iter().map(|r| (r.date, r.predicted)),
                &RED,
            ))?
            .label("Predicted")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        root.present()?;
        Ok(())
    }
}

impl ChartRenderer for SvgRenderer {
    fn render(&self, table: &ChartTable) -> Result<(), ChartError> {
        if table.is_empty() {
            return Err(ChartError::EmptyTable);
        }
        self.draw(table)
            .map_err(|e| ChartError::Backend(e.to_string()))
    }
}
