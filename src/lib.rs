//! stockcast: fit, score, and chart an ordinary-least-squares regression.
//!
//! This crate is a thin layer over an external least-squares solver. It times
//! the fit, computes regression quality metrics (MSE, R², MAPE), and can
//! render an actual-vs-predicted chart ordered by a date column.

pub mod chart;
pub mod data;
pub mod error;
pub mod metrics;
pub mod predictor;
pub mod report;
pub mod testing;
