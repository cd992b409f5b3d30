//! Error types with rich diagnostics using miette
//!
//! Every variant is a caller mistake in the chart configuration; layout
//! itself cannot fail once a `ChartData` has been built.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while interpreting chart configuration.
#[derive(Error, Diagnostic, Debug)]
pub enum ChartError {
    #[error("series {series:?} has an unsupported shape: {found}")]
    #[diagnostic(
        code(svgbar::config::unsupported_series),
        help("a series must be an array of numbers or an object mapping integer positions to numbers")
    )]
    UnsupportedSeries {
        series: String,
        found: &'static str,
    },

    #[error("series {series:?} contains a non-numeric value")]
    #[diagnostic(code(svgbar::config::non_numeric_value))]
    NonNumericValue { series: String },

    #[error("series {series:?} has a non-integer position key {key:?}")]
    #[diagnostic(
        code(svgbar::config::invalid_position),
        help("position keys must parse as integers")
    )]
    InvalidPosition { series: String, key: String },

    #[error("series order references unknown series {name:?}")]
    #[diagnostic(code(svgbar::config::unknown_series))]
    UnknownSeries { name: String },
}
