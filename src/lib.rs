//! Bar charts rendered to SVG through a tiny element-tree DOM.
//!
//! The crate has two halves: [`svg`] is a generic element tree with
//! deterministic attribute ordering and indented text rendering, and
//! [`chart`] lays out named numeric series as bar geometry on top of it.
//! Rendering is pure: no I/O, no global state; the caller decides where
//! the string goes.
//!
//! ```
//! use svgbar::{BarChart, ChartData, SeriesData};
//!
//! let data = ChartData::new([
//!     ("used".to_string(), SeriesData::Indexed(vec![1.0, 2.0, 3.0])),
//!     ("free".to_string(), SeriesData::Indexed(vec![4.0, 5.0, 6.0])),
//! ]);
//! let chart = BarChart::bordered("mem", 640.0, 480.0, "Memory", data);
//! let svg = svgbar::render(&chart).unwrap();
//! assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
//! ```

pub mod chart;
pub mod errors;
pub mod log;
pub mod svg;
pub mod types;

pub use chart::{BarChart, BarLayout, ChartData, Extent, Palette, SeriesData, Skin};
pub use errors::ChartError;
pub use svg::style::{Font, Style};
pub use svg::{AttrValue, Element, Node, RawText, Render};
pub use types::Rgb;

/// Render a chart as a complete SVG document.
///
/// Wraps the chart's `<g>` tree in an `<svg>` root (id `"{chart-id}-svg"`)
/// sized like the chart, and returns the rendered markup.
pub fn render(chart: &BarChart) -> Result<String, miette::Report> {
    let group = chart.build()?;
    let doc = svg::shapes::document(
        &format!("{}-svg", chart.id()),
        chart.width().clone(),
        chart.height().clone(),
        [group.into()],
    );
    Ok(doc.render(0))
}
