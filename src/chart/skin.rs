//! Chart appearance: style presets and layout tunables.

use crate::svg::style::{Font, Style};

/// Styles and tunables for one chart.
///
/// `y_scale` is the vertical-fill fraction applied to bar heights in the
/// bordered layout; `y_divisions` is the number of horizontal guide
/// lines placed between the smallest and largest observed value.
#[derive(Debug, Clone)]
pub struct Skin {
    pub title: Style,
    pub outer_border: Style,
    pub inner_border: Style,
    pub shape: Style,
    pub divisions: Style,
    pub y_scale: f64,
    pub y_divisions: usize,
}

impl Default for Skin {
    fn default() -> Skin {
        Skin {
            title: Style {
                font: Some(Font::sans_serif("12px")),
                ..Style::default()
            },
            outer_border: Style {
                stroke: Some("grey".to_string()),
                fill: Some("white".to_string()),
                stroke_width: Some(2.0),
                ..Style::default()
            },
            inner_border: Style {
                stroke: Some("grey".to_string()),
                fill: Some("#E0E0E0".to_string()),
                stroke_width: Some(2.0),
                ..Style::default()
            },
            shape: Style {
                stroke: Some("black".to_string()),
                fill: None,
                stroke_width: Some(1.0),
                ..Style::default()
            },
            divisions: Style {
                stroke: Some("grey".to_string()),
                fill: None,
                stroke_width: Some(1.0),
                stroke_opacity: Some(0.4),
                ..Style::default()
            },
            y_scale: 0.97,
            y_divisions: 8,
        }
    }
}
