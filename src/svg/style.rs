//! Presentation styles serialized as CSS-like declaration strings.

use std::fmt;

/// A font descriptor for the `font` declaration.
///
/// Serializes as the space-joined non-absent parts, decoration first:
/// `"italic sans-serif 12px"`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Font {
    pub face: Option<String>,
    pub decoration: Option<String>,
    pub size: Option<String>,
}

impl Font {
    /// A sans-serif font at the given size, e.g. `Font::sans_serif("12px")`.
    pub fn sans_serif(size: impl Into<String>) -> Font {
        Font {
            face: Some("sans-serif".to_string()),
            decoration: None,
            size: Some(size.into()),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.decoration.as_deref(),
            self.face.as_deref(),
            self.size.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        f.write_str(&parts.join(" "))
    }
}

/// Stroke/fill presentation attributes for a shape.
///
/// A plain value object: clone freely, share across shapes. Overriding a
/// field on one copy never affects another. An absent field means "omit
/// this declaration", not "empty string".
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub stroke: Option<String>,
    pub fill: Option<String>,
    pub stroke_width: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
    pub font: Option<Font>,
}

impl Default for Style {
    fn default() -> Style {
        Style {
            stroke: Some("black".to_string()),
            fill: Some("black".to_string()),
            stroke_width: Some(1.0),
            stroke_opacity: Some(1.0),
            fill_opacity: Some(1.0),
            font: None,
        }
    }
}

impl Style {
    /// Copy of this style with the fill replaced.
    pub fn with_fill(&self, fill: impl Into<String>) -> Style {
        Style {
            fill: Some(fill.into()),
            ..self.clone()
        }
    }
}

impl fmt::Display for Style {
    /// Declarations in fixed order: stroke, fill, stroke-width,
    /// stroke-opacity, fill-opacity, font. Absent fields are omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(stroke) = &self.stroke {
            parts.push(format!("stroke:{}", stroke));
        }
        if let Some(fill) = &self.fill {
            parts.push(format!("fill:{}", fill));
        }
        if let Some(width) = self.stroke_width {
            parts.push(format!("stroke-width:{}", width));
        }
        if let Some(opacity) = self.stroke_opacity {
            parts.push(format!("stroke-opacity:{}", opacity));
        }
        if let Some(opacity) = self.fill_opacity {
            parts.push(format!("fill-opacity:{}", opacity));
        }
        if let Some(font) = &self.font {
            parts.push(format!("font:{}", font));
        }
        f.write_str(&parts.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_render_in_fixed_order() {
        let style = Style::default();
        assert_eq!(
            style.to_string(),
            "stroke:black; fill:black; stroke-width:1; stroke-opacity:1; fill-opacity:1"
        );
    }

    #[test]
    fn absent_fill_is_omitted() {
        let style = Style {
            stroke: Some("grey".to_string()),
            fill: None,
            stroke_width: Some(1.0),
            stroke_opacity: Some(0.4),
            fill_opacity: Some(1.0),
            font: None,
        };
        assert_eq!(
            style.to_string(),
            "stroke:grey; stroke-width:1; stroke-opacity:0.4; fill-opacity:1"
        );
    }

    #[test]
    fn with_fill_leaves_the_original_untouched() {
        let base = Style {
            fill: None,
            ..Style::default()
        };
        let derived = base.with_fill("#641E16");
        assert_eq!(derived.fill.as_deref(), Some("#641E16"));
        assert_eq!(base.fill, None);
    }

    #[test]
    fn font_declaration_comes_last() {
        let style = Style {
            font: Some(Font::sans_serif("12px")),
            ..Style::default()
        };
        assert!(style.to_string().ends_with("; font:sans-serif 12px"));
    }

    #[test]
    fn font_orders_decoration_face_size() {
        let font = Font {
            face: Some("serif".to_string()),
            decoration: Some("italic".to_string()),
            size: Some("10px".to_string()),
        };
        assert_eq!(font.to_string(), "italic serif 10px");
    }
}
