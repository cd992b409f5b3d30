//! Shape constructors: fixed specializations of [`Element`] with the
//! attribute sets and emission order each SVG primitive requires.

use std::fmt::Display;

use super::style::Style;
use super::{AttrValue, Element, RawText};

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

fn style_attr(style: Option<&Style>) -> Option<AttrValue> {
    style.map(|s| AttrValue::Text(s.to_string()))
}

/// The `<svg>` document root.
///
/// `width` and `height` accept numbers or percentage strings and pass
/// through verbatim. Attribute order: `xmlns, id, width, height`.
pub fn document(
    id: &str,
    width: impl Into<AttrValue>,
    height: impl Into<AttrValue>,
    children: impl IntoIterator<Item = super::Node>,
) -> Element {
    Element::new("svg")
        .attr_opt("xmlns", Some(AttrValue::List(vec![SVG_NS.to_string()])))
        .attr("id", id)
        .attr_opt("style", None)
        .attr("width", width)
        .attr("height", height)
        .children(children)
}

/// A `<rect>`. Self-closing; attribute order `id, style, x, y, width, height`.
pub fn rect(
    id: &str,
    x: impl Into<AttrValue>,
    y: impl Into<AttrValue>,
    width: impl Into<AttrValue>,
    height: impl Into<AttrValue>,
    style: Option<&Style>,
) -> Element {
    Element::new("rect")
        .attr("id", id)
        .attr_opt("style", style_attr(style))
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
        .self_closing()
}

/// A line expressed as a `<path>` with a relative second point:
/// `d = "m {x1},{y1} {dx},{dy}"`.
///
/// All four operands pass through verbatim; `dx`/`dy` are an offset from
/// the first point, not absolute coordinates. Attribute order
/// `d, id, style`.
pub fn line(
    id: &str,
    x1: impl Display,
    y1: impl Display,
    dx: impl Display,
    dy: impl Display,
    style: Option<&Style>,
) -> Element {
    Element::new("path")
        .attr("d", format!("m {},{} {},{}", x1, y1, dx, dy))
        .attr("id", id)
        .attr_opt("style", style_attr(style))
        .self_closing()
}

/// A `<text>` with a single raw text child. Attribute order `x, y, id, style`.
pub fn text(
    id: &str,
    x: impl Into<AttrValue>,
    y: impl Into<AttrValue>,
    content: &str,
    style: Option<&Style>,
) -> Element {
    Element::new("text")
        .attr("x", x)
        .attr("y", y)
        .attr("id", id)
        .attr_opt("style", style_attr(style))
        .child(RawText::new(content))
}

/// A nested viewport: an inner `<svg>` with its own `viewBox`, scoping
/// its children to a coordinate space independent of the outer document.
/// Attribute order `id, style, x, y, width, height, viewBox`.
pub fn viewport(
    id: &str,
    style: Option<&Style>,
    x: impl Into<AttrValue>,
    y: impl Into<AttrValue>,
    width: impl Into<AttrValue>,
    height: impl Into<AttrValue>,
    view_box: &str,
    children: impl IntoIterator<Item = super::Node>,
) -> Element {
    Element::new("svg")
        .attr("id", id)
        .attr_opt("style", style_attr(style))
        .attr("x", x)
        .attr("y", y)
        .attr("width", width)
        .attr("height", height)
        .attr("viewBox", view_box)
        .children(children)
}

#[cfg(test)]
mod tests {
    use super::super::Render;
    use super::*;

    #[test]
    fn rect_attribute_sequence() {
        let r = rect("r1", 0.0, 0.0, 10.0, 20.0, Some(&Style::default()));
        assert_eq!(
            r.attr_names(),
            vec!["id", "style", "x", "y", "width", "height"]
        );
    }

    #[test]
    fn rect_without_style_omits_the_slot() {
        let r = rect("r1", 0.0, 0.0, 10.0, 20.0, None);
        assert_eq!(r.attr_names(), vec!["id", "x", "y", "width", "height"]);
        insta::assert_snapshot!(
            r.render(0),
            @r#"<rect id="r1" x="0" y="0" width="10" height="20" />"#
        );
    }

    #[test]
    fn line_second_point_is_a_raw_offset() {
        let l = line("l1", "0", "66.0000", "100", "66.0000", None);
        insta::assert_snapshot!(
            l.render(0),
            @r#"<path d="m 0,66.0000 100,66.0000" id="l1" />"#
        );
    }

    #[test]
    fn text_prepends_coordinates() {
        let t = text("t1", 0.0, 12.0, "Title", None);
        assert_eq!(t.attr_names(), vec!["x", "y", "id"]);
        assert_eq!(t.render(0), "<text x=\"0\" y=\"12\" id=\"t1\">\nTitle\n</text>\n");
    }

    #[test]
    fn document_emits_namespace_first() {
        let d = document("doc", 640.0, "480", Vec::new());
        insta::assert_snapshot!(
            d.render(0),
            @r#"<svg xmlns="http://www.w3.org/2000/svg" id="doc" width="640" height="480"></svg>"#
        );
    }

    #[test]
    fn viewport_carries_its_own_view_box() {
        let v = viewport("v1", None, "5%", "10%", "90%", "80%", "0 0 100 100", Vec::new());
        assert_eq!(
            v.attr_names(),
            vec!["id", "x", "y", "width", "height", "viewBox"]
        );
        assert_eq!(v.tag(), "svg");
    }
}
