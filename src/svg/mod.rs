//! Generic SVG element tree: tagged nodes, ordered attributes, indented
//! rendering.
//!
//! Attribute emission order is fixed at construction time: each shape
//! constructor declares its attributes in the order they must appear in
//! the output, and [`Element::render`] walks that list as-is. Absent
//! values keep their slot in the list but are skipped when rendering.
//!
//! Attribute values are written without escaping; callers are responsible
//! for supplying well-formed values.

use std::fmt;

use enum_dispatch::enum_dispatch;

pub mod shapes;
pub mod style;

/// A single attribute value.
///
/// `Number` renders through `f64`'s `Display` (shortest round-trip form);
/// `List` emits one `name="value"` occurrence per item, which is how the
/// repeated `xmlns` declaration on the document root is expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::List(items) => f.write_str(&items.join(" ")),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<u32> for AttrValue {
    fn from(n: u32) -> Self {
        AttrValue::Number(n.into())
    }
}

/// Anything that can be rendered into the output document.
#[enum_dispatch]
pub trait Render {
    /// Render this node at the given indentation level (one space per
    /// level). Rendering is pure; calling it twice yields identical
    /// output.
    fn render(&self, level: usize) -> String;
}

/// A node in the tree: an element or a raw text leaf.
#[enum_dispatch(Render)]
#[derive(Debug, Clone)]
pub enum Node {
    Element,
    RawText,
}

/// An SVG element: tag, ordered attribute list, children.
///
/// Built once via the consuming builder methods and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, Option<AttrValue>)>,
    self_closing: bool,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Element {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
            self_closing: false,
            children: Vec::new(),
        }
    }

    /// Append an attribute. Emission order is append order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Element {
        self.attrs.push((name.into(), Some(value.into())));
        self
    }

    /// Append an attribute slot that may be absent. An absent value keeps
    /// its place in the declared order but is skipped at render time.
    pub fn attr_opt(mut self, name: impl Into<String>, value: Option<AttrValue>) -> Element {
        self.attrs.push((name.into(), value));
        self
    }

    /// Mark this element as self-closing when childless.
    pub fn self_closing(mut self) -> Element {
        self.self_closing = true;
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Element {
        self.children.push(node.into());
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Element {
        self.children.extend(nodes);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Look up an attribute by name. Absent-valued slots report `None`.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn id(&self) -> Option<&str> {
        match self.get("id") {
            Some(AttrValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Attribute names in emission order, skipping absent values.
    pub fn attr_names(&self) -> Vec<&str> {
        self.attrs
            .iter()
            .filter(|(_, v)| v.is_some())
            .map(|(n, _)| n.as_str())
            .collect()
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }
}

impl Render for Element {
    fn render(&self, level: usize) -> String {
        let rendered_children: Vec<String> = self
            .children
            .iter()
            .map(|child| child.render(level + 1))
            .collect();

        let mut rendered_attrs: Vec<String> = Vec::new();
        for (name, value) in &self.attrs {
            let Some(value) = value else { continue };
            match value {
                AttrValue::List(items) => {
                    for item in items {
                        rendered_attrs.push(format!("{}=\"{}\"", name, item));
                    }
                }
                other => rendered_attrs.push(format!("{}=\"{}\"", name, other)),
            }
        }
        let attrs = if rendered_attrs.is_empty() {
            String::new()
        } else {
            format!(" {}", rendered_attrs.join(" "))
        };

        let indent = " ".repeat(level);
        if !rendered_children.is_empty() {
            // The trailing newline means siblings that follow an element
            // with children are separated by a blank line.
            format!(
                "{indent}<{tag}{attrs}>\n{body}\n{indent}</{tag}>\n",
                tag = self.tag,
                body = rendered_children.join("\n"),
            )
        } else if self.self_closing {
            format!("{indent}<{tag}{attrs} />", tag = self.tag)
        } else {
            format!("{indent}<{tag}{attrs}></{tag}>", tag = self.tag)
        }
    }
}

/// A raw text leaf.
///
/// Rendering trims the value and keeps the first line verbatim. For
/// multi-line values the intermediate lines are dropped and the last
/// line is re-emitted indented with a trailing newline; callers wanting
/// faithful multi-line text must emit one node per line. See DESIGN.md
/// for why this lossy behavior is kept.
#[derive(Debug, Clone)]
pub struct RawText {
    text: String,
}

impl RawText {
    pub fn new(text: impl Into<String>) -> RawText {
        RawText { text: text.into() }
    }
}

impl Render for RawText {
    fn render(&self, level: usize) -> String {
        let trimmed = self.text.trim();
        let mut lines = trimmed.lines();
        let Some(first) = lines.next() else {
            return String::new();
        };
        let mut out = first.to_string();
        if let Some(last) = lines.next_back() {
            let indent = " ".repeat(level);
            out.push_str(&format!("{}{}\n", indent, last));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrs_render_in_declared_order() {
        let el = Element::new("rect")
            .attr("id", "r")
            .attr("x", 1.0)
            .attr("y", 2.0)
            .self_closing();
        assert_eq!(el.render(0), r#"<rect id="r" x="1" y="2" />"#);
    }

    #[test]
    fn absent_attrs_are_skipped() {
        let el = Element::new("g")
            .attr("id", "g1")
            .attr_opt("style", None)
            .attr("class", "c");
        assert_eq!(el.render(0), r#"<g id="g1" class="c"></g>"#);
        assert_eq!(el.attr_names(), vec!["id", "class"]);
    }

    #[test]
    fn list_values_emit_repeated_attributes() {
        let el = Element::new("svg").attr_opt(
            "xmlns",
            Some(AttrValue::List(vec![
                "http://a.example".to_string(),
                "http://b.example".to_string(),
            ])),
        );
        assert_eq!(
            el.render(0),
            r#"<svg xmlns="http://a.example" xmlns="http://b.example"></svg>"#
        );
    }

    #[test]
    fn childless_element_closes_explicitly_unless_self_closing() {
        assert_eq!(Element::new("g").render(0), "<g></g>");
        assert_eq!(Element::new("rect").self_closing().render(0), "<rect />");
    }

    #[test]
    fn children_are_indented_one_space_per_level() {
        let tree = Element::new("svg")
            .child(Element::new("g").child(Element::new("rect").self_closing()));
        assert_eq!(tree.render(0), "<svg>\n <g>\n  <rect />\n </g>\n\n</svg>\n");
    }

    #[test]
    fn rendering_is_idempotent() {
        let tree = Element::new("svg")
            .attr("id", "root")
            .child(Element::new("rect").attr("x", 0.0).self_closing());
        assert_eq!(tree.render(0), tree.render(0));
    }

    #[test]
    fn number_values_use_display_form() {
        let el = Element::new("rect").attr("x", 100.0 / 3.0).self_closing();
        assert_eq!(
            el.render(0),
            format!(r#"<rect x="{}" />"#, 100.0_f64 / 3.0)
        );
    }

    #[test]
    fn raw_text_single_line_renders_verbatim() {
        assert_eq!(RawText::new("  hello  ").render(3), "hello");
    }

    #[test]
    fn raw_text_multi_line_keeps_first_and_last_lines_only() {
        // Middle lines are dropped; the last line is re-indented. Kept
        // behavior, see DESIGN.md.
        assert_eq!(RawText::new("a\nb\nc").render(2), "a  c\n");
        assert_eq!(RawText::new("a\nb").render(1), "a b\n");
    }

    #[test]
    fn raw_text_empty_renders_empty() {
        assert_eq!(RawText::new("   ").render(0), "");
    }
}
