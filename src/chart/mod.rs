//! Bar charts over named numeric series.
//!
//! A chart is built from a [`ChartData`] collection and assembled in a
//! single constructor-time operation: [`BarChart::build`] returns an
//! immutable `<g>` tree holding the border rectangle, the title, and
//! every generated shape.

use std::collections::BTreeMap;

use crate::errors::ChartError;
use crate::svg::shapes::{rect, text};
use crate::svg::{AttrValue, Element, Node};

mod layout;
pub mod palette;
mod skin;

pub use palette::Palette;
pub use skin::Skin;

/// Observed bounds across every series of a collection: positions on the
/// x axis, values on the y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Extent {
    fn fold(acc: Option<Extent>, (x, y): (f64, f64)) -> Option<Extent> {
        Some(match acc {
            None => Extent {
                min_x: x,
                max_x: x,
                min_y: y,
                max_y: y,
            },
            Some(e) => Extent {
                min_x: e.min_x.min(x),
                max_x: e.max_x.max(x),
                min_y: e.min_y.min(y),
                max_y: e.max_y.max(y),
            },
        })
    }
}

/// One named series of numeric values.
///
/// `Indexed` plots values at implicit positions `0..n-1`; `Keyed` plots
/// them at explicit integer positions, laid out in ascending key order.
/// Positions are never reconciled across series; each series spans the
/// full chart width on its own.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesData {
    Indexed(Vec<f64>),
    Keyed(BTreeMap<i64, f64>),
}

impl SeriesData {
    pub fn len(&self) -> usize {
        match self {
            SeriesData::Indexed(values) => values.len(),
            SeriesData::Keyed(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(position, value)` pairs in layout order.
    pub(crate) fn points(&self) -> Vec<(f64, f64)> {
        match self {
            SeriesData::Indexed(values) => values
                .iter()
                .enumerate()
                .map(|(index, value)| (index as f64, *value))
                .collect(),
            SeriesData::Keyed(points) => points
                .iter()
                .map(|(position, value)| (*position as f64, *value))
                .collect(),
        }
    }

    /// Interpret a dynamic JSON value as series data.
    ///
    /// An array of numbers becomes `Indexed`; an object with integer
    /// string keys becomes `Keyed`. Anything else is a fatal
    /// configuration error; nothing is coerced.
    pub fn from_json(
        name: &str,
        value: &serde_json::Value,
    ) -> Result<SeriesData, ChartError> {
        match value {
            serde_json::Value::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for item in items {
                    let number = item.as_f64().ok_or_else(|| ChartError::NonNumericValue {
                        series: name.to_string(),
                    })?;
                    values.push(number);
                }
                Ok(SeriesData::Indexed(values))
            }
            serde_json::Value::Object(entries) => {
                let mut points = BTreeMap::new();
                for (key, item) in entries {
                    let position: i64 =
                        key.parse().map_err(|_| ChartError::InvalidPosition {
                            series: name.to_string(),
                            key: key.clone(),
                        })?;
                    let number = item.as_f64().ok_or_else(|| ChartError::NonNumericValue {
                        series: name.to_string(),
                    })?;
                    points.insert(position, number);
                }
                Ok(SeriesData::Keyed(points))
            }
            other => Err(ChartError::UnsupportedSeries {
                series: name.to_string(),
                found: json_type(other),
            }),
        }
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// A collection of named series plus the resolved series order.
///
/// The order decides both color assignment and left-to-right rendering:
/// explicitly supplied names come first, then any remaining series in
/// first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    entries: Vec<(String, SeriesData)>,
    order: Vec<String>,
}

impl ChartData {
    /// Collection with the series order taken from encounter order.
    pub fn new(series: impl IntoIterator<Item = (String, SeriesData)>) -> ChartData {
        ChartData::with_order(Vec::new(), series)
    }

    /// Collection with an explicit series order; series not named in
    /// `order` are appended in encounter order.
    pub fn with_order(
        order: Vec<String>,
        series: impl IntoIterator<Item = (String, SeriesData)>,
    ) -> ChartData {
        let entries: Vec<(String, SeriesData)> = series.into_iter().collect();
        let mut order = order;
        for (name, _) in &entries {
            if !order.contains(name) {
                order.push(name.clone());
            }
        }
        ChartData { entries, order }
    }

    /// Build a collection from a JSON object of `name -> series`.
    ///
    /// Note that JSON objects iterate in key order here, so the default
    /// series order is alphabetical; supply an explicit order for
    /// anything else.
    pub fn from_json(value: &serde_json::Value) -> Result<ChartData, ChartError> {
        let serde_json::Value::Object(map) = value else {
            return Err(ChartError::UnsupportedSeries {
                series: "<collection>".to_string(),
                found: json_type(value),
            });
        };
        let mut entries = Vec::with_capacity(map.len());
        for (name, series) in map {
            entries.push((name.clone(), SeriesData::from_json(name, series)?));
        }
        Ok(ChartData::new(entries))
    }

    pub fn order(&self) -> &[String] {
        &self.order
    }

    pub fn series(&self, name: &str) -> Option<&SeriesData> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, series)| series)
    }

    /// Scan every point of every series. `None` when there are none.
    pub fn extent(&self) -> Option<Extent> {
        let mut acc = None;
        for (_, series) in &self.entries {
            for point in series.points() {
                acc = Extent::fold(acc, point);
            }
        }
        acc
    }
}

/// Which bar layout a chart uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarLayout {
    /// Inner border, guide lines, bars inside a nested viewport.
    #[default]
    Bordered,
    /// Bars only, directly in the chart's coordinate space.
    Borderless,
}

/// A bar chart. Build one with [`BarChart::bordered`] or
/// [`BarChart::borderless`], then call [`BarChart::build`] for the
/// renderable tree.
#[derive(Debug, Clone)]
pub struct BarChart {
    id: String,
    width: AttrValue,
    height: AttrValue,
    title: String,
    data: ChartData,
    skin: Skin,
    layout: BarLayout,
}

impl BarChart {
    pub fn bordered(
        id: impl Into<String>,
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
        title: impl Into<String>,
        data: ChartData,
    ) -> BarChart {
        BarChart::with_layout(BarLayout::Bordered, id, width, height, title, data)
    }

    pub fn borderless(
        id: impl Into<String>,
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
        title: impl Into<String>,
        data: ChartData,
    ) -> BarChart {
        BarChart::with_layout(BarLayout::Borderless, id, width, height, title, data)
    }

    pub fn with_layout(
        layout: BarLayout,
        id: impl Into<String>,
        width: impl Into<AttrValue>,
        height: impl Into<AttrValue>,
        title: impl Into<String>,
        data: ChartData,
    ) -> BarChart {
        BarChart {
            id: id.into(),
            width: width.into(),
            height: height.into(),
            title: title.into(),
            data,
            skin: Skin::default(),
            layout,
        }
    }

    /// Replace the default skin.
    pub fn with_skin(mut self, skin: Skin) -> BarChart {
        self.skin = skin;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn width(&self) -> &AttrValue {
        &self.width
    }

    pub fn height(&self) -> &AttrValue {
        &self.height
    }

    /// Assemble the chart tree: a `<g>` holding the border rectangle,
    /// the title text, and every generated shape. The returned tree is
    /// immutable; rebuilding yields an identical tree.
    pub fn build(&self) -> Result<Element, ChartError> {
        let shapes = match self.layout {
            BarLayout::Bordered => layout::bordered(&self.id, &self.data, &self.skin)?,
            BarLayout::Borderless => layout::borderless(&self.id, &self.data, &self.skin)?,
        };

        let mut children: Vec<Node> = vec![
            rect(
                &format!("{}-outline", self.id),
                0.0,
                0.0,
                self.width.clone(),
                self.height.clone(),
                Some(&self.skin.outer_border),
            )
            .into(),
            text(
                &format!("{}-title", self.id),
                0.0,
                12.0,
                &self.title,
                Some(&self.skin.title),
            )
            .into(),
        ];
        children.extend(shapes);

        Ok(Element::new("g")
            .attr("id", self.id.as_str())
            .attr_opt("style", None)
            .children(children))
    }
}
