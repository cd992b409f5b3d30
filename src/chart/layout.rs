//! Bar layout: extent computation and shape generation for both chart
//! variants.
//!
//! Layout is a single pass with no state carried across renders. An empty
//! collection, a collection with no points, or a y-extent whose maximum
//! is exactly zero all yield zero generated shapes (the chart's title and
//! border still render); see DESIGN.md for the zero-extent policy.

use crate::errors::ChartError;
use crate::svg::Node;
use crate::svg::shapes::{line, rect, viewport};

use super::palette::Palette;
use super::skin::Skin;
use super::{ChartData, Extent};

fn fmt4(value: f64) -> String {
    format!("{:.4}", value)
}

/// Bars only, in the chart's own coordinate space; raw values pass
/// through unformatted.
pub(crate) fn borderless(
    id: &str,
    data: &ChartData,
    skin: &Skin,
) -> Result<Vec<Node>, ChartError> {
    let Some(extent) = data.extent() else {
        return Ok(Vec::new());
    };
    if extent.max_y == 0.0 {
        crate::log::debug!(chart = id, "y extent peaks at zero, skipping layout");
        return Ok(Vec::new());
    }

    let palette = Palette::new();
    let mut shapes = Vec::new();
    for (series_index, name) in data.order().iter().enumerate() {
        let series = data
            .series(name)
            .ok_or_else(|| ChartError::UnknownSeries { name: name.clone() })?;
        let points = series.points();
        if points.is_empty() {
            continue;
        }
        let bar_width = 100.0 / points.len() as f64;
        let style = skin
            .shape
            .with_fill(palette.series_color(series_index).to_string());
        for (index, (_, value)) in points.iter().enumerate() {
            let x = index as f64 * bar_width;
            let bar_height = 100.0 * value / extent.max_y;
            let y = 100.0 - bar_height;
            shapes.push(
                rect(
                    &format!("{}-{}-{}", id, name, index),
                    x,
                    y,
                    bar_width,
                    bar_height,
                    Some(&style),
                )
                .into(),
            );
        }
    }
    Ok(shapes)
}

/// Inner border, bars, and guide lines inside a nested viewport occupying
/// the inner 90%x80% of the chart. Geometry is formatted to 4 decimal
/// places.
pub(crate) fn bordered(
    id: &str,
    data: &ChartData,
    skin: &Skin,
) -> Result<Vec<Node>, ChartError> {
    let Some(extent) = data.extent() else {
        return Ok(Vec::new());
    };
    if extent.max_y == 0.0 {
        crate::log::debug!(chart = id, "y extent peaks at zero, skipping layout");
        return Ok(Vec::new());
    }
    crate::log::debug!(
        chart = id,
        min_y = extent.min_y,
        max_y = extent.max_y,
        "series extent"
    );

    let divisions = guide_values(&extent, skin.y_divisions);

    let palette = Palette::new();
    let mut inner: Vec<Node> = vec![
        rect(
            &format!("{}-bars-outline", id),
            0.0,
            0.0,
            "100",
            "100",
            Some(&skin.inner_border),
        )
        .into(),
    ];

    for (series_index, name) in data.order().iter().enumerate() {
        let series = data
            .series(name)
            .ok_or_else(|| ChartError::UnknownSeries { name: name.clone() })?;
        let points = series.points();
        if points.is_empty() {
            continue;
        }
        let bar_width = 100.0 / points.len() as f64;
        let style = skin
            .shape
            .with_fill(palette.series_color(series_index).to_string());
        for (index, (_, value)) in points.iter().enumerate() {
            let x = index as f64 * bar_width;
            let bar_height = skin.y_scale * 100.0 * value / extent.max_y;
            let y = 100.0 - bar_height;
            inner.push(
                rect(
                    &format!("{}-{}-{}", id, name, index),
                    fmt4(x),
                    fmt4(y),
                    fmt4(bar_width),
                    fmt4(bar_height),
                    Some(&style),
                )
                .into(),
            );
        }
    }

    for division in divisions {
        let height = skin.y_scale * 100.0 * division / extent.max_y;
        let y = fmt4(100.0 - height);
        inner.push(
            line(
                &format!("{}-y-{}", id, division),
                "0",
                &y,
                "100",
                &y,
                Some(&skin.divisions),
            )
            .into(),
        );
    }

    Ok(vec![
        viewport(
            &format!("{}-bars", id),
            Some(&skin.inner_border),
            "5%",
            "10%",
            "90%",
            "80%",
            "0 0 100 100",
            inner,
        )
        .into(),
    ])
}

/// Guide line values: `count` evenly spaced divisions from the smallest
/// value, plus zero when the value range straddles it, ascending.
fn guide_values(extent: &Extent, count: usize) -> Vec<f64> {
    let step = (extent.max_y - extent.min_y) / count as f64;
    let mut values: Vec<f64> = (0..count)
        .map(|k| extent.min_y + step * k as f64)
        .collect();
    if extent.min_y < 0.0 && 0.0 < extent.max_y {
        values.push(0.0);
    }
    values.sort_by(f64::total_cmp);
    values
}
