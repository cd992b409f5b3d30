use svgbar::{BarChart, ChartData, Render, SeriesData};

fn sample() -> ChartData {
    ChartData::new([
        ("A".to_string(), SeriesData::Indexed(vec![1.0, 2.0, 3.0])),
        ("B".to_string(), SeriesData::Indexed(vec![4.0, 5.0, 6.0])),
    ])
}

#[test]
fn empty_chart_renders_title_and_border_exactly() {
    let chart = BarChart::bordered("c", 640.0, 480.0, "Title", ChartData::default());
    let svg = svgbar::render(&chart).unwrap();

    let expected = r#"<svg xmlns="http://www.w3.org/2000/svg" id="c-svg" width="640" height="480">
 <g id="c">
  <rect id="c-outline" style="stroke:grey; fill:white; stroke-width:2; stroke-opacity:1; fill-opacity:1" x="0" y="0" width="640" height="480" />
  <text x="0" y="12" id="c-title" style="stroke:black; fill:black; stroke-width:1; stroke-opacity:1; fill-opacity:1; font:sans-serif 12px">
Title
  </text>

 </g>

</svg>
"#;
    assert_eq!(svg, expected);
}

#[test]
fn rendering_the_same_chart_twice_is_byte_identical() {
    let chart = BarChart::bordered("c", 640.0, 480.0, "Title", sample());
    assert_eq!(svgbar::render(&chart).unwrap(), svgbar::render(&chart).unwrap());

    let tree = chart.build().unwrap();
    assert_eq!(tree.render(0), tree.render(0));
}

#[test]
fn bordered_chart_scopes_bars_to_the_inner_viewport() {
    let chart = BarChart::bordered("c", 640.0, 480.0, "Title", sample());
    let svg = svgbar::render(&chart).unwrap();

    assert!(svg.contains(
        r#"<svg id="c-bars" style="stroke:grey; fill:#E0E0E0; stroke-width:2; stroke-opacity:1; fill-opacity:1" x="5%" y="10%" width="90%" height="80%" viewBox="0 0 100 100">"#
    ));
    assert!(svg.contains(
        r#"<rect id="c-bars-outline" style="stroke:grey; fill:#E0E0E0; stroke-width:2; stroke-opacity:1; fill-opacity:1" x="0" y="0" width="100" height="100" />"#
    ));
    // first bar of series A: width 100/3, height 0.97 * 100 * 1 / 6
    assert!(svg.contains(
        r#"<rect id="c-A-0" style="stroke:black; fill:#641E16; stroke-width:1; stroke-opacity:1; fill-opacity:1" x="0.0000" y="83.8333" width="33.3333" height="16.1667" />"#
    ));
}

#[test]
fn guide_lines_pass_their_offsets_through_verbatim() {
    let chart = BarChart::bordered("c", 640.0, 480.0, "Title", sample());
    let svg = svgbar::render(&chart).unwrap();

    // the lowest guide sits at value 1 (minY), height 0.97 * 100 / 6
    let y = format!("{:.4}", 100.0 - 0.97 * 100.0 * 1.0 / 6.0);
    assert!(svg.contains(&format!(
        r#"<path d="m 0,{y} 100,{y}" id="c-y-1" style="stroke:grey; stroke-width:1; stroke-opacity:0.4; fill-opacity:1" />"#
    )));
}

#[test]
fn borderless_chart_keeps_bars_in_its_own_space() {
    let chart = BarChart::borderless("c", 640.0, 480.0, "Title", sample());
    let svg = svgbar::render(&chart).unwrap();

    assert!(!svg.contains("c-bars"));
    assert!(!svg.contains("viewBox"));
    // raw f64 values, unformatted
    let width = 100.0_f64 / 3.0;
    let height = 100.0_f64 * 4.0 / 6.0;
    assert!(svg.contains(&format!(
        r#"<rect id="c-B-0" style="stroke:black; fill:#78281F; stroke-width:1; stroke-opacity:1; fill-opacity:1" x="0" y="{}" width="{}" height="{}" />"#,
        100.0 - height,
        width,
        height
    )));
}

#[test]
fn json_collection_rejects_unsupported_series_shapes() {
    let value = serde_json::json!({ "A": [1, 2, 3], "B": "oops" });
    let err = ChartData::from_json(&value).unwrap_err();
    assert!(err.to_string().contains("unsupported shape"));
}

#[test]
fn json_collection_round_trips_into_a_chart() {
    let value = serde_json::json!({
        "A": [1, 2, 3],
        "B": { "10": 4, "20": 5, "30": 6 },
    });
    let data = ChartData::from_json(&value).unwrap();
    let chart = BarChart::borderless("c", 640.0, 480.0, "Title", data);
    let svg = svgbar::render(&chart).unwrap();
    for id in ["c-A-0", "c-A-1", "c-A-2", "c-B-0", "c-B-1", "c-B-2"] {
        assert!(svg.contains(&format!("id=\"{}\"", id)), "missing {}", id);
    }
}
