//! Line chart: yield over time for the top countries.

use std::fmt::Write;

use ayd_data::LinePoint;
use ayd_model::{CountryFilter, Selection};

use crate::color;
use crate::scale::{LinearScale, OrdinalScale};
use crate::scene::{Scene, Shape, TextAnchor};

pub const LINE_WIDTH: f64 = 800.0;
pub const LINE_HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_RIGHT: f64 = 100.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 90.0;

/// Group points by country in encounter order.
fn series_of(points: &[LinePoint]) -> Vec<(String, Vec<&LinePoint>)> {
    let mut series: Vec<(String, Vec<&LinePoint>)> = Vec::new();
    for point in points {
        match series.iter_mut().find(|(name, _)| *name == point.name) {
            Some((_, list)) => list.push(point),
            None => series.push((point.name.clone(), vec![point])),
        }
    }
    series
}

/// Draw the time-series chart. An empty view model still renders the
/// title and nothing else; a single point draws its label without any
/// zero-range division.
pub fn render_line(scene: &mut Scene, points: &[LinePoint], selection: &Selection) {
    scene.clear();

    let title_prefix = match selection.country {
        CountryFilter::Worldwide => "Top 10 ",
        CountryFilter::Country(_) => "",
    };
    scene.add(Shape::Text {
        x: LINE_WIDTH / 2.0,
        y: 40.0,
        content: format!("{title_prefix}Yield Per Hectare Over Time"),
        size: 16.0,
        anchor: TextAnchor::Middle,
        fill: "#000".to_string(),
        rotate: None,
        bold: true,
        halo: false,
    });

    let Some((year_min, year_max)) = ayd_data::extent(points.iter().map(|p| p.year as f64))
    else {
        return;
    };
    let value_max = points.iter().map(|p| p.value).fold(0.0, f64::max);

    let x = LinearScale::new(
        (year_min, year_max),
        (MARGIN_LEFT, LINE_WIDTH - MARGIN_RIGHT),
    );
    let y = LinearScale::new((0.0, value_max), (LINE_HEIGHT - MARGIN_BOTTOM, MARGIN_TOP));

    draw_axes(scene, &x, &y);

    let series = series_of(points);
    let palette = OrdinalScale::new(
        series.iter().map(|(name, _)| name.clone()).collect(),
        &color::CATEGORY10,
    );
    for (name, list) in &series {
        let stroke = palette.color(name);
        let mut d = String::new();
        for (i, point) in list.iter().enumerate() {
            let command = if i == 0 { 'M' } else { 'L' };
            let _ = write!(
                d,
                "{command}{:.2},{:.2}",
                x.scale(point.year as f64),
                y.scale(point.value)
            );
        }
        scene.add(Shape::Path {
            d,
            fill: None,
            stroke: Some(stroke.css()),
            stroke_width: 1.5,
        });

        // terminal label identifies the series
        if let Some(last) = list.last() {
            scene.add(Shape::Text {
                x: x.scale(last.year as f64) + 4.0,
                y: y.scale(last.value),
                content: name.clone(),
                size: 10.0,
                anchor: TextAnchor::Start,
                fill: stroke.css(),
                rotate: None,
                bold: true,
                halo: true,
            });
        }
    }
}

fn draw_axes(scene: &mut Scene, x: &LinearScale, y: &LinearScale) {
    let baseline = LINE_HEIGHT - MARGIN_BOTTOM;

    scene.add(Shape::Path {
        d: format!(
            "M{MARGIN_LEFT:.2},{baseline:.2}L{:.2},{baseline:.2}",
            LINE_WIDTH - MARGIN_RIGHT
        ),
        fill: None,
        stroke: Some("#000".to_string()),
        stroke_width: 1.0,
    });
    for tick in x.ticks((LINE_WIDTH / 80.0) as usize) {
        let tx = x.scale(tick);
        scene.add(Shape::Path {
            d: format!("M{tx:.2},{baseline:.2}L{tx:.2},{:.2}", baseline + 6.0),
            fill: None,
            stroke: Some("#000".to_string()),
            stroke_width: 1.0,
        });
        scene.add(Shape::Text {
            x: tx,
            y: baseline + 16.0,
            // plain integer years, no thousands separators
            content: format!("{}", tick as i64),
            size: 10.0,
            anchor: TextAnchor::Middle,
            fill: "#000".to_string(),
            rotate: None,
            bold: false,
            halo: false,
        });
    }
    scene.add(Shape::Text {
        x: (LINE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0 + MARGIN_LEFT,
        y: LINE_HEIGHT - 5.0,
        content: "Year".to_string(),
        size: 12.0,
        anchor: TextAnchor::Middle,
        fill: "currentColor".to_string(),
        rotate: None,
        bold: false,
        halo: false,
    });

    for tick in y.ticks((LINE_HEIGHT / 40.0) as usize) {
        let ty = y.scale(tick);
        // faint gridline across the plot area
        scene.add(Shape::Path {
            d: format!(
                "M{MARGIN_LEFT:.2},{ty:.2}L{:.2},{ty:.2}",
                LINE_WIDTH - MARGIN_RIGHT
            ),
            fill: None,
            stroke: Some("#ddd".to_string()),
            stroke_width: 1.0,
        });
        scene.add(Shape::Text {
            x: MARGIN_LEFT - 8.0,
            y: ty + 3.0,
            content: format!("{tick}"),
            size: 10.0,
            anchor: TextAnchor::End,
            fill: "#000".to_string(),
            rotate: None,
            bold: false,
            halo: false,
        });
    }
    scene.add(Shape::Text {
        x: MARGIN_LEFT - 70.0,
        y: LINE_HEIGHT / 2.0,
        content: "Yield Per Hectare".to_string(),
        size: 12.0,
        anchor: TextAnchor::Middle,
        fill: "currentColor".to_string(),
        rotate: Some(-90.0),
        bold: false,
        halo: false,
    });
}
