//! Country×crop heatmap of mean yield.

use ayd_data::HeatmapData;
use ayd_model::{CountryFilter, Selection};

use crate::color;
use crate::scale::{BandScale, SequentialScale};
use crate::scene::{Scene, Shape, TextAnchor};

pub const HEATMAP_WIDTH: f64 = 1100.0;
pub const HEATMAP_HEIGHT: f64 = 400.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 140.0;
const MARGIN_LEFT: f64 = 130.0;
const BAND_PADDING: f64 = 0.01;

/// Draw the heatmap grid.
///
/// Cells of the selected country use the highlight ramp over the same
/// color domain, plus a black outline. Both ramps share the raw-value
/// domain computed by the aggregator, not the domain of the cell means.
pub fn render_heatmap(scene: &mut Scene, data: &HeatmapData, selection: &Selection) {
    scene.clear();

    scene.add(Shape::Text {
        x: MARGIN_LEFT + (HEATMAP_WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / 2.0,
        y: MARGIN_TOP - 25.0,
        content: format!("Yield per Hectare in Each Country in {}", selection.year),
        size: 16.0,
        anchor: TextAnchor::Middle,
        fill: "#000".to_string(),
        rotate: None,
        bold: true,
        halo: false,
    });

    let Some(domain) = data.color_domain else {
        return;
    };
    let normal = SequentialScale::new(domain, color::yl_gn_bu);
    let highlight = SequentialScale::new(domain, color::rd_pu);

    let x = BandScale::new(
        data.areas.clone(),
        (MARGIN_LEFT, HEATMAP_WIDTH - MARGIN_RIGHT),
        BAND_PADDING,
    );
    let y = BandScale::new(
        data.items.clone(),
        (MARGIN_TOP, HEATMAP_HEIGHT - MARGIN_BOTTOM),
        BAND_PADDING,
    );

    draw_axis_labels(scene, &x, &y);

    let selected = match &selection.country {
        CountryFilter::Country(c) => Some(c.as_str()),
        CountryFilter::Worldwide => None,
    };
    for cell in &data.cells {
        let (Some(cx), Some(cy)) = (x.position(&cell.area), y.position(&cell.item)) else {
            continue;
        };
        let highlighted = selected == Some(cell.area.as_str());
        let fill = if highlighted {
            highlight.color(cell.mean_yield)
        } else {
            normal.color(cell.mean_yield)
        };
        scene.add_hoverable(
            Shape::Rect {
                x: cx,
                y: cy,
                width: x.bandwidth(),
                height: y.bandwidth(),
                fill: fill.css(),
                stroke: highlighted.then(|| "#000".to_string()),
            },
            format!(
                "Area: {}\nItem: {}\nYield: {:.2}",
                cell.area, cell.item, cell.mean_yield
            ),
        );
    }
}

fn draw_axis_labels(scene: &mut Scene, x: &BandScale, y: &BandScale) {
    let baseline = HEATMAP_HEIGHT - MARGIN_BOTTOM;
    for area in x.domain() {
        let Some(cx) = x.position(area) else { continue };
        scene.add(Shape::Text {
            x: cx + x.bandwidth() / 2.0,
            y: baseline + 10.0,
            content: area.clone(),
            size: 10.0,
            anchor: TextAnchor::End,
            fill: "#000".to_string(),
            rotate: Some(-90.0),
            bold: false,
            halo: false,
        });
    }
    for item in y.domain() {
        let Some(cy) = y.position(item) else { continue };
        scene.add(Shape::Text {
            x: MARGIN_LEFT - 6.0,
            y: cy + y.bandwidth() / 2.0 + 3.0,
            content: item.clone(),
            size: 10.0,
            anchor: TextAnchor::End,
            fill: "#000".to_string(),
            rotate: None,
            bold: false,
            halo: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayd_data::HeatCell;
    use ayd_model::YearFilter;

    fn data() -> HeatmapData {
        HeatmapData {
            cells: vec![
                HeatCell {
                    area: "Chad".into(),
                    item: "Maize".into(),
                    mean_yield: 15.0,
                },
                HeatCell {
                    area: "Brazil".into(),
                    item: "Maize".into(),
                    mean_yield: 7.0,
                },
            ],
            color_domain: Some((7.0, 20.0)),
            areas: vec!["Brazil".into(), "Chad".into()],
            items: vec!["Maize".into()],
        }
    }

    fn cells_of(scene: &Scene) -> Vec<&crate::scene::Element> {
        scene
            .elements()
            .iter()
            .filter(|e| matches!(e.shape, Shape::Rect { .. }))
            .collect()
    }

    #[test]
    fn test_one_rect_per_cell_with_tooltip() {
        let mut scene = Scene::new(HEATMAP_WIDTH, HEATMAP_HEIGHT);
        render_heatmap(&mut scene, &data(), &Selection::default());
        let cells = cells_of(&scene);
        assert_eq!(cells.len(), 2);
        assert_eq!(
            cells[0].hover.as_deref(),
            Some("Area: Chad\nItem: Maize\nYield: 15.00")
        );
    }

    #[test]
    fn test_selected_country_uses_highlight_ramp() {
        let mut scene = Scene::new(HEATMAP_WIDTH, HEATMAP_HEIGHT);
        let selection = Selection::new(
            YearFilter::AllTime,
            CountryFilter::Country("Chad".into()),
        );
        render_heatmap(&mut scene, &data(), &selection);

        let expected_highlight = SequentialScale::new((7.0, 20.0), color::rd_pu).color(15.0);
        let expected_normal = SequentialScale::new((7.0, 20.0), color::yl_gn_bu).color(7.0);
        let cells = cells_of(&scene);
        match (&cells[0].shape, &cells[1].shape) {
            (
                Shape::Rect {
                    fill: chad_fill,
                    stroke: chad_stroke,
                    ..
                },
                Shape::Rect {
                    fill: brazil_fill,
                    stroke: brazil_stroke,
                    ..
                },
            ) => {
                assert_eq!(*chad_fill, expected_highlight.css());
                assert_eq!(chad_stroke.as_deref(), Some("#000"));
                assert_eq!(*brazil_fill, expected_normal.css());
                assert_eq!(*brazil_stroke, None);
            }
            other => panic!("expected two rects, got {other:?}"),
        }
    }

    #[test]
    fn test_title_names_the_active_year() {
        let mut scene = Scene::new(HEATMAP_WIDTH, HEATMAP_HEIGHT);
        let selection = Selection::new(YearFilter::Year(1992), CountryFilter::Worldwide);
        render_heatmap(&mut scene, &data(), &selection);
        let has_title = scene.elements().iter().any(|e| match &e.shape {
            Shape::Text { content, .. } => {
                content == "Yield per Hectare in Each Country in 1992"
            }
            _ => false,
        });
        assert!(has_title);
    }

    #[test]
    fn test_empty_data_renders_title_only() {
        let mut scene = Scene::new(HEATMAP_WIDTH, HEATMAP_HEIGHT);
        render_heatmap(&mut scene, &HeatmapData::default(), &Selection::default());
        assert_eq!(scene.elements().len(), 1);
    }

    #[test]
    fn test_idempotent_redraw() {
        let mut scene = Scene::new(HEATMAP_WIDTH, HEATMAP_HEIGHT);
        render_heatmap(&mut scene, &data(), &Selection::default());
        let first = scene.clone();
        render_heatmap(&mut scene, &data(), &Selection::default());
        assert_eq!(scene, first);
    }
}
