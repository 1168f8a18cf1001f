//! Pie chart of total yield by crop item.

use std::f64::consts::{PI, TAU};

use ayd_data::PieSlice;
use ayd_model::Selection;

use crate::color;
use crate::scale::OrdinalScale;
use crate::scene::{Scene, Shape, TextAnchor};

pub const PIE_WIDTH: f64 = 400.0;
pub const PIE_HEIGHT: f64 = 400.0;

/// A new scene with the pie's centered view box.
pub fn pie_scene() -> Scene {
    Scene::with_view_box(
        PIE_WIDTH,
        PIE_HEIGHT,
        (-PIE_WIDTH / 2.0, -PIE_HEIGHT / 2.0, PIE_WIDTH, PIE_HEIGHT),
    )
}

/// Normalize a mid-angle label rotation so text is never upside-down:
/// rotate by the mid-angle, then flip 180° while outside [-90°, 90°].
fn upright_rotation(mid_angle_rad: f64) -> f64 {
    let mut rotate = mid_angle_rad.to_degrees() - 90.0;
    while rotate > 90.0 {
        rotate -= 180.0;
    }
    while rotate < -90.0 {
        rotate += 180.0;
    }
    rotate
}

/// Angles measured clockwise from 12 o'clock, as screen coordinates.
fn on_circle(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.sin(), -radius * angle.cos())
}

fn sector_path(radius: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        // single-slice degenerate case: a full disc, drawn as two arcs
        let (x0, y0) = on_circle(radius, 0.0);
        let (x1, y1) = on_circle(radius, PI);
        return format!(
            "M{x0:.2},{y0:.2}A{radius:.2},{radius:.2} 0 1,1 {x1:.2},{y1:.2}A{radius:.2},{radius:.2} 0 1,1 {x0:.2},{y0:.2}Z"
        );
    }
    let (x0, y0) = on_circle(radius, start);
    let (x1, y1) = on_circle(radius, end);
    let large_arc = if sweep > PI { 1 } else { 0 };
    format!(
        "M0,0L{x0:.2},{y0:.2}A{radius:.2},{radius:.2} 0 {large_arc},1 {x1:.2},{y1:.2}Z"
    )
}

/// Draw the pie: sectors in slice order (no re-sorting), pastel fills,
/// upright labels, and a centered "country, year" caption. Zero slices
/// draws only the caption.
pub fn render_pie(scene: &mut Scene, slices: &[PieSlice], selection: &Selection) {
    scene.clear();

    let total: f64 = slices.iter().map(|s| s.value).sum();
    if total > 0.0 {
        let radius = PIE_WIDTH.min(PIE_HEIGHT) / 2.0 - 1.0;
        let label_radius = radius * 0.9;
        let palette = OrdinalScale::new(
            slices.iter().map(|s| s.name.clone()).collect(),
            &color::PASTEL1,
        );

        let mut angle = 0.0;
        for slice in slices {
            let sweep = slice.value / total * TAU;
            let end = angle + sweep;
            let fill = palette.color(&slice.name);
            scene.add_hoverable(
                Shape::Path {
                    d: sector_path(radius, angle, end),
                    fill: Some(fill.css()),
                    stroke: Some("white".to_string()),
                    stroke_width: 1.0,
                },
                format!("{}: {:.2}", slice.name, slice.value),
            );

            let mid = (angle + end) / 2.0;
            let (lx, ly) = on_circle(label_radius, mid);
            let raw_rotate = mid.to_degrees() - 90.0;
            scene.add(Shape::Text {
                x: lx,
                y: ly,
                content: slice.name.clone(),
                size: 13.0,
                anchor: if raw_rotate > 90.0 {
                    TextAnchor::Start
                } else {
                    TextAnchor::End
                },
                fill: fill.darker(4.0).css(),
                rotate: Some(upright_rotation(mid)),
                bold: false,
                halo: false,
            });
            angle = end;
        }
    }

    scene.add(Shape::Text {
        x: 0.0,
        y: 0.0,
        content: selection.caption(),
        size: 15.0,
        anchor: TextAnchor::Middle,
        fill: "black".to_string(),
        rotate: None,
        bold: false,
        halo: true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use ayd_model::{CountryFilter, YearFilter};

    fn slice(name: &str, value: f64) -> PieSlice {
        PieSlice {
            name: name.to_string(),
            value,
        }
    }

    fn chad_1990() -> Selection {
        Selection::new(YearFilter::Year(1990), CountryFilter::Country("Chad".into()))
    }

    #[test]
    fn test_empty_slices_draw_only_caption() {
        let mut scene = pie_scene();
        render_pie(&mut scene, &[], &chad_1990());
        assert_eq!(scene.elements().len(), 1);
        match &scene.elements()[0].shape {
            Shape::Text { content, .. } => assert_eq!(content, "Chad, 1990"),
            other => panic!("expected caption, got {other:?}"),
        }
    }

    #[test]
    fn test_one_sector_and_label_per_slice() {
        let mut scene = pie_scene();
        let slices = vec![slice("Maize", 150.0), slice("Sorghum", 50.0)];
        render_pie(&mut scene, &slices, &chad_1990());
        // 2 sectors + 2 labels + caption
        assert_eq!(scene.elements().len(), 5);
        assert_eq!(
            scene.elements()[0].hover.as_deref(),
            Some("Maize: 150.00")
        );
    }

    #[test]
    fn test_label_rotation_always_upright() {
        let mut scene = pie_scene();
        // slices spread around the full circle
        let slices: Vec<PieSlice> = (0..8).map(|i| slice(&format!("c{i}"), 1.0)).collect();
        render_pie(&mut scene, &slices, &chad_1990());
        for element in scene.elements() {
            if let Shape::Text {
                rotate: Some(angle),
                ..
            } = &element.shape
            {
                assert!(
                    (-90.0..=90.0).contains(angle),
                    "label rotated {angle} degrees"
                );
            }
        }
    }

    #[test]
    fn test_single_slice_is_full_disc() {
        let mut scene = pie_scene();
        render_pie(&mut scene, &[slice("Maize", 42.0)], &chad_1990());
        match &scene.elements()[0].shape {
            Shape::Path { d, .. } => {
                assert!(!d.contains("L"), "full disc must not have radius lines");
                assert_eq!(d.matches('A').count(), 2);
            }
            other => panic!("expected sector path, got {other:?}"),
        }
    }

    #[test]
    fn test_idempotent_redraw() {
        let mut scene = pie_scene();
        let slices = vec![slice("Maize", 1.0), slice("Wheat", 2.0)];
        render_pie(&mut scene, &slices, &chad_1990());
        let first = scene.clone();
        render_pie(&mut scene, &slices, &chad_1990());
        assert_eq!(scene, first);
    }
}
