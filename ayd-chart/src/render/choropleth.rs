//! The generic choropleth routine and the per-metric map table.

use std::collections::HashMap;

use ayd_model::{Metric, WorldAtlas};

use crate::color::{self, Rgb};
use crate::projection::Mercator;
use crate::scale::SequentialScale;
use crate::scene::{Scene, Shape};

/// One map panel: which metric it shows, how values become colors, and
/// which container it owns.
#[derive(Debug, Clone, Copy)]
pub struct MapSpec {
    pub metric: Metric,
    pub interpolator: fn(f64) -> Rgb,
    pub container: &'static str,
}

/// The four metric maps. A single table drives one generic renderer
/// instead of four near-duplicate call sites.
pub const MAP_SPECS: [MapSpec; 4] = [
    MapSpec {
        metric: Metric::Yield,
        interpolator: color::purples,
        container: "yield_map",
    },
    MapSpec {
        metric: Metric::Rainfall,
        interpolator: color::blues,
        container: "rainfall_map",
    },
    MapSpec {
        metric: Metric::Pesticides,
        interpolator: color::greens,
        container: "pesticides_map",
    },
    MapSpec {
        metric: Metric::Temperature,
        interpolator: color::reds,
        container: "temp_map",
    },
];

/// Fill every boundary feature by its metric value.
///
/// Countries missing from `values` get the fixed neutral fill -- an
/// inexact name join degrades visually, it never fails.
pub fn render_choropleth(
    scene: &mut Scene,
    atlas: &WorldAtlas,
    values: &HashMap<String, f64>,
    projection: &Mercator,
    interpolator: fn(f64) -> Rgb,
) {
    scene.clear();
    let scale = ayd_data::extent(values.values().copied())
        .map(|domain| SequentialScale::new(domain, interpolator));

    for feature in &atlas.features {
        let value = values.get(&feature.name);
        let fill = match (value, &scale) {
            (Some(v), Some(scale)) => scale.color(*v),
            _ => Rgb::NEUTRAL,
        };
        let shape = Shape::Path {
            d: projection.path(&feature.rings),
            fill: Some(fill.css()),
            stroke: Some("#333".to_string()),
            stroke_width: 0.5,
        };
        match value {
            Some(v) => scene.add_hoverable(shape, format!("{}: {:.2}", feature.name, v)),
            None => scene.add(shape),
        }
    }
}
