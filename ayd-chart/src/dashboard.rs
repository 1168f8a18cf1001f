//! Dashboard orchestration: one selection in, seven panels out.
//!
//! Mirrors the redraw path of the live dashboard: the filter engine
//! produces the three views a redraw needs, the aggregators build each
//! chart's view model, and every panel is recomputed from scratch. A new
//! selection fully supersedes the previous render.

use ayd_data::{filter_by_country, filter_by_year, heatmap_data, line_points, metric_by_country,
    pie_slices};
use ayd_model::{Dataset, Selection};

use crate::projection::Mercator;
use crate::render::heatmap::{HEATMAP_HEIGHT, HEATMAP_WIDTH};
use crate::render::line::{LINE_HEIGHT, LINE_WIDTH};
use crate::render::pie::pie_scene;
use crate::render::{render_choropleth, render_heatmap, render_line, render_pie, MAP_SPECS};
use crate::scene::Scene;

/// Side length of each per-metric map canvas.
pub const MAP_SIZE: f64 = 250.0;

pub const PIE_CONTAINER: &str = "pie-chart";
pub const LINE_CONTAINER: &str = "line-chart";
pub const HEATMAP_CONTAINER: &str = "heatmap";

/// One named mount point and its rendered content.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub container: &'static str,
    pub scene: Scene,
}

/// All rendered panels for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub panels: Vec<Panel>,
}

impl Dashboard {
    pub fn scene(&self, container: &str) -> Option<&Scene> {
        self.panels
            .iter()
            .find(|p| p.container == container)
            .map(|p| &p.scene)
    }
}

/// Recompute and redraw every panel for the given selection.
pub fn render_dashboard(dataset: &Dataset, selection: &Selection) -> Dashboard {
    log::debug!(
        "redrawing dashboard for year={} country={}",
        selection.year,
        selection.country
    );
    let by_year = filter_by_year(&dataset.records, &selection.year);
    let by_year_and_country = filter_by_country(&by_year, &selection.country);
    let by_country = filter_by_country(&dataset.records, &selection.country);

    let mut panels = Vec::with_capacity(MAP_SPECS.len() + 3);

    // the four metric maps share one projection for visual alignment
    let projection = Mercator::fitted(MAP_SIZE);
    for spec in &MAP_SPECS {
        let values = metric_by_country(&by_year, spec.metric);
        let mut scene = Scene::new(MAP_SIZE, MAP_SIZE);
        render_choropleth(&mut scene, &dataset.atlas, &values, &projection, spec.interpolator);
        panels.push(Panel {
            container: spec.container,
            scene,
        });
    }

    let mut pie = pie_scene();
    render_pie(&mut pie, &pie_slices(&by_year_and_country), selection);
    panels.push(Panel {
        container: PIE_CONTAINER,
        scene: pie,
    });

    let mut line = Scene::new(LINE_WIDTH, LINE_HEIGHT);
    render_line(&mut line, &line_points(&by_country), selection);
    panels.push(Panel {
        container: LINE_CONTAINER,
        scene: line,
    });

    let mut heatmap = Scene::new(HEATMAP_WIDTH, HEATMAP_HEIGHT);
    render_heatmap(&mut heatmap, &heatmap_data(&by_year), selection);
    panels.push(Panel {
        container: HEATMAP_CONTAINER,
        scene: heatmap,
    });

    Dashboard { panels }
}
