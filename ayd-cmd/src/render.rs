use std::fs;
use std::path::Path;

use anyhow::Context;
use ayd_chart::render_dashboard;
use ayd_model::{CountryFilter, Dataset, Selection, YearFilter};

/// Load both datasets, render every panel and write one SVG per panel.
pub fn run_render(
    csv_path: &str,
    geojson_path: &str,
    out_dir: &str,
    year: &str,
    country: &str,
) -> anyhow::Result<()> {
    let dataset = load_dataset(csv_path, geojson_path)?;
    let selection = Selection::new(YearFilter::parse(year)?, CountryFilter::parse(country));

    let dashboard = render_dashboard(&dataset, &selection);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {out_dir}"))?;
    for panel in &dashboard.panels {
        let path = Path::new(out_dir).join(format!("{}.svg", panel.container));
        fs::write(&path, panel.scene.to_svg())
            .with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

pub(crate) fn load_dataset(csv_path: &str, geojson_path: &str) -> anyhow::Result<Dataset> {
    let csv_data =
        fs::read_to_string(csv_path).with_context(|| format!("failed to read {csv_path}"))?;
    let geojson_data = fs::read_to_string(geojson_path)
        .with_context(|| format!("failed to read {geojson_path}"))?;
    Dataset::load(&csv_data, &geojson_data)
}
