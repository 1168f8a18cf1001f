use ayd_model::{ALL_TIME, WORLDWIDE};

use crate::render::load_dataset;

/// Print the selector domains: years newest-first after the "All Time"
/// default, countries ascending after the "Worldwide" default.
pub fn run_list(csv_path: &str, geojson_path: &str) -> anyhow::Result<()> {
    let dataset = load_dataset(csv_path, geojson_path)?;

    println!("Years:");
    println!("  {ALL_TIME}");
    for year in dataset.years_descending() {
        println!("  {year}");
    }

    println!("Countries:");
    println!("  {WORLDWIDE}");
    for country in dataset.countries_ascending() {
        println!("  {country}");
    }
    Ok(())
}
