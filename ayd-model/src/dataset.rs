use anyhow::Context;

use crate::boundary::WorldAtlas;
use crate::record::{records_from_csv, YieldRecord};

/// Both input datasets, loaded together.
///
/// Construction is a join, not a race: either source failing to parse
/// fails the whole load with one top-level error, and nothing downstream
/// ever sees partial data.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub records: Vec<YieldRecord>,
    pub atlas: WorldAtlas,
}

impl Dataset {
    pub fn load(csv_data: &str, geojson_data: &str) -> anyhow::Result<Self> {
        let records = records_from_csv(csv_data).context("failed to load yield dataset")?;
        anyhow::ensure!(!records.is_empty(), "yield dataset contains no rows");
        let atlas = WorldAtlas::from_geojson_str(geojson_data)
            .context("failed to load world boundary dataset")?;
        log::info!(
            "dataset loaded: {} records, {} boundary features",
            records.len(),
            atlas.features.len()
        );
        Ok(Dataset { records, atlas })
    }

    /// Distinct years, newest first. The selector collaborator prepends
    /// the "All Time" sentinel as its default choice.
    pub fn years_descending(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.year).collect();
        years.sort_unstable();
        years.dedup();
        years.reverse();
        years
    }

    /// Distinct countries in ascending order. The selector collaborator
    /// prepends the "Worldwide" sentinel as its default choice.
    pub fn countries_ascending(&self) -> Vec<String> {
        let mut countries: Vec<String> = self.records.iter().map(|r| r.area.clone()).collect();
        countries.sort();
        countries.dedup();
        countries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = include_str!("../fixtures/sample_yield.csv");
    const SAMPLE_WORLD: &str = include_str!("../fixtures/world_min.geojson");

    #[test]
    fn test_load_joins_both_sources() {
        let dataset = Dataset::load(SAMPLE_CSV, SAMPLE_WORLD).unwrap();
        assert!(!dataset.records.is_empty());
        assert!(!dataset.atlas.features.is_empty());
    }

    #[test]
    fn test_load_fails_if_either_source_fails() {
        assert!(Dataset::load("garbage", SAMPLE_WORLD).is_err());
        assert!(Dataset::load(SAMPLE_CSV, "garbage").is_err());
    }

    #[test]
    fn test_years_descending() {
        let dataset = Dataset::load(SAMPLE_CSV, SAMPLE_WORLD).unwrap();
        let years = dataset.years_descending();
        assert_eq!(years, vec![1992, 1991, 1990]);
    }

    #[test]
    fn test_countries_ascending() {
        let dataset = Dataset::load(SAMPLE_CSV, SAMPLE_WORLD).unwrap();
        let countries = dataset.countries_ascending();
        assert_eq!(countries, vec!["Albania", "Brazil", "Chad", "India"]);
    }
}
