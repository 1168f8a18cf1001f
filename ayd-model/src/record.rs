use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};

/// One row of the yield dataset.
///
/// Column names follow the raw CSV headers, which mix naming styles
/// (`hg/ha_yield`, `average_rain_fall_mm_per_year`), hence the serde
/// renames. `(area, year, item)` is *not* unique in the source data;
/// aggregators must accumulate duplicate rows, never overwrite them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct YieldRecord {
    #[serde(rename = "Area")]
    pub area: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Item")]
    pub item: String,
    /// Crop yield in hectograms per hectare
    #[serde(rename = "hg/ha_yield")]
    pub yield_per_hectare: f64,
    /// Average annual rainfall in millimeters
    #[serde(rename = "average_rain_fall_mm_per_year")]
    pub rainfall_mm: f64,
    /// National pesticide use in tonnes
    #[serde(rename = "pesticides_tonnes")]
    pub pesticides_tonnes: f64,
    /// Average temperature in degrees Celsius
    #[serde(rename = "avg_temp")]
    pub avg_temp: f64,
}

/// The four per-country map metrics.
///
/// Each variant selects one numeric column of [`YieldRecord`]; the
/// choropleth renderer is driven by a declarative table over these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Yield,
    Rainfall,
    Pesticides,
    Temperature,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Yield,
        Metric::Rainfall,
        Metric::Pesticides,
        Metric::Temperature,
    ];

    /// The value of this metric's column for one record.
    pub fn value(&self, record: &YieldRecord) -> f64 {
        match self {
            Metric::Yield => record.yield_per_hectare,
            Metric::Rainfall => record.rainfall_mm,
            Metric::Pesticides => record.pesticides_tonnes,
            Metric::Temperature => record.avg_temp,
        }
    }

    /// The raw CSV column header backing this metric.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Yield => "hg/ha_yield",
            Metric::Rainfall => "average_rain_fall_mm_per_year",
            Metric::Pesticides => "pesticides_tonnes",
            Metric::Temperature => "avg_temp",
        }
    }

    /// Human-readable title for chart headers and tooltips.
    pub fn title(&self) -> &'static str {
        match self {
            Metric::Yield => "Yield per Hectare",
            Metric::Rainfall => "Rainfall (mm/year)",
            Metric::Pesticides => "Pesticides (tonnes)",
            Metric::Temperature => "Average Temperature",
        }
    }
}

/// Parse the yield CSV into typed records.
///
/// The published dataset carries an unnamed row-index column; header-based
/// deserialization ignores it along with any other column we do not name.
/// A row that fails to type is an input error, not a skippable condition:
/// the dashboard never renders over partial data.
pub fn records_from_csv(csv_data: &str) -> anyhow::Result<Vec<YieldRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(csv_data.as_bytes());
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        let record: YieldRecord = row?;
        records.push(record);
    }
    log::debug!("parsed {} yield records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Area,Year,Item,hg/ha_yield,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
Albania,1990,Maize,36613,1485,121,16.37
Albania,1990,Potatoes,66667,1485,121,16.37
Chad,1991,Sorghum,5432,322,55.5,26.55
";

    #[test]
    fn test_parse_records() {
        let records = records_from_csv(SAMPLE).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].area, "Albania");
        assert_eq!(records[0].year, 1990);
        assert_eq!(records[0].item, "Maize");
        assert_eq!(records[0].yield_per_hectare, 36613.0);
        assert_eq!(records[2].rainfall_mm, 322.0);
        assert_eq!(records[2].avg_temp, 26.55);
    }

    #[test]
    fn test_parse_rejects_bad_rows() {
        let bad = "\
Area,Year,Item,hg/ha_yield,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
Albania,not-a-year,Maize,36613,1485,121,16.37
";
        assert!(records_from_csv(bad).is_err());
    }

    #[test]
    fn test_metric_values() {
        let records = records_from_csv(SAMPLE).unwrap();
        let record = &records[2];
        assert_eq!(Metric::Yield.value(record), 5432.0);
        assert_eq!(Metric::Rainfall.value(record), 322.0);
        assert_eq!(Metric::Pesticides.value(record), 55.5);
        assert_eq!(Metric::Temperature.value(record), 26.55);
    }

    #[test]
    fn test_serializes_with_raw_column_names() {
        let records = records_from_csv(SAMPLE).unwrap();
        let json = serde_json::to_value(&records[0]).unwrap();
        assert_eq!(json["Area"], "Albania");
        assert_eq!(json["hg/ha_yield"], 36613.0);
        assert_eq!(json["avg_temp"], 16.37);
    }

    #[test]
    fn test_metric_columns_are_distinct() {
        let columns: std::collections::HashSet<_> =
            Metric::ALL.iter().map(|m| m.column()).collect();
        assert_eq!(columns.len(), 4);
    }
}
