//! Aggregators: one pure transform per chart view model.
//!
//! Grouping preserves first-seen order throughout, and duplicate
//! `(area, year, item)` rows always accumulate -- summed for the pie and
//! line charts, averaged for the heatmap. The map aggregator is the one
//! deliberate exception: it keeps the last row per country.

use std::collections::HashMap;

use ayd_model::{Metric, YieldRecord};
use serde::Serialize;

use crate::extent;

/// How many countries the line chart keeps, ranked by all-time yield.
pub const LINE_SERIES_LIMIT: usize = 10;

/// One pie sector: total yield for one crop item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

/// One point of one country's yield time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub name: String,
    pub year: i32,
    pub value: f64,
}

/// One heatmap cell: mean yield for a country×crop pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatCell {
    pub area: String,
    pub item: String,
    pub mean_yield: f64,
}

/// The heatmap view model: cells plus axis domains and color domain.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct HeatmapData {
    pub cells: Vec<HeatCell>,
    /// Color domain over the *raw* per-row yields of the input, not the
    /// cell means.
    pub color_domain: Option<(f64, f64)>,
    /// Distinct countries, ascending (x axis).
    pub areas: Vec<String>,
    /// Distinct crop items, ascending (y axis).
    pub items: Vec<String>,
}

/// Sum yield per crop item, first-seen item order.
///
/// Conservation holds: the slice values sum to the input's total yield.
pub fn pie_slices(records: &[YieldRecord]) -> Vec<PieSlice> {
    let mut slices: Vec<PieSlice> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match index.get(record.item.as_str()) {
            Some(&i) => slices[i].value += record.yield_per_hectare,
            None => {
                index.insert(record.item.as_str(), slices.len());
                slices.push(PieSlice {
                    name: record.item.clone(),
                    value: record.yield_per_hectare,
                });
            }
        }
    }
    slices
}

/// Per-(country, year) yield sums for the top countries by total yield.
///
/// Ranking sums yield per country over the whole input; ties keep first
/// encounter order (stable sort). Points come out in encounter order, so
/// regrouping by name reconstructs each series in input year order.
pub fn line_points(records: &[YieldRecord]) -> Vec<LinePoint> {
    let mut totals: Vec<(&str, f64)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match index.get(record.area.as_str()) {
            Some(&i) => totals[i].1 += record.yield_per_hectare,
            None => {
                index.insert(record.area.as_str(), totals.len());
                totals.push((record.area.as_str(), record.yield_per_hectare));
            }
        }
    }
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let top: std::collections::HashSet<&str> = totals
        .iter()
        .take(LINE_SERIES_LIMIT)
        .map(|(name, _)| *name)
        .collect();

    let mut points: Vec<LinePoint> = Vec::new();
    let mut seen: HashMap<(&str, i32), usize> = HashMap::new();
    for record in records {
        if !top.contains(record.area.as_str()) {
            continue;
        }
        match seen.get(&(record.area.as_str(), record.year)) {
            Some(&i) => points[i].value += record.yield_per_hectare,
            None => {
                seen.insert((record.area.as_str(), record.year), points.len());
                points.push(LinePoint {
                    name: record.area.clone(),
                    year: record.year,
                    value: record.yield_per_hectare,
                });
            }
        }
    }
    points
}

/// Mean yield per (country, crop) pair, plus the axis and color domains.
pub fn heatmap_data(records: &[YieldRecord]) -> HeatmapData {
    struct Acc {
        sum: f64,
        count: usize,
    }

    let mut keys: Vec<(String, String)> = Vec::new();
    let mut groups: HashMap<(&str, &str), Acc> = HashMap::new();
    for record in records {
        let key = (record.area.as_str(), record.item.as_str());
        match groups.get_mut(&key) {
            Some(acc) => {
                acc.sum += record.yield_per_hectare;
                acc.count += 1;
            }
            None => {
                keys.push((record.area.clone(), record.item.clone()));
                groups.insert(
                    key,
                    Acc {
                        sum: record.yield_per_hectare,
                        count: 1,
                    },
                );
            }
        }
    }

    let cells: Vec<HeatCell> = keys
        .into_iter()
        .map(|(area, item)| {
            let acc = &groups[&(area.as_str(), item.as_str())];
            HeatCell {
                mean_yield: acc.sum / acc.count as f64,
                area,
                item,
            }
        })
        .collect();

    let mut areas: Vec<String> = cells.iter().map(|c| c.area.clone()).collect();
    areas.sort();
    areas.dedup();
    let mut items: Vec<String> = cells.iter().map(|c| c.item.clone()).collect();
    items.sort();
    items.dedup();

    HeatmapData {
        color_domain: extent(records.iter().map(|r| r.yield_per_hectare)),
        cells,
        areas,
        items,
    }
}

/// Country → metric value for one choropleth map.
///
/// Last row wins when a country has several rows under the active year
/// filter; no aggregation happens here. See DESIGN.md.
pub fn metric_by_country(records: &[YieldRecord], metric: Metric) -> HashMap<String, f64> {
    let mut values = HashMap::new();
    for record in records {
        values.insert(record.area.clone(), metric.value(record));
    }
    values
}
