//! Data transforms for the yield dashboard.
//!
//! This crate turns raw [`ayd_model::YieldRecord`] rows into the per-chart
//! view models: pure functions, no I/O, no mutation of inputs. The filter
//! engine narrows the record set by the active selection; the aggregators
//! reshape the narrowed sets into what each renderer consumes directly.

pub mod aggregate;
pub mod filter;

pub use aggregate::{
    heatmap_data, line_points, metric_by_country, pie_slices, HeatCell, HeatmapData, LinePoint,
    PieSlice, LINE_SERIES_LIMIT,
};
pub use filter::{filter_by_country, filter_by_year, year_and_country_view};

/// Min/max of a value stream, skipping NaN. `None` when nothing remains.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut result: Option<(f64, f64)> = None;
    for v in values {
        if v.is_nan() {
            continue;
        }
        result = Some(match result {
            None => (v, v),
            Some((lo, hi)) => (lo.min(v), hi.max(v)),
        });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_basic() {
        assert_eq!(extent([3.0, -1.0, 7.0]), Some((-1.0, 7.0)));
    }

    #[test]
    fn test_extent_skips_nan() {
        assert_eq!(extent([f64::NAN, 2.0, f64::NAN]), Some((2.0, 2.0)));
        assert_eq!(extent([f64::NAN]), None);
        assert_eq!(extent([]), None);
    }
}
