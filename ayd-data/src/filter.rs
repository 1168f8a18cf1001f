//! The filter engine: stable, composable narrowing by year and country.
//!
//! Sentinel selections return the input borrowed and untouched, so the
//! "All Time" / "Worldwide" defaults cost nothing and compare identical
//! to the source slice.

use std::borrow::Cow;

use ayd_model::{CountryFilter, Selection, YearFilter, YieldRecord};

/// Records matching the year selection, in input order.
pub fn filter_by_year<'a>(
    records: &'a [YieldRecord],
    year: &YearFilter,
) -> Cow<'a, [YieldRecord]> {
    match year {
        YearFilter::AllTime => Cow::Borrowed(records),
        YearFilter::Year(y) => Cow::Owned(
            records
                .iter()
                .filter(|r| r.year == *y)
                .cloned()
                .collect(),
        ),
    }
}

/// Records matching the country selection, in input order.
pub fn filter_by_country<'a>(
    records: &'a [YieldRecord],
    country: &CountryFilter,
) -> Cow<'a, [YieldRecord]> {
    match country {
        CountryFilter::Worldwide => Cow::Borrowed(records),
        CountryFilter::Country(c) => Cow::Owned(
            records
                .iter()
                .filter(|r| r.area == *c)
                .cloned()
                .collect(),
        ),
    }
}

/// The year∧country view used by the pie chart: year filter first, then
/// country, preserving borrows when both dimensions are sentinels.
pub fn year_and_country_view<'a>(
    records: &'a [YieldRecord],
    selection: &Selection,
) -> Cow<'a, [YieldRecord]> {
    match filter_by_year(records, &selection.year) {
        Cow::Borrowed(by_year) => filter_by_country(by_year, &selection.country),
        Cow::Owned(by_year) => {
            Cow::Owned(filter_by_country(&by_year, &selection.country).into_owned())
        }
    }
}
