use std::fmt;

/// Sentinel shown for the unfiltered year choice.
pub const ALL_TIME: &str = "All Time";
/// Sentinel shown for the unfiltered country choice.
pub const WORLDWIDE: &str = "Worldwide";

/// Year dimension of the selection: a concrete year or the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    AllTime,
    Year(i32),
}

/// Country dimension of the selection: a concrete country or the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CountryFilter {
    #[default]
    Worldwide,
    Country(String),
}

impl YearFilter {
    /// Parse a selector string: the sentinel or a year number.
    pub fn parse(s: &str) -> anyhow::Result<Self> {
        if s == ALL_TIME {
            return Ok(YearFilter::AllTime);
        }
        let year = s
            .parse::<i32>()
            .map_err(|_| anyhow::anyhow!("invalid year selection: {s:?}"))?;
        Ok(YearFilter::Year(year))
    }
}

impl CountryFilter {
    pub fn parse(s: &str) -> Self {
        if s == WORLDWIDE {
            CountryFilter::Worldwide
        } else {
            CountryFilter::Country(s.to_string())
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::AllTime => f.write_str(ALL_TIME),
            YearFilter::Year(y) => write!(f, "{y}"),
        }
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryFilter::Worldwide => f.write_str(WORLDWIDE),
            CountryFilter::Country(c) => f.write_str(c),
        }
    }
}

/// The `(year, country)` pair driving a redraw.
///
/// The external selector holds the only mutable copy; the pipeline takes
/// an immutable reference on every redraw, so there is no shared mutable
/// state inside the pipeline itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    pub year: YearFilter,
    pub country: CountryFilter,
}

impl Selection {
    pub fn new(year: YearFilter, country: CountryFilter) -> Self {
        Selection { year, country }
    }

    /// Caption used by the pie chart center label, e.g. "Chad, 1990".
    pub fn caption(&self) -> String {
        format!("{}, {}", self.country, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_filter_parse() {
        assert_eq!(YearFilter::parse("All Time").unwrap(), YearFilter::AllTime);
        assert_eq!(YearFilter::parse("1990").unwrap(), YearFilter::Year(1990));
        assert!(YearFilter::parse("ninety").is_err());
    }

    #[test]
    fn test_country_filter_parse() {
        assert_eq!(CountryFilter::parse("Worldwide"), CountryFilter::Worldwide);
        assert_eq!(
            CountryFilter::parse("Chad"),
            CountryFilter::Country("Chad".to_string())
        );
    }

    #[test]
    fn test_display_round_trips_sentinels() {
        assert_eq!(YearFilter::AllTime.to_string(), "All Time");
        assert_eq!(CountryFilter::Worldwide.to_string(), "Worldwide");
        assert_eq!(YearFilter::Year(2013).to_string(), "2013");
    }

    #[test]
    fn test_default_selection_is_unfiltered() {
        let selection = Selection::default();
        assert_eq!(selection.year, YearFilter::AllTime);
        assert_eq!(selection.country, CountryFilter::Worldwide);
        assert_eq!(selection.caption(), "Worldwide, All Time");
    }
}
