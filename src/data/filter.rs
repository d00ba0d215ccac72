use std::collections::BTreeSet;

use crate::config::ExplorerConfig;

use super::error::DataError;
use super::model::{Dataset, FilteredView, Record};

// ---------------------------------------------------------------------------
// Filter criteria: one country and an inclusive elevation window
// ---------------------------------------------------------------------------

/// User-selected filter. Invariant: `lower <= upper`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    country: String,
    lower: i64,
    upper: i64,
}

impl FilterCriteria {
    pub fn new(country: impl Into<String>, lower: i64, upper: i64) -> Result<Self, DataError> {
        if lower > upper {
            return Err(DataError::InvalidRange { lower, upper });
        }
        Ok(Self {
            country: country.into(),
            lower,
            upper,
        })
    }

    /// Criteria shown right after a file is opened: the alphabetically first
    /// country and the configured default window, whatever the data's range.
    /// `None` for a dataset without records.
    pub fn initial(dataset: &Dataset, config: &ExplorerConfig) -> Option<Self> {
        if dataset.is_empty() {
            return None;
        }
        let country = countries(dataset).into_iter().next()?;
        Self::new(country, config.default_lower, config.default_upper).ok()
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = country.into();
    }

    /// Move the lower bound, dragging the upper bound along if crossed.
    pub fn set_lower(&mut self, lower: i64) {
        self.lower = lower;
        self.upper = self.upper.max(lower);
    }

    /// Move the upper bound, dragging the lower bound along if crossed.
    pub fn set_upper(&mut self, upper: i64) {
        self.upper = upper;
        self.lower = self.lower.min(upper);
    }

    /// Exact country match and inclusive elevation bounds.
    pub fn matches(&self, record: &Record) -> bool {
        record.country == self.country
            && self.lower as f64 <= record.elevation
            && record.elevation <= self.upper as f64
    }
}

// ---------------------------------------------------------------------------
// Filtering and control domains
// ---------------------------------------------------------------------------

/// Build a new view holding the records that pass `criteria`.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> FilteredView {
    FilteredView {
        records: dataset
            .records
            .iter()
            .filter(|r| criteria.matches(r))
            .cloned()
            .collect(),
    }
}

/// Distinct countries in ascending order, as offered by the country selector.
pub fn countries(dataset: &Dataset) -> Vec<String> {
    dataset
        .records
        .iter()
        .map(|r| r.country.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Whole-meter `[min, max]` elevation of the dataset, used as slider limits.
pub fn elevation_bounds(dataset: &Dataset) -> Option<(i64, i64)> {
    let mut iter = dataset.records.iter().map(|r| r.elevation);
    let first = iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), e| (lo.min(e), hi.max(e)));
    Some((min.trunc() as i64, max.trunc() as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, country: &str, elevation: f64) -> Record {
        Record {
            name: Some(name.into()),
            country: country.into(),
            volcano_type: Some("Stratovolcano".into()),
            latitude: 0.0,
            longitude: 0.0,
            elevation,
        }
    }

    fn sample() -> Dataset {
        Dataset::new(vec![
            rec("A", "X", 1000.0),
            rec("B", "X", 3000.0),
            rec("C", "Y", 2000.0),
            rec("D", "X", -50.0),
            rec("E", "x", 1500.0),
            rec("F", "X", 5000.0),
            rec("G", "X", 5000.5),
        ])
    }

    fn names(view: &FilteredView) -> Vec<&str> {
        view.records.iter().map(|r| r.display_name()).collect()
    }

    #[test]
    fn country_and_inclusive_range() {
        let view = filter(&sample(), &FilterCriteria::new("X", 0, 5000).unwrap());
        assert_eq!(names(&view), vec!["A", "B", "F"]);
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let view = filter(&sample(), &FilterCriteria::new("X", 1000, 3000).unwrap());
        assert_eq!(names(&view), vec!["A", "B"]);
    }

    #[test]
    fn country_match_is_case_sensitive() {
        let view = filter(&sample(), &FilterCriteria::new("x", 0, 5000).unwrap());
        assert_eq!(names(&view), vec!["E"]);
    }

    #[test]
    fn unknown_country_gives_empty_view() {
        let view = filter(&sample(), &FilterCriteria::new("Z", 0, 5000).unwrap());
        assert!(view.is_empty());
    }

    #[test]
    fn agrees_with_naive_reference() {
        let ds = sample();
        for country in ["X", "Y", "x", "Z"] {
            for (lo, hi) in [(-100, 0), (0, 5000), (1000, 1000), (-100, 6000), (2000, 2999)] {
                let criteria = FilterCriteria::new(country, lo, hi).unwrap();
                let mut expected = Vec::new();
                for r in &ds.records {
                    let in_range = r.elevation >= lo as f64 && r.elevation <= hi as f64;
                    if r.country == country && in_range {
                        expected.push(r.clone());
                    }
                }
                assert_eq!(filter(&ds, &criteria).records, expected);
            }
        }
    }

    #[test]
    fn filtering_does_not_touch_the_dataset() {
        let ds = sample();
        let before = ds.clone();
        let _ = filter(&ds, &FilterCriteria::new("X", 0, 10).unwrap());
        assert_eq!(ds, before);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(
            FilterCriteria::new("X", 10, 5),
            Err(DataError::InvalidRange { lower: 10, upper: 5 })
        ));
    }

    #[test]
    fn moving_a_bound_past_the_other_keeps_order() {
        let mut c = FilterCriteria::new("X", 0, 5000).unwrap();
        c.set_lower(6000);
        assert_eq!((c.lower(), c.upper()), (6000, 6000));
        c.set_upper(-10);
        assert_eq!((c.lower(), c.upper()), (-10, -10));
    }

    #[test]
    fn countries_are_distinct_and_sorted() {
        assert_eq!(countries(&sample()), vec!["X", "Y", "x"]);
    }

    #[test]
    fn elevation_bounds_truncate_to_whole_meters() {
        assert_eq!(elevation_bounds(&sample()), Some((-50, 5000)));
        assert_eq!(elevation_bounds(&Dataset::default()), None);
    }

    #[test]
    fn initial_criteria_use_default_window() {
        let ds = Dataset::new(vec![rec("Z", "Peru", 6000.0), rec("Y", "Chile", 5500.0)]);
        let c = FilterCriteria::initial(&ds, &ExplorerConfig::default()).unwrap();
        assert_eq!(c.country(), "Chile");
        assert_eq!((c.lower(), c.upper()), (0, 5000));
        // Data lies above the default window, so the first view is empty.
        assert!(filter(&ds, &c).is_empty());
        let empty = Dataset::default();
        assert!(FilterCriteria::initial(&empty, &ExplorerConfig::default()).is_none());
    }
}
