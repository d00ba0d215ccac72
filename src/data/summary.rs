use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::ExplorerConfig;

use super::model::{Elevation, Record};

/// Bars in the tallest-volcanoes chart unless configured otherwise.
pub const DEFAULT_TOP_N: usize = 5;

/// Label of the bucket that collects rare volcano types.
pub const OTHER_LABEL: &str = "Other";

// ---------------------------------------------------------------------------
// Elevation statistics
// ---------------------------------------------------------------------------

/// Lowest and highest elevation of the view, or `None` when there is no data.
pub fn extremes(view: &[Record]) -> Option<(f64, f64)> {
    let mut iter = view.iter().map(|r| r.elevation);
    let first = iter.next()?;
    Some(iter.fold((first, first), |(lo, hi), e| (lo.min(e), hi.max(e))))
}

/// Up to `n` records by elevation, highest first. Equal elevations keep
/// their original relative order.
pub fn top_n(view: &[Record], n: usize) -> Vec<&Record> {
    let mut ranked: Vec<&Record> = view.iter().collect();
    // Elevations are never NaN; -0 and 0 tie.
    ranked.sort_by(|a, b| b.elevation.partial_cmp(&a.elevation).unwrap_or(Ordering::Equal));
    ranked.truncate(n);
    ranked
}

// ---------------------------------------------------------------------------
// Type distribution (pie chart)
// ---------------------------------------------------------------------------

/// One slice of the type distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeSlice {
    pub label: String,
    pub count: usize,
    /// Share of all counted records, in `0.0..=1.0`.
    pub fraction: f64,
}

/// Count primary types, giving every type with more than `threshold`
/// volcanoes its own slice and folding the rest into a single "Other" slice.
///
/// Records without a type are not counted. Slices are ordered by count
/// (descending, then label); "Other" comes last and only when non-empty.
pub fn type_breakdown(view: &[Record], threshold: usize) -> Vec<TypeSlice> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for ty in view.iter().filter_map(|r| r.volcano_type.as_deref()) {
        *counts.entry(ty).or_default() += 1;
    }
    let total: usize = counts.values().sum();

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let (major, minor): (Vec<_>, Vec<_>) = ranked.into_iter().partition(|(_, n)| *n > threshold);
    let others: usize = minor.iter().map(|(_, n)| n).sum();

    let slice = |label: &str, count: usize| TypeSlice {
        label: label.to_string(),
        count,
        fraction: count as f64 / total as f64,
    };

    let mut slices: Vec<TypeSlice> = major.into_iter().map(|(l, n)| slice(l, n)).collect();
    if others > 0 {
        slices.push(slice(OTHER_LABEL, others));
    }
    slices
}

// ---------------------------------------------------------------------------
// Map layer
// ---------------------------------------------------------------------------

/// A point on the map with its hover text.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub latitude: f64,
    pub longitude: f64,
    pub tooltip: String,
}

/// Initial map viewpoint: mean latitude and longitude of the view.
pub fn map_center(view: &[Record]) -> Option<(f64, f64)> {
    if view.is_empty() {
        return None;
    }
    let n = view.len() as f64;
    let lat = view.iter().map(|r| r.latitude).sum::<f64>() / n;
    let lon = view.iter().map(|r| r.longitude).sum::<f64>() / n;
    Some((lat, lon))
}

pub fn tooltip(record: &Record) -> String {
    format!(
        "🌋 {}\n⛰ {} meters\n{}",
        record.display_name(),
        Elevation(record.elevation),
        record.display_type()
    )
}

pub fn map_markers(view: &[Record]) -> impl Iterator<Item = MapMarker> + '_ {
    view.iter().map(|r| MapMarker {
        latitude: r.latitude,
        longitude: r.longitude,
        tooltip: tooltip(r),
    })
}

// ---------------------------------------------------------------------------
// Narrative
// ---------------------------------------------------------------------------

/// One text line per record. Lazy; call again to restart.
pub fn row_summaries(view: &[Record]) -> impl Iterator<Item = String> + '_ {
    view.iter().map(|r| {
        format!(
            "🌋 {} | Type: {} | Elevation: {} m",
            r.display_name(),
            r.display_type(),
            Elevation(r.elevation)
        )
    })
}

/// Comma-separated names of the view; unnamed records are skipped.
pub fn matching_names(view: &[Record]) -> String {
    view.iter()
        .filter_map(|r| r.name.as_deref())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Closing message for the current match count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Warning(String),
}

pub fn feedback(count: usize, config: &ExplorerConfig) -> Option<Feedback> {
    if count == 0 {
        Some(Feedback::Warning(
            "No volcanoes match those filters. Try expanding the elevation range.".to_string(),
        ))
    } else if count >= config.celebrate_threshold {
        Some(Feedback::Success(format!("You found {count} volcanoes!")))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, ty: Option<&str>, elevation: f64) -> Record {
        Record {
            name: Some(name.into()),
            country: "X".into(),
            volcano_type: ty.map(str::to_string),
            latitude: 10.0,
            longitude: 20.0,
            elevation,
        }
    }

    fn names<'a>(records: &[&'a Record]) -> Vec<&'a str> {
        records.iter().map(|r| r.display_name()).collect()
    }

    #[test]
    fn extremes_match_linear_scan() {
        let view = vec![rec("A", None, 1000.0), rec("B", None, -20.0), rec("C", None, 3000.0)];
        assert_eq!(extremes(&view), Some((-20.0, 3000.0)));
    }

    #[test]
    fn extremes_of_empty_view_is_none() {
        assert_eq!(extremes(&[]), None);
    }

    #[test]
    fn top_n_orders_descending_and_is_stable() {
        let view = vec![
            rec("A", None, 100.0),
            rec("B", None, 300.0),
            rec("C", None, 200.0),
            rec("D", None, 300.0),
            rec("E", None, 200.0),
            rec("F", None, 50.0),
        ];
        let top = top_n(&view, DEFAULT_TOP_N);
        assert_eq!(names(&top), vec!["B", "D", "C", "E", "A"]);
        assert!(top.windows(2).all(|w| w[0].elevation >= w[1].elevation));
    }

    #[test]
    fn top_n_keeps_order_of_signed_zeros() {
        let view = vec![rec("A", None, -0.0), rec("B", None, 0.0)];
        assert_eq!(names(&top_n(&view, 2)), vec!["A", "B"]);
    }

    #[test]
    fn top_n_with_short_or_empty_view() {
        let view = vec![rec("A", None, 1.0), rec("B", None, 2.0)];
        assert_eq!(names(&top_n(&view, 5)), vec!["B", "A"]);
        assert!(top_n(&[], 5).is_empty());
        assert!(top_n(&view, 0).is_empty());
    }

    #[test]
    fn breakdown_buckets_rare_types_into_other() {
        let mut view = Vec::new();
        for i in 0..7 {
            view.push(rec(&format!("s{i}"), Some("Stratovolcano"), 0.0));
        }
        for i in 0..6 {
            view.push(rec(&format!("c{i}"), Some("Caldera"), 0.0));
        }
        for i in 0..5 {
            view.push(rec(&format!("h{i}"), Some("Shield"), 0.0));
        }
        view.push(rec("m", Some("Maar"), 0.0));
        view.push(rec("n", None, 0.0));

        let slices = type_breakdown(&view, 5);
        let labels: Vec<_> = slices.iter().map(|s| (s.label.as_str(), s.count)).collect();
        assert_eq!(labels, vec![("Stratovolcano", 7), ("Caldera", 6), ("Other", 6)]);
        let total: f64 = slices.iter().map(|s| s.fraction).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn breakdown_omits_empty_other_bucket() {
        let view: Vec<_> = (0..6).map(|i| rec(&i.to_string(), Some("Shield"), 0.0)).collect();
        let slices = type_breakdown(&view, 5);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Shield");
        assert_eq!(slices[0].fraction, 1.0);
    }

    #[test]
    fn breakdown_of_small_view_is_all_other() {
        let view = vec![rec("A", Some("Shield"), 0.0), rec("B", Some("Maar"), 0.0)];
        let slices = type_breakdown(&view, 5);
        let expected = TypeSlice {
            label: "Other".into(),
            count: 2,
            fraction: 1.0,
        };
        assert_eq!(slices, vec![expected]);
        assert!(type_breakdown(&[], 5).is_empty());
    }

    #[test]
    fn map_center_is_the_mean() {
        let mut a = rec("A", None, 0.0);
        a.latitude = 10.0;
        a.longitude = -20.0;
        let mut b = rec("B", None, 0.0);
        b.latitude = 20.0;
        b.longitude = 40.0;
        assert_eq!(map_center(&[a, b]), Some((15.0, 10.0)));
        assert_eq!(map_center(&[]), None);
    }

    #[test]
    fn tooltip_lists_name_elevation_and_type() {
        let marker = map_markers(&[rec("Fuji", Some("Stratovolcano"), 3776.0)])
            .next()
            .unwrap();
        assert_eq!(marker.tooltip, "🌋 Fuji\n⛰ 3776 meters\nStratovolcano");
        assert_eq!((marker.latitude, marker.longitude), (10.0, 20.0));
    }

    #[test]
    fn row_summaries_are_restartable() {
        let view = vec![rec("A", Some("Shield"), 12.5), rec("B", None, 3000.0)];
        let first: Vec<_> = row_summaries(&view).collect();
        let second: Vec<_> = row_summaries(&view).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "🌋 A | Type: Shield | Elevation: 12.5 m");
        assert_eq!(first[1], "🌋 B | Type: Unknown | Elevation: 3000 m");
    }

    #[test]
    fn matching_names_skip_unnamed() {
        let mut unnamed = rec("", None, 0.0);
        unnamed.name = None;
        let view = vec![rec("A", None, 0.0), unnamed, rec("C", None, 0.0)];
        assert_eq!(matching_names(&view), "A, C");
    }

    #[test]
    fn feedback_by_count() {
        let cfg = ExplorerConfig::default();
        assert_eq!(
            feedback(12, &cfg),
            Some(Feedback::Success("You found 12 volcanoes!".into()))
        );
        assert!(matches!(feedback(0, &cfg), Some(Feedback::Warning(_))));
        assert_eq!(feedback(9, &cfg), None);
        assert!(matches!(feedback(10, &cfg), Some(Feedback::Success(_))));
    }
}
