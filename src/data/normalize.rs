use super::model::{RawTable, COL_ELEVATION};

/// Legacy labels and the canonical label they are renamed to.
pub const LEGACY_LABELS: &[(&str, &str)] = &[("Elevation (m)", COL_ELEVATION)];

/// Clean column labels before any label-dependent access: trim surrounding
/// whitespace, then apply [`LEGACY_LABELS`]. Cells are left untouched.
pub fn normalize(raw: RawTable) -> RawTable {
    let columns = raw
        .columns
        .into_iter()
        .map(|label| canonical_label(label.trim()).to_string())
        .collect();

    RawTable {
        columns,
        rows: raw.rows,
    }
}

fn canonical_label(label: &str) -> &str {
    LEGACY_LABELS
        .iter()
        .find(|(legacy, _)| *legacy == label)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(columns: &[&str]) -> RawTable {
        RawTable {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: vec![vec![Some(" keep ".to_string()); columns.len()]],
        }
    }

    #[test]
    fn trims_labels() {
        let out = normalize(table(&["  Country", "Latitude ", "\tLongitude\t"]));
        assert_eq!(out.columns, vec!["Country", "Latitude", "Longitude"]);
        assert!(out.columns.iter().all(|c| c.trim() == c));
    }

    #[test]
    fn renames_legacy_elevation_label() {
        let out = normalize(table(&["Elevation (m)"]));
        assert_eq!(out.columns, vec!["Elevation (Meters)"]);
    }

    #[test]
    fn renames_after_trimming() {
        let out = normalize(table(&[" Elevation (m) "]));
        assert_eq!(out.columns, vec!["Elevation (Meters)"]);
    }

    #[test]
    fn leaves_other_labels_and_cells_alone() {
        let out = normalize(table(&["elevation (m)", "Country"]));
        assert_eq!(out.columns, vec!["elevation (m)", "Country"]);
        assert_eq!(out.rows[0][0].as_deref(), Some(" keep "));
    }
}
