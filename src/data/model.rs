use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Column labels
// ---------------------------------------------------------------------------

pub const COL_NAME: &str = "Volcano Name";
pub const COL_COUNTRY: &str = "Country";
pub const COL_TYPE: &str = "Primary Volcano Type";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";
pub const COL_ELEVATION: &str = "Elevation (Meters)";

/// The six columns every clean dataset carries, in display order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_NAME,
    COL_COUNTRY,
    COL_TYPE,
    COL_LATITUDE,
    COL_LONGITUDE,
    COL_ELEVATION,
];

// ---------------------------------------------------------------------------
// RawTable – the parsed file before any schema is applied
// ---------------------------------------------------------------------------

/// Text cells exactly as parsed. `None` marks a missing value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    /// Position of the first column carrying `label`.
    pub fn column_index(&self, label: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == label)
    }
}

// ---------------------------------------------------------------------------
// Record – one volcano
// ---------------------------------------------------------------------------

/// One row of the clean dataset. Country and coordinates are not optional:
/// rows missing them never become records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    #[serde(rename = "Volcano Name")]
    pub name: Option<String>,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Primary Volcano Type")]
    pub volcano_type: Option<String>,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
    #[serde(rename = "Elevation (Meters)")]
    pub elevation: f64,
}

impl Record {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unnamed")
    }

    pub fn display_type(&self) -> &str {
        self.volcano_type.as_deref().unwrap_or("Unknown")
    }
}

/// Elevation as shown to the user: whole meters print without a fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elevation(pub f64);

impl fmt::Display for Elevation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meters = self.0 + 0.0;
        if meters.fract() == 0.0 {
            write!(f, "{meters:.0}")
        } else {
            write!(f, "{meters}")
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset / FilteredView
// ---------------------------------------------------------------------------

/// The clean dataset: ordered records sharing the required schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Records of a dataset matching the current criteria, in dataset order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    pub records: Vec<Record>,
}

impl FilteredView {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
