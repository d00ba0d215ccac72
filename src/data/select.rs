use super::error::DataError;
use super::model::{
    Dataset, RawTable, Record, COL_ELEVATION, COL_LATITUDE, COL_LONGITUDE, REQUIRED_COLUMNS,
};

/// Positions of the required columns inside a [`RawTable`].
struct Projection {
    name: usize,
    country: usize,
    volcano_type: usize,
    latitude: usize,
    longitude: usize,
    elevation: usize,
}

impl Projection {
    fn resolve(raw: &RawTable) -> Result<Self, DataError> {
        let mut found = [0usize; REQUIRED_COLUMNS.len()];
        let mut missing = Vec::new();
        for (slot, label) in found.iter_mut().zip(REQUIRED_COLUMNS) {
            match raw.column_index(label) {
                Some(idx) => *slot = idx,
                None => missing.push(label.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(DataError::MissingColumn(missing));
        }

        let [name, country, volcano_type, latitude, longitude, elevation] = found;
        Ok(Projection {
            name,
            country,
            volcano_type,
            latitude,
            longitude,
            elevation,
        })
    }
}

/// Project a normalized table onto the required columns and drop rows
/// missing country, latitude, longitude or elevation.
///
/// Missing names and types are kept. Present but non-numeric coordinates
/// or elevations are reported rather than silently dropped.
pub fn select(raw: &RawTable) -> Result<Dataset, DataError> {
    let proj = Projection::resolve(raw)?;

    let mut records = Vec::with_capacity(raw.rows.len());
    for (i, row) in raw.rows.iter().enumerate() {
        let cell = |idx: usize| row.get(idx).and_then(|c| c.as_deref());

        let (Some(country), Some(lat), Some(lon), Some(elev)) = (
            cell(proj.country),
            cell(proj.latitude),
            cell(proj.longitude),
            cell(proj.elevation),
        ) else {
            continue;
        };

        records.push(Record {
            name: cell(proj.name).map(str::to_string),
            country: country.to_string(),
            volcano_type: cell(proj.volcano_type).map(str::to_string),
            latitude: parse_number(lat, i, COL_LATITUDE)?,
            longitude: parse_number(lon, i, COL_LONGITUDE)?,
            elevation: parse_number(elev, i, COL_ELEVATION)?,
        });
    }

    Ok(Dataset::new(records))
}

fn parse_number(s: &str, row: usize, column: &str) -> Result<f64, DataError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        // Fold -0 into 0 so equal elevations compare and print alike.
        .map(|v| v + 0.0)
        .ok_or_else(|| DataError::InvalidNumber {
            row: row + 1,
            column: column.to_string(),
            value: s.to_string(),
        })
}
