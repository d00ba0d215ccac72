use std::path::Path;

use anyhow::{Context, Result};

use super::error::DataError;
use super::loader;
use super::model::{Dataset, RawTable};
use super::normalize::normalize;
use super::select::select;

/// A dataset ready for filtering, plus what the cleaning steps observed.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanDataset {
    pub dataset: Dataset,
    /// Column labels after normalization, before projection.
    pub cleaned_columns: Vec<String>,
    /// Rows discarded for missing country, coordinates or elevation.
    pub dropped_rows: usize,
}

/// Normalize labels, project onto the required columns and drop incomplete rows.
pub fn clean(raw: RawTable) -> Result<CleanDataset, DataError> {
    let normalized = normalize(raw);
    let dataset = select(&normalized)?;
    Ok(CleanDataset {
        dropped_rows: normalized.rows.len() - dataset.len(),
        cleaned_columns: normalized.columns,
        dataset,
    })
}

/// Load and clean a CSV file from disk.
pub fn load_path(path: &Path) -> Result<CleanDataset> {
    let raw = loader::load_file(path)?;
    let clean = clean(raw).with_context(|| format!("cleaning {}", path.display()))?;
    log::info!(
        "Loaded {} volcanoes from {} ({} incomplete rows dropped), columns {:?}",
        clean.dataset.len(),
        path.display(),
        clean.dropped_rows,
        clean.cleaned_columns
    );
    Ok(clean)
}
