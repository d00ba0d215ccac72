use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::data::summary::DEFAULT_TOP_N;

// ---------------------------------------------------------------------------
// Explorer settings
// ---------------------------------------------------------------------------

/// Tunables for the views. Every field is optional in the settings file.
///
/// ```json
/// { "default_lower": 0, "default_upper": 5000, "top_n": 5 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExplorerConfig {
    /// Initial lower elevation bound, independent of the data's range.
    pub default_lower: i64,
    /// Initial upper elevation bound, independent of the data's range.
    pub default_upper: i64,
    /// Bars in the tallest-volcanoes chart.
    pub top_n: usize,
    /// Types with at most this many volcanoes are folded into "Other".
    pub other_threshold: usize,
    /// Match count from which the success message is shown.
    pub celebrate_threshold: usize,
    /// Degrees of longitude/latitude visible around the map centre.
    pub map_span_degrees: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            default_lower: 0,
            default_upper: 5000,
            top_n: DEFAULT_TOP_N,
            other_threshold: 5,
            celebrate_threshold: 10,
            map_span_degrees: 10.0,
        }
    }
}

impl ExplorerConfig {
    /// Load settings from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        let config: ExplorerConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing settings file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.default_lower <= self.default_upper,
            "default_lower ({}) must not exceed default_upper ({})",
            self.default_lower,
            self.default_upper
        );
        ensure!(self.map_span_degrees > 0.0, "map_span_degrees must be positive");
        Ok(())
    }
}
