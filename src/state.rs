use std::path::Path;

use crate::config::ExplorerConfig;
use crate::data::filter::{countries, elevation_bounds, filter, FilterCriteria};
use crate::data::model::FilteredView;
use crate::data::pipeline::{self, CleanDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub config: ExplorerConfig,

    /// Cleaned dataset (None until a file loads successfully).
    pub dataset: Option<CleanDataset>,

    /// Display name of the loaded file.
    pub source_name: Option<String>,

    /// Countries offered by the selector, sorted.
    pub countries: Vec<String>,

    /// Whole-meter `[min, max]` elevation of the dataset (slider limits).
    pub elevation_limits: Option<(i64, i64)>,

    /// Current selection; None while no dataset (or an empty one) is loaded.
    pub criteria: Option<FilterCriteria>,

    /// Records passing the current criteria (rebuilt on every change).
    pub view: FilteredView,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Ingest a newly cleaned dataset and reset the filters.
    pub fn set_dataset(&mut self, dataset: CleanDataset, source_name: impl Into<String>) {
        self.countries = countries(&dataset.dataset);
        self.elevation_limits = elevation_bounds(&dataset.dataset);
        self.criteria = FilterCriteria::initial(&dataset.dataset, &self.config);

        self.dataset = Some(dataset);
        self.source_name = Some(source_name.into());
        self.status_message = None;
        self.refilter();
    }

    /// Load a file from disk. On failure nothing of the file is kept and the
    /// error is shown in the status line.
    pub fn load_path(&mut self, path: &Path) {
        match pipeline::load_path(path) {
            Ok(dataset) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                self.set_dataset(dataset, name);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.clear();
                self.status_message = Some(format!("Error reading file: {e:#}"));
            }
        }
    }

    /// Drop the dataset and everything derived from it.
    pub fn clear(&mut self) {
        *self = Self::new(self.config.clone());
    }

    /// Recompute the filtered view from scratch.
    pub fn refilter(&mut self) {
        self.view = match (&self.dataset, &self.criteria) {
            (Some(ds), Some(criteria)) => {
                let view = filter(&ds.dataset, criteria);
                log::debug!("Filter {criteria:?} matched {} volcanoes", view.len());
                view
            }
            _ => FilteredView::default(),
        };
    }

    pub fn set_country(&mut self, country: &str) {
        if let Some(criteria) = &mut self.criteria {
            if criteria.country() != country {
                criteria.set_country(country);
                self.refilter();
            }
        }
    }

    pub fn set_lower(&mut self, lower: i64) {
        if let Some(criteria) = &mut self.criteria {
            if criteria.lower() != lower {
                criteria.set_lower(lower);
                self.refilter();
            }
        }
    }

    pub fn set_upper(&mut self, upper: i64) {
        if let Some(criteria) = &mut self.criteria {
            if criteria.upper() != upper {
                criteria.set_upper(upper);
                self.refilter();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    const CSV: &str = "\
Volcano Name,Country,Primary Volcano Type,Latitude,Longitude,Elevation (m)
Etna,Italy,Stratovolcano,37.75,14.99,3357
Vesuvius,Italy,Stratovolcano,40.82,14.43,1281
Fuji,Japan,Stratovolcano,35.36,138.73,3776
";

    fn loaded() -> AppState {
        let mut state = AppState::new(ExplorerConfig::default());
        let clean = pipeline::clean(parse_csv(CSV.as_bytes()).unwrap()).unwrap();
        state.set_dataset(clean, "volcanoes.csv");
        state
    }

    #[test]
    fn new_dataset_selects_first_country_and_default_window() {
        let state = loaded();
        assert_eq!(state.countries, vec!["Italy", "Japan"]);
        assert_eq!(state.elevation_limits, Some((1281, 3776)));
        let criteria = state.criteria.as_ref().unwrap();
        assert_eq!(criteria.country(), "Italy");
        assert_eq!((criteria.lower(), criteria.upper()), (0, 5000));
        assert_eq!(state.view.len(), 2);
    }

    #[test]
    fn changing_criteria_refilters() {
        let mut state = loaded();
        state.set_country("Japan");
        assert_eq!(state.view.records[0].display_name(), "Fuji");

        state.set_country("Italy");
        state.set_lower(2000);
        assert_eq!(state.view.len(), 1);
        assert_eq!(state.view.records[0].display_name(), "Etna");

        state.set_upper(1000);
        let criteria = state.criteria.as_ref().unwrap();
        assert_eq!((criteria.lower(), criteria.upper()), (1000, 1000));
        assert!(state.view.is_empty());
    }

    #[test]
    fn failed_load_clears_previous_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.csv");
        std::fs::write(&path, "Country\nItaly\n").unwrap();

        let mut state = loaded();
        state.load_path(&path);
        assert!(state.dataset.is_none());
        assert!(state.criteria.is_none());
        assert!(state.view.is_empty());
        let msg = state.status_message.unwrap();
        assert!(msg.contains("missing required column"));
    }

    #[test]
    fn successful_load_records_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VOLCANOES DATA.csv");
        std::fs::write(&path, CSV).unwrap();

        let mut state = AppState::new(ExplorerConfig::default());
        state.load_path(&path);
        assert_eq!(state.source_name.as_deref(), Some("VOLCANOES DATA.csv"));
        assert_eq!(state.dataset.as_ref().unwrap().dataset.len(), 3);
    }
}
