use std::path::{Path, PathBuf};

use rusty_runway::config::Settings;
use rusty_runway::data::aggregate::DashboardSummary;
use rusty_runway::data::domain::{distinct_regions, distinct_types};
use rusty_runway::data::filter::{
    filtered_indices, scheduled_service_selection, FilterCriteria, FilteredView,
};
use rusty_runway::data::loader::load_or_empty;
use rusty_runway::data::model::{AirportDataset, AirportType, Region};

use crate::color::RegionColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: Settings,

    /// Loaded dataset; empty when the source could not be read.
    pub dataset: AirportDataset,

    /// File the dataset came from.
    pub data_path: PathBuf,

    /// Regions present in the dataset, in first-seen order.
    pub region_options: Vec<Region>,

    /// Airport types present in the dataset, in first-seen order.
    pub type_options: Vec<AirportType>,

    /// Current side-panel selections.
    pub criteria: FilterCriteria,

    /// "Only show commercial airports" checkbox.
    pub commercial_only: bool,

    /// Dataset positions passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    /// Aggregates for the current criteria.
    pub summary: DashboardSummary,

    pub colors: RegionColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state by loading the configured data file.
    pub fn new(settings: Settings) -> Self {
        let data_path = settings.data_path.clone();
        let mut state = Self {
            criteria: FilterCriteria::select_all(&AirportDataset::default(), settings.elevation_limit_ft),
            settings,
            dataset: AirportDataset::default(),
            data_path: data_path.clone(),
            region_options: Vec::new(),
            type_options: Vec::new(),
            commercial_only: false,
            visible_indices: Vec::new(),
            summary: DashboardSummary::default(),
            colors: RegionColors::new(),
            status_message: None,
        };
        state.load(&data_path);
        state
    }

    /// (Re)load the dataset from `path`.  A failed load leaves an empty
    /// dataset and a warning in the status bar.
    pub fn load(&mut self, path: &Path) {
        let outcome = load_or_empty(path);
        self.status_message = outcome
            .warning
            .map(|e| format!("Warning: {e}. Showing no airports."));
        if self.status_message.is_none() && outcome.dataset.skipped_rows() > 0 {
            self.status_message = Some(format!(
                "{} malformed rows were skipped",
                outcome.dataset.skipped_rows()
            ));
        }
        self.data_path = path.to_path_buf();
        self.set_dataset(outcome.dataset);
    }

    /// Ingest a newly loaded dataset and reset every selection to "all".
    pub fn set_dataset(&mut self, dataset: AirportDataset) {
        self.region_options = distinct_regions(&dataset).into_iter().collect();
        self.type_options = distinct_types(&dataset).into_iter().collect();
        self.criteria = FilterCriteria::select_all(&dataset, self.settings.elevation_limit_ft);
        self.commercial_only = false;
        self.dataset = dataset;
        self.refilter();
    }

    /// Airports passing the current criteria, rebuilt from the cached indices.
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::from_indices(&self.dataset, &self.visible_indices)
    }

    /// Selected regions in side-panel order; the count chart follows this order.
    pub fn selected_regions(&self) -> Vec<Region> {
        self.region_options
            .iter()
            .copied()
            .filter(|r| self.criteria.regions.contains(r))
            .collect()
    }

    /// Recompute `visible_indices` and the summary after a criteria change.
    pub fn refilter(&mut self) {
        self.criteria.scheduled_service = scheduled_service_selection(self.commercial_only);
        self.visible_indices = filtered_indices(&self.dataset, &self.criteria);
        let regions = self.selected_regions();
        let summary = DashboardSummary::from_view(&self.view(), &regions);
        self.summary = summary;
    }

    /// Toggle a single region in the selection.
    pub fn toggle_region(&mut self, region: Region) {
        if !self.criteria.regions.remove(&region) {
            self.criteria.regions.insert(region);
        }
        self.refilter();
    }

    /// Toggle a single airport type in the selection.
    pub fn toggle_type(&mut self, airport_type: AirportType) {
        if !self.criteria.types.remove(&airport_type) {
            self.criteria.types.insert(airport_type);
        }
        self.refilter();
    }

    pub fn select_all_regions(&mut self) {
        self.criteria.regions = self.region_options.iter().copied().collect();
        self.refilter();
    }

    pub fn select_no_regions(&mut self) {
        self.criteria.regions.clear();
        self.refilter();
    }

    pub fn select_all_types(&mut self) {
        self.criteria.types = self.type_options.iter().copied().collect();
        self.refilter();
    }

    pub fn select_no_types(&mut self) {
        self.criteria.types.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rusty_runway::data::filter::filter;

    use super::*;

    fn state_with(rows: &[&str]) -> (AppState, tempfile::NamedTempFile) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "id,ident,type,name,latitude_deg,longitude_deg,elevation_ft,iso_region,municipality,scheduled_service"
        )
        .unwrap();
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
        let settings = Settings {
            data_path: file.path().to_path_buf(),
            elevation_limit_ft: 2500.0,
        };
        (AppState::new(settings), file)
    }

    #[test]
    fn cached_view_follows_every_criteria_change() {
        let (mut state, _file) = state_with(&[
            "1,KBOS,large_airport,Logan,42.36,-71.0,20,US-MA,Boston,yes",
            "2,KBTV,medium_airport,Burlington,44.47,-73.15,335,US-VT,Burlington,yes",
            "3,1VT,small_airport,Strip,44.0,-72.5,900,US-VT,Barre,no",
        ]);
        assert_eq!(state.view().ids(), vec![1, 2, 3]);

        state.toggle_region(Region::Massachusetts);
        assert_eq!(state.view(), filter(&state.dataset, &state.criteria));
        assert_eq!(state.view().ids(), vec![2, 3]);

        state.commercial_only = true;
        state.refilter();
        assert_eq!(state.view().ids(), vec![2]);
        assert_eq!(state.summary.breakdown.total, 1);
        assert_eq!(state.summary.counts, vec![1]);
    }

    #[test]
    fn missing_file_shows_warning_and_nothing_else() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            data_path: dir.path().join("airports.csv"),
            elevation_limit_ft: 2500.0,
        };
        let state = AppState::new(settings);
        assert!(state.view().is_empty());
        assert!(state.status_message.is_some());
    }
}
