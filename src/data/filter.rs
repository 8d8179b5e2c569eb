use std::collections::BTreeSet;

use super::domain::{distinct_regions, distinct_types};
use super::model::{AirportDataset, AirportRecord, AirportType, Region, ScheduledService};

// ---------------------------------------------------------------------------
// Filter criteria: one snapshot of the side-panel selections
// ---------------------------------------------------------------------------

/// The four independent predicates, combined with logical AND.
///
/// An empty set selects nothing: with no regions ticked, no airport passes.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub regions: BTreeSet<Region>,
    /// Exclusive upper bound.  Airports without an elevation never pass.
    pub max_elevation_ft: f64,
    pub types: BTreeSet<AirportType>,
    pub scheduled_service: BTreeSet<ScheduledService>,
}

impl FilterCriteria {
    /// Everything present in `dataset` selected, elevation capped at `max_elevation_ft`.
    pub fn select_all(dataset: &AirportDataset, max_elevation_ft: f64) -> Self {
        FilterCriteria {
            regions: distinct_regions(dataset).into_iter().collect(),
            max_elevation_ft,
            types: distinct_types(dataset).into_iter().collect(),
            scheduled_service: scheduled_service_selection(false),
        }
    }

    /// Whether a single record satisfies all four predicates.
    pub fn matches(&self, record: &AirportRecord) -> bool {
        self.regions.contains(&record.region)
            && record
                .elevation_ft
                .is_some_and(|elevation| elevation < self.max_elevation_ft)
            && self.types.contains(&record.airport_type)
            && self.scheduled_service.contains(&record.scheduled_service)
    }
}

/// The "Only show commercial airports" toggle as a scheduled-service set.
pub fn scheduled_service_selection(commercial_only: bool) -> BTreeSet<ScheduledService> {
    if commercial_only {
        BTreeSet::from([ScheduledService::Yes])
    } else {
        BTreeSet::from([ScheduledService::Yes, ScheduledService::No])
    }
}

// ---------------------------------------------------------------------------
// FilteredView: borrowed subset of the dataset
// ---------------------------------------------------------------------------

/// Records passing a [`FilterCriteria`], in dataset order.  Borrowing keeps
/// the dataset itself untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    records: Vec<&'a AirportRecord>,
}

impl<'a> FilteredView<'a> {
    /// A view over every record, no predicate applied.
    pub fn all(dataset: &'a AirportDataset) -> Self {
        FilteredView {
            records: dataset.records().iter().collect(),
        }
    }

    /// A view over the records at `indices`, in the order given.  Indices
    /// past the end of the dataset are ignored.
    pub fn from_indices(dataset: &'a AirportDataset, indices: &[usize]) -> Self {
        FilteredView {
            records: indices
                .iter()
                .filter_map(|&i| dataset.records().get(i))
                .collect(),
        }
    }

    /// Apply `criteria` again to an existing view.
    pub fn refine(&self, criteria: &FilterCriteria) -> FilteredView<'a> {
        FilteredView {
            records: self
                .records
                .iter()
                .copied()
                .filter(|r| criteria.matches(r))
                .collect(),
        }
    }

    pub fn records(&self) -> &[&'a AirportRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a AirportRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> Vec<u64> {
        self.records.iter().map(|r| r.id).collect()
    }
}

/// Return the records of `dataset` that pass all of `criteria`.
///
/// An empty dataset (including one produced after a failed load) simply
/// yields an empty view.
pub fn filter<'a>(dataset: &'a AirportDataset, criteria: &FilterCriteria) -> FilteredView<'a> {
    FilteredView::all(dataset).refine(criteria)
}

/// Return the dataset positions of the records that pass all of `criteria`.
/// Cheap to keep between criteria changes; rebuild the view with
/// [`FilteredView::from_indices`].
pub fn filtered_indices(dataset: &AirportDataset, criteria: &FilterCriteria) -> Vec<usize> {
    let indices: Vec<usize> = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(i, _)| i)
        .collect();
    log::debug!("Filter kept {} of {} airports", indices.len(), dataset.len());
    indices
}
