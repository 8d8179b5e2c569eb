use indexmap::IndexSet;

use super::model::{AirportDataset, AirportType, Region};

/// Regions actually present in the dataset, in first-seen order.
///
/// Since the dataset is sorted by elevation this is "lowest airport first",
/// which is also the default selection order in the side panel.
pub fn distinct_regions(dataset: &AirportDataset) -> IndexSet<Region> {
    dataset.records().iter().map(|r| r.region).collect()
}

/// Airport types actually present in the dataset, in first-seen order.
pub fn distinct_types(dataset: &AirportDataset) -> IndexSet<AirportType> {
    dataset.records().iter().map(|r| r.airport_type).collect()
}
