use std::collections::BTreeMap;

use super::filter::FilteredView;
use super::model::{AirportType, Region};

/// Region → elevations (feet) of its airports, in view order.
pub type ElevationGroups = BTreeMap<Region, Vec<f64>>;

// ---------------------------------------------------------------------------
// Per-region reductions
// ---------------------------------------------------------------------------

/// Airport count for each entry of `regions`, positionally aligned.
/// Regions absent from the view count as 0.
pub fn counts_by_region(view: &FilteredView<'_>, regions: &[Region]) -> Vec<usize> {
    let mut counts: BTreeMap<Region, usize> = BTreeMap::new();
    for record in view.iter() {
        *counts.entry(record.region).or_default() += 1;
    }
    regions
        .iter()
        .map(|region| counts.get(region).copied().unwrap_or(0))
        .collect()
}

/// Group elevations by region.  Every region in the view gets an entry;
/// airports without an elevation contribute nothing to their list.
pub fn elevations_by_region(view: &FilteredView<'_>) -> ElevationGroups {
    let mut groups = ElevationGroups::new();
    for record in view.iter() {
        let group = groups.entry(record.region).or_default();
        if let Some(elevation) = record.elevation_ft {
            group.push(elevation);
        }
    }
    groups
}

/// Arithmetic mean per region.  Regions with no elevations get no entry.
pub fn mean_by_region(groups: &ElevationGroups) -> BTreeMap<Region, f64> {
    groups
        .iter()
        .filter(|(_, values)| !values.is_empty())
        .map(|(region, values)| (*region, values.iter().sum::<f64>() / values.len() as f64))
        .collect()
}

/// Highest elevation per region.  Regions with no elevations get no entry.
pub fn max_by_region(groups: &ElevationGroups) -> BTreeMap<Region, f64> {
    groups
        .iter()
        .filter_map(|(region, values)| {
            values
                .iter()
                .copied()
                .reduce(f64::max)
                .map(|max| (*region, max))
        })
        .collect()
}

/// Everything known about one region of a view.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionAggregate {
    pub count: usize,
    pub elevations: Vec<f64>,
    pub mean_elevation_ft: Option<f64>,
    pub max_elevation_ft: Option<f64>,
}

/// Per-region facts for every region present in the view.
pub fn region_aggregates(view: &FilteredView<'_>) -> BTreeMap<Region, RegionAggregate> {
    let groups = elevations_by_region(view);
    let means = mean_by_region(&groups);
    let maxes = max_by_region(&groups);
    let regions: Vec<Region> = groups.keys().copied().collect();
    let counts = counts_by_region(view, &regions);

    groups
        .into_iter()
        .zip(counts)
        .map(|((region, elevations), count)| {
            let aggregate = RegionAggregate {
                count,
                elevations,
                mean_elevation_ft: means.get(&region).copied(),
                max_elevation_ft: maxes.get(&region).copied(),
            };
            (region, aggregate)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Type breakdown
// ---------------------------------------------------------------------------

/// Headline numbers: total airports and how many of each type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeBreakdown {
    pub total: usize,
    pub large: usize,
    pub medium: usize,
    pub small: usize,
}

pub fn type_breakdown(view: &FilteredView<'_>) -> TypeBreakdown {
    let mut breakdown = TypeBreakdown {
        total: view.len(),
        ..TypeBreakdown::default()
    };
    for record in view.iter() {
        match record.airport_type {
            AirportType::LargeAirport => breakdown.large += 1,
            AirportType::MediumAirport => breakdown.medium += 1,
            AirportType::SmallAirport => breakdown.small += 1,
        }
    }
    breakdown
}

// ---------------------------------------------------------------------------
// Dashboard summary: everything the UI draws, computed in one go
// ---------------------------------------------------------------------------

/// Owned aggregates for one filter pass.  Rebuilt from scratch on every
/// criteria change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSummary {
    /// Regions the counts are aligned with (the user's selection order).
    pub regions: Vec<Region>,
    pub counts: Vec<usize>,
    pub mean_elevation_ft: BTreeMap<Region, f64>,
    pub max_elevation_ft: BTreeMap<Region, f64>,
    pub breakdown: TypeBreakdown,
}

impl DashboardSummary {
    pub fn from_view(view: &FilteredView<'_>, regions: &[Region]) -> Self {
        let groups = elevations_by_region(view);
        DashboardSummary {
            regions: regions.to_vec(),
            counts: counts_by_region(view, regions),
            mean_elevation_ft: mean_by_region(&groups),
            max_elevation_ft: max_by_region(&groups),
            breakdown: type_breakdown(view),
        }
    }
}
