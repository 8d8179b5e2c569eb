//! Filtering and aggregation of New England airports.
//!
//! The library is UI-free: it loads the airport table, applies the side-panel
//! selections and derives the numbers the dashboard draws.  The desktop front
//! end lives in the `rusty-runway` binary.

pub mod config;
pub mod data;
pub mod error;

pub use data::aggregate::{DashboardSummary, RegionAggregate, TypeBreakdown};
pub use data::filter::{filter, FilterCriteria, FilteredView};
pub use data::loader::{load_file, load_or_empty, LoadOutcome};
pub use data::model::{AirportDataset, AirportRecord, AirportType, Region, ScheduledService};
pub use error::{LoadError, RecordError};
