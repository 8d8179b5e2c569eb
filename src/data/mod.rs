/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   airports.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse + allow-list + sort → AirportDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ AirportDataset │  immutable Vec<AirportRecord>
///   └────────────────┘
///        │            ╲
///        ▼             ▼
///   ┌──────────┐   ┌──────────┐
///   │  filter  │   │  domain  │  distinct regions / types
///   └──────────┘   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  counts, mean/max elevation, type breakdown
///   └───────────┘
/// ```

pub mod aggregate;
pub mod domain;
pub mod filter;
pub mod loader;
pub mod model;
