use std::cmp::Ordering;
use std::fmt;

// ---------------------------------------------------------------------------
// Region – one of the six New England states
// ---------------------------------------------------------------------------

/// A New England state.  Variants are declared in display-name order so the
/// derived `Ord` sorts regions the same way their names sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Connecticut,
    Maine,
    Massachusetts,
    NewHampshire,
    RhodeIsland,
    Vermont,
}

/// ISO region code → region, in the order the states are usually listed.
pub const REGION_TABLE: [(&str, Region); 6] = [
    ("US-MA", Region::Massachusetts),
    ("US-CT", Region::Connecticut),
    ("US-RI", Region::RhodeIsland),
    ("US-NH", Region::NewHampshire),
    ("US-VT", Region::Vermont),
    ("US-ME", Region::Maine),
];

impl Region {
    /// Look up an ISO region code such as `US-MA`.
    pub fn from_code(code: &str) -> Option<Region> {
        REGION_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, region)| *region)
    }

    /// Look up a display name such as `Rhode Island`.
    pub fn from_name(name: &str) -> Option<Region> {
        REGION_TABLE
            .iter()
            .map(|(_, region)| *region)
            .find(|region| region.name() == name)
    }

    /// Accept either spelling, code first.
    pub fn parse(s: &str) -> Option<Region> {
        Region::from_code(s).or_else(|| Region::from_name(s))
    }

    pub fn code(self) -> &'static str {
        match self {
            Region::Connecticut => "US-CT",
            Region::Maine => "US-ME",
            Region::Massachusetts => "US-MA",
            Region::NewHampshire => "US-NH",
            Region::RhodeIsland => "US-RI",
            Region::Vermont => "US-VT",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::Connecticut => "Connecticut",
            Region::Maine => "Maine",
            Region::Massachusetts => "Massachusetts",
            Region::NewHampshire => "New Hampshire",
            Region::RhodeIsland => "Rhode Island",
            Region::Vermont => "Vermont",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// AirportType
// ---------------------------------------------------------------------------

/// The three airport categories kept by the loader.  Heliports, seaplane
/// bases, balloonports and closed fields never make it past loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AirportType {
    SmallAirport,
    MediumAirport,
    LargeAirport,
}

pub const AIRPORT_TYPES: [AirportType; 3] = [
    AirportType::SmallAirport,
    AirportType::MediumAirport,
    AirportType::LargeAirport,
];

impl AirportType {
    pub fn from_code(code: &str) -> Option<AirportType> {
        AIRPORT_TYPES.iter().copied().find(|t| t.code() == code)
    }

    pub fn code(self) -> &'static str {
        match self {
            AirportType::SmallAirport => "small_airport",
            AirportType::MediumAirport => "medium_airport",
            AirportType::LargeAirport => "large_airport",
        }
    }

    /// Human-readable label for selection controls.
    pub fn label(self) -> &'static str {
        match self {
            AirportType::SmallAirport => "Small",
            AirportType::MediumAirport => "Medium",
            AirportType::LargeAirport => "Large",
        }
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// ScheduledService – the "yes"/"no" column
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScheduledService {
    Yes,
    No,
}

impl ScheduledService {
    pub fn from_code(code: &str) -> Option<ScheduledService> {
        match code {
            "yes" => Some(ScheduledService::Yes),
            "no" => Some(ScheduledService::No),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ScheduledService::Yes => "yes",
            ScheduledService::No => "no",
        }
    }
}

impl fmt::Display for ScheduledService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// AirportRecord – one validated row
// ---------------------------------------------------------------------------

/// A single airport that survived loading.
#[derive(Debug, Clone, PartialEq)]
pub struct AirportRecord {
    pub id: u64,
    /// Short identifier (ICAO/FAA code), shown in tooltips when present.
    pub ident: Option<String>,
    pub name: String,
    pub airport_type: AirportType,
    /// Feet above sea level.  `None` when absent, unparseable or ≤ 0.
    pub elevation_ft: Option<f64>,
    pub region: Region,
    pub scheduled_service: ScheduledService,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub municipality: String,
}

/// Ascending elevation, missing elevations last.
pub fn compare_elevation(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

// ---------------------------------------------------------------------------
// AirportDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The canonical, read-only dataset.  Records are sorted by elevation
/// (ascending, missing last, ties in source order) and never mutated after
/// construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AirportDataset {
    records: Vec<AirportRecord>,
    skipped_rows: usize,
}

impl AirportDataset {
    /// Build a dataset from already-validated records.
    pub fn from_records(mut records: Vec<AirportRecord>) -> Self {
        records.sort_by(|a, b| compare_elevation(a.elevation_ft, b.elevation_ft));
        AirportDataset {
            records,
            skipped_rows: 0,
        }
    }

    pub(crate) fn with_skipped_rows(mut self, skipped_rows: usize) -> Self {
        self.skipped_rows = skipped_rows;
        self
    }

    pub fn records(&self) -> &[AirportRecord] {
        &self.records
    }

    /// Rows dropped as malformed during loading.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_table_round_trips_codes_and_names() {
        for (code, region) in REGION_TABLE {
            assert_eq!(Region::from_code(code), Some(region));
            assert_eq!(region.code(), code);
            assert_eq!(Region::from_name(region.name()), Some(region));
        }
        assert_eq!(Region::from_code("US-NY"), None);
        assert_eq!(Region::parse("Rhode Island"), Some(Region::RhodeIsland));
        assert_eq!(Region::parse("US-ME"), Some(Region::Maine));
    }

    #[test]
    fn region_order_follows_display_names() {
        let mut regions: Vec<Region> = REGION_TABLE.iter().map(|(_, r)| *r).collect();
        regions.sort();
        let names: Vec<&str> = regions.iter().map(|r| r.name()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn airport_type_codes() {
        assert_eq!(AirportType::from_code("medium_airport"), Some(AirportType::MediumAirport));
        assert_eq!(AirportType::from_code("heliport"), None);
        assert_eq!(AirportType::LargeAirport.to_string(), "large_airport");
    }

    #[test]
    fn missing_elevation_sorts_last() {
        assert_eq!(compare_elevation(Some(5.0), None), Ordering::Less);
        assert_eq!(compare_elevation(None, Some(-5.0)), Ordering::Greater);
        assert_eq!(compare_elevation(None, None), Ordering::Equal);
        assert_eq!(compare_elevation(Some(1.0), Some(2.0)), Ordering::Less);
    }

    #[test]
    fn code_tables_are_the_single_source_of_spellings() {
        for airport_type in AIRPORT_TYPES {
            assert_eq!(AirportType::from_code(airport_type.code()), Some(airport_type));
        }
        for flag in [ScheduledService::Yes, ScheduledService::No] {
            assert_eq!(ScheduledService::from_code(flag.code()), Some(flag));
            assert_eq!(flag.to_string(), flag.code());
        }
        assert_eq!(ScheduledService::from_code("Yes"), None);
        assert_eq!(Region::Vermont.to_string(), "Vermont");
    }
}
