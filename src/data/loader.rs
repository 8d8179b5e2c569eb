use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;

use super::model::{AirportDataset, AirportRecord, AirportType, Region, ScheduledService};
use crate::error::{LoadError, RecordError};

/// Header columns the loader cannot do without.
pub const REQUIRED_COLUMNS: [&str; 9] = [
    "id",
    "name",
    "type",
    "elevation_ft",
    "iso_region",
    "scheduled_service",
    "latitude_deg",
    "longitude_deg",
    "municipality",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Result of a load that never fails: either the parsed dataset, or an
/// empty one together with the reason loading did not work.
#[derive(Debug)]
pub struct LoadOutcome {
    pub dataset: AirportDataset,
    pub warning: Option<LoadError>,
}

/// Load the airport CSV at `path`, recovering from any load failure by
/// returning an empty dataset.
pub fn load_or_empty(path: &Path) -> LoadOutcome {
    match load_file(path) {
        Ok(dataset) => LoadOutcome {
            dataset,
            warning: None,
        },
        Err(e) => {
            log::warn!("Falling back to an empty dataset: {e}");
            LoadOutcome {
                dataset: AirportDataset::default(),
                warning: Some(e),
            }
        }
    }
}

/// Load the airport CSV at `path`.
pub fn load_file(path: &Path) -> Result<AirportDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_from_reader(file)?;
    log::info!(
        "Loaded {} airports from {} ({} malformed rows skipped)",
        dataset.len(),
        path.display(),
        dataset.skipped_rows()
    );
    Ok(dataset)
}

/// Load from any CSV byte stream.
///
/// Rows are kept when their region is one of the six New England codes and
/// their type is small/medium/large; everything else is dropped silently.
/// Kept rows that fail validation are logged and skipped.
pub fn load_from_reader<R: Read>(reader: R) -> Result<AirportDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);
    let headers = reader.headers()?.clone();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn { column });
        }
    }

    let mut records = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut skipped = 0usize;
    let mut excluded = 0usize;

    for result in reader.records() {
        let row = match result {
            Ok(row) => row,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                log::warn!("{}", RecordError::malformed(line, e.to_string()));
                skipped += 1;
                continue;
            }
        };
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        match parse_row(&row, &headers, line) {
            Ok(Some(record)) => {
                if !seen_ids.insert(record.id) {
                    log::warn!(
                        "{}",
                        RecordError::malformed(line, format!("duplicate id {}", record.id))
                    );
                    skipped += 1;
                    continue;
                }
                records.push(record);
            }
            Ok(None) => excluded += 1,
            Err(e) => {
                log::warn!("{e}");
                skipped += 1;
            }
        }
    }

    log::debug!("{excluded} rows outside the region/type allow-lists");
    Ok(AirportDataset::from_records(records).with_skipped_rows(skipped))
}

// ---------------------------------------------------------------------------
// Row parsing
// ---------------------------------------------------------------------------

/// Untyped view of one CSV row; only the columns we use.
#[derive(Debug, Deserialize)]
struct RawRow {
    id: String,
    #[serde(default)]
    ident: Option<String>,
    name: String,
    #[serde(rename = "type")]
    airport_type: String,
    elevation_ft: Option<String>,
    iso_region: String,
    scheduled_service: Option<String>,
    latitude_deg: String,
    longitude_deg: String,
    municipality: Option<String>,
}

/// `Ok(None)` means the row is outside the allow-lists, which is not an error.
fn parse_row(
    row: &StringRecord,
    headers: &StringRecord,
    line: u64,
) -> Result<Option<AirportRecord>, RecordError> {
    let raw: RawRow = row
        .deserialize(Some(headers))
        .map_err(|e| RecordError::malformed(line, e.to_string()))?;

    let Some(region) = Region::from_code(raw.iso_region.trim()) else {
        return Ok(None);
    };
    let Some(airport_type) = AirportType::from_code(raw.airport_type.trim()) else {
        return Ok(None);
    };

    let id = raw
        .id
        .trim()
        .parse::<u64>()
        .map_err(|_| RecordError::malformed(line, format!("id '{}' is not an integer", raw.id)))?;

    let scheduled_text = raw.scheduled_service.unwrap_or_default();
    let scheduled_service = ScheduledService::from_code(scheduled_text.trim()).ok_or_else(|| {
        RecordError::malformed(
            line,
            format!("scheduled_service '{scheduled_text}' is not yes/no"),
        )
    })?;

    let latitude_deg = parse_coordinate(&raw.latitude_deg, "latitude_deg", line)?;
    let longitude_deg = parse_coordinate(&raw.longitude_deg, "longitude_deg", line)?;

    Ok(Some(AirportRecord {
        id,
        ident: raw.ident.filter(|s| !s.trim().is_empty()),
        name: raw.name,
        airport_type,
        elevation_ft: parse_elevation(raw.elevation_ft.as_deref()),
        region,
        scheduled_service,
        latitude_deg,
        longitude_deg,
        municipality: raw.municipality.unwrap_or_default(),
    }))
}

fn parse_coordinate(s: &str, column: &str, line: u64) -> Result<f64, RecordError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RecordError::malformed(line, format!("{column} '{s}' is not a number")))
}

/// Elevation ≤ 0 is not a plausible airport elevation and counts as missing,
/// as do blank and unparseable cells.
pub fn parse_elevation(s: Option<&str>) -> Option<f64> {
    s?.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
