use std::path::PathBuf;

use clap::Parser;

/// Environment variable overriding the data file location.
pub const DATA_PATH_ENV: &str = "RUSTY_RUNWAY_DATA";
/// Environment variable overriding the top of the elevation slider.
pub const MAX_ELEVATION_ENV: &str = "RUSTY_RUNWAY_MAX_ELEVATION";

pub const DEFAULT_DATA_PATH: &str = "airports.csv";
pub const DEFAULT_ELEVATION_LIMIT_FT: f64 = 2500.0;

// ---------------------------------------------------------------------------
// Runtime settings
// ---------------------------------------------------------------------------

/// Resolved once at startup.  Command-line values win over the environment,
/// which wins over the defaults.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(
    name = "rusty-runway",
    version,
    about = "Explore New England airports by region, elevation, type and scheduled service"
)]
pub struct Settings {
    /// CSV file loaded on startup
    #[arg(env = DATA_PATH_ENV, default_value = DEFAULT_DATA_PATH)]
    pub data_path: PathBuf,

    /// Upper end of the elevation slider in feet; also its initial value
    #[arg(
        long = "max-elevation",
        env = MAX_ELEVATION_ENV,
        default_value_t = DEFAULT_ELEVATION_LIMIT_FT,
        value_parser = parse_elevation_limit
    )]
    pub elevation_limit_ft: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            elevation_limit_ft: DEFAULT_ELEVATION_LIMIT_FT,
        }
    }
}

/// Slider limit must be a positive, finite number of feet.
fn parse_elevation_limit(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("'{s}' must be greater than 0"))
    }
}
