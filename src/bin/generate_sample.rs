use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

/// Write a deterministic synthetic airports.csv
#[derive(Debug, Parser)]
#[command(name = "generate_sample", version)]
struct Args {
    /// Output CSV file
    #[arg(default_value = "airports.csv")]
    output: PathBuf,

    /// Number of rows to write
    #[arg(long, default_value_t = 600)]
    count: u64,

    /// PRNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

/// Column layout of the public airports table (subset).
#[derive(Serialize)]
struct Row<'a> {
    id: String,
    ident: String,
    #[serde(rename = "type")]
    airport_type: &'a str,
    name: String,
    latitude_deg: String,
    longitude_deg: String,
    elevation_ft: String,
    iso_region: &'a str,
    municipality: &'a str,
    scheduled_service: &'a str,
}

/// Region code, sample towns, rough centre (lat, lon) and elevation scale in feet.
const REGIONS: [(&str, [&str; 3], (f64, f64), f64); 7] = [
    ("US-MA", ["Boston", "Worcester", "Pittsfield"], (42.3, -71.8), 900.0),
    ("US-CT", ["Hartford", "New Haven", "Danbury"], (41.6, -72.7), 700.0),
    ("US-RI", ["Providence", "Westerly", "Newport"], (41.7, -71.5), 300.0),
    ("US-NH", ["Manchester", "Concord", "Berlin"], (43.5, -71.5), 1600.0),
    ("US-VT", ["Burlington", "Rutland", "Montpelier"], (44.1, -72.7), 1400.0),
    ("US-ME", ["Portland", "Bangor", "Presque Isle"], (45.0, -69.2), 800.0),
    // Outside New England; dropped by the loader.
    ("US-NY", ["Albany", "Plattsburgh", "Utica"], (43.0, -74.5), 1000.0),
];

const TYPES: [(&str, f64); 5] = [
    ("small_airport", 0.70),
    ("medium_airport", 0.10),
    ("large_airport", 0.03),
    ("heliport", 0.12),
    ("seaplane_base", 0.05),
];

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng(u64);

impl SimpleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }

    fn weighted<'a>(&mut self, items: &'a [(&'a str, f64)]) -> &'a str {
        let total: f64 = items.iter().map(|(_, w)| w).sum();
        let mut roll = self.next_f64() * total;
        for (item, weight) in items {
            if roll < *weight {
                return item;
            }
            roll -= weight;
        }
        items[items.len() - 1].0
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let output_path = args.output;
    let count = args.count;

    let mut rng = SimpleRng(args.seed);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    for id in 1..=count {
        let (code, towns, (lat, lon), scale) = rng.pick(&REGIONS);
        let airport_type = rng.weighted(&TYPES);
        let town = rng.pick(towns);

        // Mostly plausible elevations, with some blank / zero / negative cells.
        let elevation = match rng.next_u64() % 40 {
            0 => String::new(),
            1 => "0".to_string(),
            2 => format!("-{}", rng.next_u64() % 20),
            _ => format!("{:.0}", 5.0 + rng.next_f64() * scale),
        };

        let scheduled = match airport_type {
            "large_airport" => "yes",
            "medium_airport" if rng.next_f64() < 0.6 => "yes",
            _ if rng.next_f64() < 0.02 => "yes",
            _ => "no",
        };

        // A handful of rows with unusable coordinates.
        let latitude = if id % 97 == 0 {
            "unknown".to_string()
        } else {
            format!("{:.4}", lat + (rng.next_f64() - 0.5) * 1.6)
        };

        writer.serialize(Row {
            id: id.to_string(),
            ident: format!("{}{:02}", &code[3..], id % 100),
            airport_type,
            name: format!("{town} {} {id}", label_for(airport_type)),
            latitude_deg: latitude,
            longitude_deg: format!("{:.4}", lon + (rng.next_f64() - 0.5) * 1.6),
            elevation_ft: elevation,
            iso_region: code,
            municipality: town,
            scheduled_service: scheduled,
        })?;
    }

    writer.flush().context("flushing CSV writer")?;
    println!("Wrote {count} airports to {}", output_path.display());
    Ok(())
}

fn label_for(airport_type: &str) -> &'static str {
    match airport_type {
        "large_airport" => "International",
        "medium_airport" => "Regional",
        "heliport" => "Heliport",
        "seaplane_base" => "Seaplane Base",
        _ => "Airfield",
    }
}
