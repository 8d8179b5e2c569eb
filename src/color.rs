use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use rusty_runway::data::model::{Region, REGION_TABLE};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.5);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Region colours
// ---------------------------------------------------------------------------

/// One fixed colour per state, so a state keeps its colour across charts
/// and across filter changes.
#[derive(Debug, Clone)]
pub struct RegionColors {
    mapping: BTreeMap<Region, Color32>,
}

impl RegionColors {
    pub fn new() -> Self {
        let palette = generate_palette(REGION_TABLE.len());
        let mapping = REGION_TABLE
            .iter()
            .zip(palette)
            .map(|((_, region), color)| (*region, color))
            .collect();
        RegionColors { mapping }
    }

    pub fn color_for(&self, region: Region) -> Color32 {
        self.mapping.get(&region).copied().unwrap_or(Color32::GRAY)
    }
}

impl Default for RegionColors {
    fn default() -> Self {
        Self::new()
    }
}
