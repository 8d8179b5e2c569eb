use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, Points};

use rusty_runway::data::filter::FilteredView;
use rusty_runway::data::model::{AirportRecord, Region};

use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

/// How close (in degrees) the cursor must be to an airport for the map
/// tooltip to name it.
const HOVER_RADIUS_DEG: f64 = 0.08;

// ---------------------------------------------------------------------------
// Axis labels
// ---------------------------------------------------------------------------

/// Region name for an integer bar position, empty between bars.
fn region_axis_label(regions: &[Region], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    regions
        .get(index as usize)
        .map(|r| r.name().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Airport count per region
// ---------------------------------------------------------------------------

/// One bar per selected region, in selection order.
pub fn region_count_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Airports in New England");

    let summary = &state.summary;
    let axis_regions = summary.regions.clone();
    Plot::new("region_counts")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label("Airports")
        .x_axis_formatter(move |mark, _range| region_axis_label(&axis_regions, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for (i, (region, count)) in summary.regions.iter().zip(&summary.counts).enumerate() {
                let color = state.colors.color_for(*region);
                let bar = Bar::new(i as f64, *count as f64)
                    .width(0.7)
                    .name(region.name())
                    .fill(color);
                plot_ui.bar_chart(BarChart::new(vec![bar]).name(region.name()).color(color));
            }
        });
}

// ---------------------------------------------------------------------------
// Mean / max elevation per region
// ---------------------------------------------------------------------------

/// Side-by-side mean and max elevation bars for every region that has any
/// elevation data in the current view.  Max bars are the paler shade.
pub fn elevation_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Average and highest airport elevation by state");

    let summary = &state.summary;
    let axis_regions: Vec<Region> = summary.mean_elevation_ft.keys().copied().collect();
    Plot::new("region_elevations")
        .legend(Legend::default())
        .height(CHART_HEIGHT)
        .y_axis_label("Elevation (ft)")
        .x_axis_formatter(move |mark, _range| region_axis_label(&axis_regions, mark.value))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            let means = bars(&summary.mean_elevation_ft, -0.2, |region| {
                let color = state.colors.color_for(region);
                (format!("{region} mean"), color)
            });
            let maxes = bars(&summary.max_elevation_ft, 0.2, |region| {
                let color = state.colors.color_for(region).gamma_multiply(0.5);
                (format!("{region} max"), color)
            });
            plot_ui.bar_chart(BarChart::new(means).name("Mean elevation"));
            plot_ui.bar_chart(BarChart::new(maxes).name("Max elevation"));
        });
}

fn bars(
    values: &BTreeMap<Region, f64>,
    offset: f64,
    style: impl Fn(Region) -> (String, Color32),
) -> Vec<Bar> {
    values
        .iter()
        .enumerate()
        .map(|(i, (region, value))| {
            let (name, color) = style(*region);
            Bar::new(i as f64 + offset, *value)
                .width(0.38)
                .name(name)
                .fill(color)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Map: airports as lon/lat points, coloured per region
// ---------------------------------------------------------------------------

/// What the map tooltip needs to know about one airport.
#[derive(Debug, Clone, PartialEq)]
struct MapAirport {
    lon: f64,
    lat: f64,
    label: String,
}

impl MapAirport {
    fn from_record(record: &AirportRecord) -> Self {
        MapAirport {
            lon: record.longitude_deg,
            lat: record.latitude_deg,
            label: format!(
                "Airport: {}\nCity: {}\nAirport ID: {}",
                record.name,
                record.municipality,
                record.ident.as_deref().unwrap_or("–")
            ),
        }
    }
}

/// Tooltip for the cursor at (`lon`, `lat`): the nearest airport within
/// [`HOVER_RADIUS_DEG`], otherwise just the coordinates.
fn hover_label(airports: &[MapAirport], lon: f64, lat: f64) -> String {
    let nearest = airports
        .iter()
        .map(|a| ((a.lon - lon).powi(2) + (a.lat - lat).powi(2), a))
        .min_by(|(d1, _), (d2, _)| d1.total_cmp(d2));
    match nearest {
        Some((dist_sq, airport)) if dist_sq <= HOVER_RADIUS_DEG * HOVER_RADIUS_DEG => {
            airport.label.clone()
        }
        _ => format!("{lat:.3}°, {lon:.3}°"),
    }
}

pub fn airport_map(ui: &mut Ui, state: &AppState, view: &FilteredView<'_>) {
    ui.strong("Airport locations");

    let mut by_region: BTreeMap<Region, Vec<[f64; 2]>> = BTreeMap::new();
    for record in view.iter() {
        by_region
            .entry(record.region)
            .or_default()
            .push([record.longitude_deg, record.latitude_deg]);
    }
    let airports: Vec<MapAirport> = view.iter().map(MapAirport::from_record).collect();

    Plot::new("airport_map")
        .legend(Legend::default())
        .height(CHART_HEIGHT * 1.6)
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .label_formatter(move |_name, point| hover_label(&airports, point.x, point.y))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (region, coords) in by_region {
                let points: PlotPoints = coords.into_iter().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(region.name())
                        .color(state.colors.color_for(region))
                        .radius(3.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusty_runway::data::model::{AirportType, ScheduledService};

    #[test]
    fn axis_labels_only_on_bar_positions() {
        let regions = [Region::Maine, Region::Vermont];
        assert_eq!(region_axis_label(&regions, 0.0), "Maine");
        assert_eq!(region_axis_label(&regions, 1.0), "Vermont");
        assert_eq!(region_axis_label(&regions, 0.5), "");
        assert_eq!(region_axis_label(&regions, 2.0), "");
        assert_eq!(region_axis_label(&regions, -1.0), "");
    }

    fn airport(name: &str, lon: f64, lat: f64) -> MapAirport {
        MapAirport::from_record(&AirportRecord {
            id: 1,
            ident: Some("KTST".to_string()),
            name: name.to_string(),
            airport_type: AirportType::SmallAirport,
            elevation_ft: Some(100.0),
            region: Region::Maine,
            scheduled_service: ScheduledService::No,
            latitude_deg: lat,
            longitude_deg: lon,
            municipality: "Testville".to_string(),
        })
    }

    #[test]
    fn hover_names_the_nearest_airport() {
        let airports = [airport("North", -70.0, 45.0), airport("South", -70.0, 43.0)];
        let label = hover_label(&airports, -70.01, 43.02);
        assert!(label.contains("South"));
        assert!(label.contains("Testville"));
        assert!(label.contains("KTST"));
    }

    #[test]
    fn hover_far_from_airports_shows_coordinates() {
        let airports = [airport("North", -70.0, 45.0)];
        assert_eq!(hover_label(&airports, -72.0, 44.0), "44.000°, -72.000°");
        assert_eq!(hover_label(&[], -72.0, 44.0), "44.000°, -72.000°");
    }
}
