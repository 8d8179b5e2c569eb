use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.label("Select your options to display data.");
    ui.separator();

    if state.dataset.is_empty() {
        ui.label("No airports loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the closures.
    let regions = state.region_options.clone();
    let types = state.type_options.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Regions ----
            let header_text = format!(
                "Regions  ({}/{})",
                state.criteria.regions.len(),
                regions.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("regions")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_regions();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_regions();
                        }
                    });

                    for region in &regions {
                        let mut checked = state.criteria.regions.contains(region);
                        let text = RichText::new(region.name()).color(state.colors.color_for(*region));
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_region(*region);
                        }
                    }
                });
            ui.separator();

            // ---- Elevation ----
            ui.strong("Maximum elevation");
            let limit = state.settings.elevation_limit_ft;
            let slider = egui::Slider::new(&mut state.criteria.max_elevation_ft, 0.0..=limit)
                .suffix(" ft")
                .step_by(10.0);
            if ui.add(slider).changed() {
                state.refilter();
            }
            ui.separator();

            // ---- Airport types ----
            let header_text = format!(
                "Airport types  ({}/{})",
                state.criteria.types.len(),
                types.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("types")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_types();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_types();
                        }
                    });

                    for airport_type in &types {
                        let mut checked = state.criteria.types.contains(airport_type);
                        if ui.checkbox(&mut checked, airport_type.label()).changed() {
                            state.toggle_type(*airport_type);
                        }
                    }
                });
            ui.separator();

            // ---- Scheduled service ----
            if ui
                .checkbox(&mut state.commercial_only, "Only show commercial airports")
                .changed()
            {
                state.refilter();
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                let path = state.data_path.clone();
                state.load(&path);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} airports loaded, {} displayed",
            state.dataset.len(),
            state.summary.breakdown.total
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open airport data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        log::info!("Opening {}", path.display());
        state.load(&path);
    }
}
