use eframe::egui::{self, ScrollArea, Ui};
use rusty_runway::config::Settings;

use crate::state::AppState;
use crate::ui::{metrics, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct RustyRunwayApp {
    pub state: AppState,
}

impl RustyRunwayApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for RustyRunwayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        let state = &self.state;
        let view = state.view();

        // ---- Bottom panel: airport table ----
        egui::TopBottomPanel::bottom("airport_table")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| {
                metrics::airport_table(ui, &view);
            });

        // ---- Central panel: metrics and charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("New England Airports");
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| {
                    metrics::summary_metrics(ui, state);
                    ui.separator();
                    ui.columns(2, |columns| {
                        plot::region_count_chart(&mut columns[0], state);
                        plot::elevation_chart(&mut columns[1], state);
                    });
                    ui.separator();
                    plot::airport_map(ui, state, &view);
                });
        });
    }
}
