use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use rusty_runway::data::filter::FilteredView;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

pub fn summary_metrics(ui: &mut Ui, state: &AppState) {
    let breakdown = state.summary.breakdown;
    ui.horizontal(|ui: &mut Ui| {
        metric(ui, "Total airports displayed", breakdown.total);
        metric(ui, "Large airports", breakdown.large);
        metric(ui, "Medium airports", breakdown.medium);
        metric(ui, "Small airports", breakdown.small);
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(label);
            ui.label(RichText::new(value.to_string()).size(24.0).strong());
        });
    });
}

// ---------------------------------------------------------------------------
// Airport table
// ---------------------------------------------------------------------------

/// The filtered airports, lowest first.
pub fn airport_table(ui: &mut Ui, view: &FilteredView<'_>) {
    let records = view.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::auto().at_least(60.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(120.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(70.0))
        .header(20.0, |mut header| {
            for title in ["Ident", "Name", "City", "State", "Elevation"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, records.len(), |mut row| {
                let record = records[row.index()];
                row.col(|ui: &mut Ui| {
                    ui.label(record.ident.as_deref().unwrap_or("–"));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.name.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.municipality.as_str());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(record.region.name());
                });
                row.col(|ui: &mut Ui| {
                    let text = record
                        .elevation_ft
                        .map(|e| format!("{e:.0} ft"))
                        .unwrap_or_else(|| "–".to_string());
                    ui.label(text);
                });
            });
        });
}
