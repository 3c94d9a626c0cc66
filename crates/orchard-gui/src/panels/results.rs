use orchard_core::session::ResultRow;

use super::section_header;
use crate::app::OrchardApp;

const PANEL_WIDTH: f32 = 300.0;
const ACTIVE_FILL: egui::Color32 = egui::Color32::from_rgb(76, 175, 80);

pub fn show(ctx: &egui::Context, app: &mut OrchardApp) {
    egui::SidePanel::right("results")
        .default_width(PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(PANEL_WIDTH - 20.0);

                detect_section(ui, app);
                ui.separator();
                rows_section(ui, app);
                ui.separator();
                summary_section(ui, app);
            });
        });
}

fn detect_section(ui: &mut egui::Ui, app: &mut OrchardApp) {
    section_header(ui, "Detect", None);
    ui.add_space(4.0);

    let button = egui::Button::new("Detect Fruit").min_size(egui::vec2(ui.available_width(), 28.0));
    if ui.add_enabled(app.session.detect_enabled(), button).clicked() {
        app.detect();
    }

    ui.add_space(4.0);
    match app.session.busy() {
        Some(busy) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(busy.to_string());
            });
        }
        None => {
            // Same height as the busy line to keep the layout still.
            ui.label("");
        }
    }
}

fn rows_section(ui: &mut egui::Ui, app: &OrchardApp) {
    let status = app
        .session
        .uses_fallback_labels()
        .then_some("fallback labels");
    section_header(ui, "Confidence", status);
    ui.add_space(4.0);

    if app.session.rows().is_empty() {
        ui.weak("Waiting for the model...");
        return;
    }

    egui::Grid::new("result_rows")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            for row in app.session.rows() {
                result_row(ui, row);
                ui.end_row();
            }
        });
}

fn result_row(ui: &mut egui::Ui, row: &ResultRow) {
    let label = egui::RichText::new(row.label.as_str());
    if row.is_active() {
        ui.label(label.strong().color(ACTIVE_FILL));
    } else {
        ui.label(label);
    }

    let mut bar = egui::ProgressBar::new(row.fill_fraction())
        .desired_width(ui.available_width())
        .text(row.percent_text());
    if row.is_active() {
        bar = bar.fill(ACTIVE_FILL);
    }
    ui.add(bar);
}

fn summary_section(ui: &mut egui::Ui, app: &OrchardApp) {
    section_header(ui, "Final Result", None);
    ui.add_space(4.0);

    let summary = app.session.summary();
    ui.vertical_centered(|ui| {
        ui.heading(summary.label.as_str());
        ui.label(summary.caption.as_str());
    });
}
