use orchard_core::session::ModelStatus;

use crate::app::OrchardApp;

pub fn show(ctx: &egui::Context, app: &mut OrchardApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            let status = app.session.status();
            let color = match status {
                ModelStatus::Loading => egui::Color32::YELLOW,
                ModelStatus::Ready => egui::Color32::LIGHT_GREEN,
                ModelStatus::Failed(_) => egui::Color32::LIGHT_RED,
            };
            ui.colored_label(color, status.to_string());
            if let ModelStatus::Failed(reason) = status {
                ui.label(reason.as_str()).on_hover_text(reason.as_str());
            }

            if let Some(size) = app.preview.image_size {
                ui.separator();
                ui.label(format!("{}x{}", size[0], size[1]));
            }
            ui.separator();
            ui.label(format!("Model: {}", app.config.model.base_location));
        });

        ui.add_space(2.0);
    });
}
