use crate::app::OrchardApp;

/// Blocking error notification. Stays up until dismissed.
pub fn show(ctx: &egui::Context, app: &mut OrchardApp) {
    let Some(message) = app.ui_state.notification.clone() else {
        return;
    };

    let mut dismissed = false;
    let response = egui::Modal::new(egui::Id::new("notification")).show(ctx, |ui| {
        ui.set_width(320.0);
        ui.heading("Fruit Detection");
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.button("OK").clicked() {
                dismissed = true;
            }
        });
    });

    if dismissed || response.should_close() {
        app.ui_state.notification = None;
    }
}
