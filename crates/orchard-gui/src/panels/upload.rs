use crate::app::OrchardApp;
use crate::panels::menu_bar::open_file;

const DROP_ZONE_HEIGHT: f32 = 120.0;

pub fn show(ctx: &egui::Context, app: &mut OrchardApp) {
    handle_file_drop(ctx, app);

    egui::CentralPanel::default().show(ctx, |ui| {
        drop_zone(ui, app);
        ui.add_space(8.0);
        preview(ui, app);
    });
}

/// Drag highlight and dropped files. Nothing is tracked until the result
/// rows exist.
fn handle_file_drop(ctx: &egui::Context, app: &mut OrchardApp) {
    if !app.session.accepts_input() {
        app.ui_state.drop_zone.leave();
        return;
    }

    let (hovering, dropped) = ctx.input(|i| {
        (
            !i.raw.hovered_files.is_empty(),
            i.raw.dropped_files.clone(),
        )
    });
    app.ui_state.drop_zone.track_hover(hovering);

    if let Some(file) = dropped.into_iter().next() {
        app.ui_state.drop_zone.dropped();
        app.accept_dropped(file);
    }
}

fn drop_zone(ui: &mut egui::Ui, app: &mut OrchardApp) {
    let enabled = app.session.accepts_input();
    let visuals = ui.visuals();
    let stroke = if app.ui_state.drop_zone.is_drag_over() {
        egui::Stroke::new(2.0, visuals.selection.stroke.color)
    } else {
        egui::Stroke::new(1.0, visuals.widgets.noninteractive.bg_stroke.color)
    };
    let fill = if app.ui_state.drop_zone.is_drag_over() {
        visuals.selection.bg_fill.gamma_multiply(0.3)
    } else {
        visuals.extreme_bg_color
    };

    let frame = egui::Frame::new()
        .stroke(stroke)
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12));

    let response = frame
        .show(ui, |ui| {
            ui.set_min_size(egui::vec2(ui.available_width(), DROP_ZONE_HEIGHT));
            ui.vertical_centered(|ui| {
                ui.add_space(DROP_ZONE_HEIGHT / 3.0);
                if enabled {
                    ui.label("Drop an image here or click to browse");
                } else {
                    ui.weak("Waiting for the model...");
                }
            });
        })
        .response;

    let response = response.interact(egui::Sense::click());
    if enabled {
        let response = response.on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            open_file(app);
        }
    }
}

fn preview(ui: &mut egui::Ui, app: &OrchardApp) {
    let Some(texture) = app.preview.texture.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.weak("No image selected");
        });
        return;
    };

    if let Some(name) = app.session.preview().map(|p| p.name.as_str()) {
        ui.label(name);
    }
    ui.centered_and_justified(|ui| {
        ui.add(
            egui::Image::new(texture)
                .max_size(ui.available_size())
                .maintain_aspect_ratio(true),
        );
    });
}
