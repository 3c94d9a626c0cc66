use crate::app::OrchardApp;
use crate::messages::WorkerCommand;

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp", "tif", "tiff"];

pub fn show(ctx: &egui::Context, app: &mut OrchardApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let debug_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::D);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open = egui::Button::new("Open Image...")
                    .shortcut_text(ctx.format_shortcut(&open_shortcut));
                if ui.add_enabled(app.session.accepts_input(), open).clicked() {
                    ui.close();
                    open_file(app);
                }

                ui.separator();

                let quit = egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut));
                if ui.add(quit).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Debug", |ui| {
                let raw = egui::Button::new("Log Raw Predictions")
                    .shortcut_text(ctx.format_shortcut(&debug_shortcut));
                if ui.add(raw).clicked() {
                    ui.close();
                    app.debug_predictions();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            open_file(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&debug_shortcut)) {
            app.debug_predictions();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Native file chooser on a short-lived thread. The chosen path goes straight
/// to the worker.
pub(crate) fn open_file(app: &mut OrchardApp) {
    if !app.session.accepts_input() {
        return;
    }
    let cmd_tx = app.cmd_tx.clone();
    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file()
        {
            let _ = cmd_tx.send(WorkerCommand::OpenPath { path });
        }
    });
}
