use std::path::PathBuf;
use std::sync::mpsc;

use orchard_core::config::OrchardConfig;
use orchard_core::consts::{DETECTION_FAILED_NOTICE, MODEL_LOAD_FAILED_NOTICE, NOT_AN_IMAGE_NOTICE};
use orchard_core::error::InputError;
use orchard_core::input::SelectedFile;
use orchard_core::session::Session;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::state::{PreviewState, UIState};
use crate::worker;

pub struct OrchardApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub session: Session,
    pub config: OrchardConfig,
    pub ui_state: UIState,
    pub preview: PreviewState,
}

impl OrchardApp {
    /// Spawn the worker and start loading the model right away.
    pub fn new(ctx: &egui::Context, config: OrchardConfig) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone())?;

        let app = Self {
            cmd_tx,
            result_rx,
            session: Session::new(),
            config,
            ui_state: UIState::default(),
            preview: PreviewState::default(),
        };
        app.send_command(WorkerCommand::LoadModel {
            config: app.config.model.clone(),
        });
        Ok(app)
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ModelLoaded { model } => {
                    let ready = self.session.install_model(model);
                    self.ui_state.add_log(format!(
                        "{} ({} classes)",
                        self.session.status(),
                        ready.labels.len()
                    ));
                    if ready.fallback {
                        self.ui_state
                            .add_log("Model has no labels, using the built-in fruit list".into());
                    }
                }
                WorkerResult::ModelFailed { error } => {
                    self.session.fail_model(&error);
                    self.ui_state.add_log(format!("ERROR: {error}"));
                    self.ui_state.notify(MODEL_LOAD_FAILED_NOTICE);
                }
                WorkerResult::PreviewDecoded { preview, image } => {
                    let image_size = [preview.width(), preview.height()];
                    let name = preview.name.clone();
                    if let Err(e) = self.session.show_preview(preview) {
                        self.reject_input(&e);
                        continue;
                    }
                    self.preview.texture =
                        Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
                    self.preview.image_size = Some(image_size);
                    self.ui_state.add_log(format!(
                        "Opened: {name} ({}x{})",
                        image_size[0], image_size[1]
                    ));
                }
                WorkerResult::InputRejected { error } => {
                    self.reject_input(&error);
                }
                WorkerResult::DetectionFinished { generation, result } => {
                    match self.session.finish_detection(generation, result) {
                        Ok(Some(outcome)) => {
                            self.ui_state.add_log(format!("Detected: {}", outcome.label));
                        }
                        Ok(None) => {
                            self.ui_state
                                .add_log("Discarded a result for a replaced image".into());
                        }
                        Err(e) => {
                            self.ui_state.add_log(format!("ERROR: {e}"));
                            self.ui_state.notify(DETECTION_FAILED_NOTICE);
                        }
                    }
                }
                WorkerResult::RawPredictions { result } => match result {
                    Ok(predictions) => {
                        for (i, p) in predictions.iter().enumerate() {
                            self.ui_state
                                .add_log(format!("[{i}] {}: {:.6}", p.label, p.probability));
                        }
                    }
                    Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                },
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    fn reject_input(&mut self, error: &InputError) {
        tracing::warn!("Rejected input: {error}");
        self.ui_state.add_log(format!("ERROR: {error}"));
        match error {
            InputError::NotAnImage { .. } => self.ui_state.notify(NOT_AN_IMAGE_NOTICE),
            _ => self.ui_state.notify(error.to_string()),
        }
    }

    /// Queue a file from the dialog or a path-only drop.
    pub fn open_path(&mut self, path: PathBuf) {
        if !self.session.accepts_input() {
            tracing::debug!("Ignoring {} before the model is ready", path.display());
            return;
        }
        self.send_command(WorkerCommand::OpenPath { path });
    }

    /// Validate an in-memory file here, decode it on the worker.
    pub fn submit_file(&mut self, file: SelectedFile) {
        if !self.session.accepts_input() {
            tracing::debug!("Ignoring {} before the model is ready", file.name);
            return;
        }
        match file.validate() {
            Ok(()) => self.send_command(WorkerCommand::DecodePreview { file }),
            Err(e) => self.reject_input(&e),
        }
    }

    pub fn accept_dropped(&mut self, file: egui::DroppedFile) {
        let egui::DroppedFile {
            path,
            name,
            mime,
            bytes,
            ..
        } = file;

        match (bytes, path) {
            (Some(bytes), path) => {
                let name = if name.is_empty() {
                    path.as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "dropped file".to_string())
                } else {
                    name
                };
                self.submit_file(SelectedFile::new(name, &mime, bytes));
            }
            (None, Some(path)) => self.open_path(path),
            (None, None) => tracing::warn!("Dropped file has neither bytes nor path"),
        }
    }

    /// Start a detection on the worker if one is allowed right now.
    pub fn detect(&mut self) {
        if let Some(request) = self.session.begin_detection() {
            self.send_command(WorkerCommand::Detect { request });
        }
    }

    pub fn debug_predictions(&mut self) {
        match self.session.debug_request() {
            Some(request) => self.send_command(WorkerCommand::DebugPredictions { request }),
            None => self
                .ui_state
                .add_log("Nothing to analyze: load a model and an image first".into()),
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for OrchardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::results::show(ctx, self);
        panels::upload::show(ctx, self);
        panels::notification::show(ctx, self);

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Orchard")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Orchard");
                        ui.label("Fruit Detection");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
