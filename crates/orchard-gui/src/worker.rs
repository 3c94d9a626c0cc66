use std::sync::mpsc;

use orchard_core::config::ModelConfig;
use orchard_core::input::SelectedFile;
use orchard_core::model::{ModelLoader, TractLoader};
use orchard_core::session::log_raw_predictions;

use crate::convert::image_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the background worker. Commands run one at a time, in the order
/// they were sent.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> std::io::Result<mpsc::Sender<WorkerCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::Builder::new()
        .name("orchard-worker".into())
        .spawn(move || {
            worker_loop(cmd_rx, result_tx, ctx);
        })?;

    Ok(cmd_tx)
}

fn send(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, result: WorkerResult) {
    let _ = tx.send(result);
    ctx.request_repaint();
}

fn send_log(tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context, msg: impl Into<String>) {
    send(tx, ctx, WorkerResult::Log { message: msg.into() });
}

fn worker_loop(
    cmd_rx: mpsc::Receiver<WorkerCommand>,
    tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::LoadModel { config } => {
                handle_load_model(&config, &tx, &ctx);
            }
            WorkerCommand::OpenPath { path } => match SelectedFile::from_path(&path) {
                Ok(file) => handle_decode(&file, &tx, &ctx),
                Err(error) => send(&tx, &ctx, WorkerResult::InputRejected { error }),
            },
            WorkerCommand::DecodePreview { file } => {
                handle_decode(&file, &tx, &ctx);
            }
            WorkerCommand::Detect { request } => {
                let result = request.run();
                send(
                    &tx,
                    &ctx,
                    WorkerResult::DetectionFinished {
                        generation: request.generation,
                        result,
                    },
                );
            }
            WorkerCommand::DebugPredictions { request } => {
                let result = request.run();
                log_raw_predictions(&result);
                send(&tx, &ctx, WorkerResult::RawPredictions { result });
            }
        }
    }
    tracing::debug!("Worker channel closed, exiting");
}

fn handle_load_model(config: &ModelConfig, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    let source = config.source();
    send_log(tx, ctx, format!("Loading model from {}", source.model));

    match TractLoader::new(config.clone()).load(&source) {
        Ok(model) => send(tx, ctx, WorkerResult::ModelLoaded { model }),
        Err(error) => send(tx, ctx, WorkerResult::ModelFailed { error }),
    }
}

fn handle_decode(file: &SelectedFile, tx: &mpsc::Sender<WorkerResult>, ctx: &egui::Context) {
    match file.decode() {
        Ok(preview) => {
            let image = image_to_color_image(&preview.image);
            send(tx, ctx, WorkerResult::PreviewDecoded { preview, image });
        }
        Err(error) => send(tx, ctx, WorkerResult::InputRejected { error }),
    }
}
