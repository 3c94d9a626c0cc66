use std::path::PathBuf;
use std::sync::Arc;

use orchard_core::config::ModelConfig;
use orchard_core::error::{DetectError, InputError, ModelLoadError};
use orchard_core::input::{PreviewImage, SelectedFile};
use orchard_core::model::ImageClassifier;
use orchard_core::prediction::Prediction;
use orchard_core::session::DetectRequest;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Fetch and build the classifier.
    LoadModel { config: ModelConfig },

    /// Read a file from disk, then validate and decode it.
    OpenPath { path: PathBuf },

    /// Decode an already validated in-memory file.
    DecodePreview { file: SelectedFile },

    /// Run the model for the Detect action.
    Detect { request: DetectRequest },

    /// Run the model and only log the raw output.
    DebugPredictions { request: DetectRequest },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    ModelLoaded {
        model: Arc<dyn ImageClassifier>,
    },
    ModelFailed {
        error: ModelLoadError,
    },
    PreviewDecoded {
        preview: PreviewImage,
        image: egui::ColorImage,
    },
    InputRejected {
        error: InputError,
    },
    DetectionFinished {
        generation: u64,
        result: Result<Vec<Prediction>, DetectError>,
    },
    RawPredictions {
        result: Result<Vec<Prediction>, DetectError>,
    },
    Log {
        message: String,
    },
}
