use std::path::PathBuf;

use thiserror::Error;

/// Failure to fetch or build the classification model. Fatal for a session.
#[derive(Error, Debug)]
pub enum ModelLoadError {
    #[error("Failed to fetch {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {location} returned HTTP {status}")]
    Http { location: String, status: u16 },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid model metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Invalid model definition: {0}")]
    Model(String),
}

/// Rejected file selection. The session is left untouched.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("{name} is not an image (media type: {media_type})")]
    NotAnImage { name: String, media_type: String },

    #[error("Cannot open {name} before the model is loaded")]
    NotAccepting { name: String },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {name}: {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// Model invocation failure during detection. Recoverable.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Inference failed: {0}")]
    Inference(String),

    #[error("Model returned {got} predictions for {expected} labels")]
    PredictionCount { expected: usize, got: usize },

    #[error("Model returned no predictions")]
    NoPredictions,
}

#[derive(Error, Debug)]
pub enum OrchardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    ModelLoad(#[from] ModelLoadError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Detect(#[from] DetectError),

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, OrchardError>;
