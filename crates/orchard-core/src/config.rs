use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_INPUT_SIZE, DEFAULT_METADATA_FILE, DEFAULT_MODEL_BASE, DEFAULT_MODEL_FILE};
use crate::error::Result;
use crate::model::source::ModelSource;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OrchardConfig {
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub window: WindowConfig,
}

impl OrchardConfig {
    /// Read a TOML config file. Missing sections fall back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Where the model lives and how its input tensor is shaped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// URL or directory the definition and metadata files are resolved against.
    pub base_location: String,
    pub model_file: String,
    pub metadata_file: String,
    /// Square input edge, used when the metadata does not declare `imageSize`.
    pub input_size: u32,
    pub layout: TensorLayout,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_location: DEFAULT_MODEL_BASE.to_string(),
            model_file: DEFAULT_MODEL_FILE.to_string(),
            metadata_file: DEFAULT_METADATA_FILE.to_string(),
            input_size: DEFAULT_INPUT_SIZE,
            layout: TensorLayout::default(),
        }
    }
}

impl ModelConfig {
    pub fn source(&self) -> ModelSource {
        ModelSource::from_base(&self.base_location, &self.model_file, &self.metadata_file)
    }
}

/// Memory layout of the model's image input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TensorLayout {
    /// `[1, height, width, 3]`, as exported from Keras.
    #[default]
    Nhwc,
    /// `[1, 3, height, width]`, as exported from PyTorch.
    Nchw,
}

impl std::fmt::Display for TensorLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nhwc => write!(f, "NHWC"),
            Self::Nchw => write!(f, "NCHW"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 720.0,
        }
    }
}
