use serde::{Deserialize, Serialize};

use crate::error::ModelLoadError;

/// Contents of the `metadata.json` published next to a model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelMetadata {
    pub labels: Vec<String>,
    pub image_size: Option<u32>,
    pub model_name: Option<String>,
    pub tm_version: Option<String>,
    pub package_name: Option<String>,
    pub package_version: Option<String>,
    pub time_stamp: Option<String>,
}

impl ModelMetadata {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelLoadError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
