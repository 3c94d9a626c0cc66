use std::io::Cursor;
use std::sync::Arc;

use image::DynamicImage;
use tract_onnx::prelude::*;

use crate::config::{ModelConfig, TensorLayout};
use crate::error::{DetectError, ModelLoadError};
use crate::prediction::Prediction;

use super::metadata::ModelMetadata;
use super::preprocess::{image_to_tensor, input_shape};
use super::source::ModelSource;
use super::{ImageClassifier, ModelLoader};

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

/// ONNX image classifier executed with tract.
pub struct TractClassifier {
    plan: Plan,
    labels: Vec<String>,
    input_size: u32,
    layout: TensorLayout,
}

impl TractClassifier {
    /// Build a runnable plan from ONNX bytes, pinning the input to a single
    /// square RGB image.
    pub fn from_bytes(
        model: &[u8],
        metadata: ModelMetadata,
        config: &ModelConfig,
    ) -> Result<Self, ModelLoadError> {
        let input_size = metadata.image_size.unwrap_or(config.input_size);
        let shape = input_shape(input_size, config.layout);

        let plan = tract_onnx::onnx()
            .model_for_read(&mut Cursor::new(model))
            .and_then(|m| m.with_input_fact(0, f32::fact(shape).into()))
            .and_then(|m| m.into_optimized())
            .and_then(|m| m.into_runnable())
            .map_err(|e| ModelLoadError::Model(format!("{e:#}")))?;

        Ok(Self {
            plan,
            labels: metadata.labels,
            input_size,
            layout: config.layout,
        })
    }

    pub fn input_size(&self) -> u32 {
        self.input_size
    }

    fn label_for(&self, index: usize) -> String {
        self.labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Class {}", index + 1))
    }
}

impl ImageClassifier for TractClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn classify(&self, image: &DynamicImage) -> Result<Vec<Prediction>, DetectError> {
        let input = image_to_tensor(image, self.input_size, self.layout)?;

        let outputs = self
            .plan
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| DetectError::Inference(format!("{e:#}")))?;
        let output = outputs.first().ok_or(DetectError::NoPredictions)?;
        let scores = output
            .to_array_view::<f32>()
            .map_err(|e| DetectError::Inference(format!("{e:#}")))?;

        let predictions: Vec<Prediction> = scores
            .iter()
            .enumerate()
            .map(|(i, &p)| Prediction::new(self.label_for(i), p))
            .collect();

        if predictions.is_empty() {
            return Err(DetectError::NoPredictions);
        }
        if !self.labels.is_empty() && predictions.len() != self.labels.len() {
            return Err(DetectError::PredictionCount {
                expected: self.labels.len(),
                got: predictions.len(),
            });
        }

        Ok(predictions)
    }
}

/// Loads a [`TractClassifier`] from a URL or a local directory.
#[derive(Clone, Debug, Default)]
pub struct TractLoader {
    pub config: ModelConfig,
}

impl TractLoader {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }
}

impl ModelLoader for TractLoader {
    fn load(&self, source: &ModelSource) -> Result<Arc<dyn ImageClassifier>, ModelLoadError> {
        tracing::info!("Loading model metadata from {}", source.metadata);
        let metadata = ModelMetadata::from_slice(&source.metadata.fetch()?)?;

        tracing::info!("Loading model definition from {}", source.model);
        let bytes = source.model.fetch()?;
        let classifier = TractClassifier::from_bytes(&bytes, metadata, &self.config)?;

        tracing::info!(
            "Model ready: {} labels, {}x{} {} input",
            classifier.labels.len(),
            classifier.input_size,
            classifier.input_size,
            classifier.layout
        );
        Ok(Arc::new(classifier))
    }
}
