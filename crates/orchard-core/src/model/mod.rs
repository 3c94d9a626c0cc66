pub mod metadata;
pub mod preprocess;
pub mod source;
pub mod tract;

use std::sync::Arc;

use image::DynamicImage;

use crate::error::{DetectError, ModelLoadError};
use crate::prediction::Prediction;

use source::ModelSource;

pub use tract::{TractClassifier, TractLoader};

/// A loaded, opaque image classifier.
///
/// Implementations own everything about inference; callers only see labels
/// and ordered predictions. Must be shareable with a worker thread.
pub trait ImageClassifier: Send + Sync {
    /// Labels the model was published with, in output order. May be empty.
    fn labels(&self) -> &[String];

    /// One prediction per output class, in output order.
    fn classify(&self, image: &DynamicImage) -> Result<Vec<Prediction>, DetectError>;
}

/// Fetches and builds a classifier from its definition and metadata.
pub trait ModelLoader: Send + Sync {
    fn load(&self, source: &ModelSource) -> Result<Arc<dyn ImageClassifier>, ModelLoadError>;
}
