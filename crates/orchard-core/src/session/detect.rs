use std::sync::Arc;

use image::DynamicImage;

use crate::error::DetectError;
use crate::labels::ClassLabel;
use crate::model::ImageClassifier;
use crate::prediction::{select_winner, Prediction};

use super::status::BusyState;
use super::Session;

/// Everything needed to run the model away from the session owner.
#[derive(Clone)]
pub struct DetectRequest {
    pub model: Arc<dyn ImageClassifier>,
    pub image: Arc<DynamicImage>,
    /// Preview generation the request was made for.
    pub generation: u64,
}

impl DetectRequest {
    pub fn run(&self) -> Result<Vec<Prediction>, DetectError> {
        self.model.classify(&self.image)
    }
}

impl std::fmt::Debug for DetectRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectRequest")
            .field("image", &(self.image.width(), self.image.height()))
            .field("generation", &self.generation)
            .finish()
    }
}

/// Rendered result of one detection.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionOutcome {
    pub winner: usize,
    pub label: ClassLabel,
    pub predictions: Vec<Prediction>,
}

impl Session {
    /// Run a full detection on the calling thread.
    ///
    /// Returns `Ok(None)` without touching anything when there is no model,
    /// no preview, or a detection is already running.
    pub fn detect(&mut self) -> Result<Option<DetectionOutcome>, DetectError> {
        let Some(request) = self.begin_detection() else {
            return Ok(None);
        };
        let result = request.run();
        self.finish_detection(request.generation, result)
    }

    /// Mark a detection as in flight and hand out what the model needs.
    pub fn begin_detection(&mut self) -> Option<DetectRequest> {
        let request = self.request()?;
        if self.detecting {
            return None;
        }
        self.detecting = true;
        self.busy = Some(BusyState::Analyzing);
        tracing::debug!("Detection started for generation {}", request.generation);
        Some(request)
    }

    /// Apply a finished model call.
    ///
    /// The busy indicator and in-flight flag are always released. Errors
    /// leave rows and summary as they were. Results for a preview that has
    /// since been replaced are discarded.
    pub fn finish_detection(
        &mut self,
        generation: u64,
        result: Result<Vec<Prediction>, DetectError>,
    ) -> Result<Option<DetectionOutcome>, DetectError> {
        self.detecting = false;
        self.busy = None;

        let predictions = result.inspect_err(|e| tracing::error!("Detection failed: {e}"))?;

        if generation != self.generation {
            tracing::warn!(
                "Discarding detection for generation {generation}, preview is now at {}",
                self.generation
            );
            return Ok(None);
        }

        self.apply_predictions(predictions).map(Some)
    }

    /// Reset every row, then highlight the winner and fill the summary.
    pub fn apply_predictions(
        &mut self,
        predictions: Vec<Prediction>,
    ) -> Result<DetectionOutcome, DetectError> {
        if predictions.len() != self.rows.len() {
            let err = DetectError::PredictionCount {
                expected: self.rows.len(),
                got: predictions.len(),
            };
            tracing::error!("Detection failed: {err}");
            return Err(err);
        }
        let winner = select_winner(&predictions).ok_or(DetectError::NoPredictions)?;

        self.reset_results();
        let row = &mut self.rows[winner];
        row.mark_winner();
        let label = row.label.clone();
        self.summary.show_winner(&label);

        tracing::info!("Detected: {label}");
        Ok(DetectionOutcome {
            winner,
            label,
            predictions,
        })
    }

    /// Request for the diagnostic hook. Does not mark anything in flight.
    pub fn debug_request(&self) -> Option<DetectRequest> {
        self.request()
    }

    /// Run the model on the current preview and log the raw predictions.
    /// Displayed state is never touched.
    pub fn debug_predictions(&self) -> Option<Result<Vec<Prediction>, DetectError>> {
        let request = self.debug_request()?;
        let result = request.run();
        log_raw_predictions(&result);
        Some(result)
    }

    fn request(&self) -> Option<DetectRequest> {
        let model = self.model.as_ref()?;
        let preview = self.preview.as_ref()?;
        Some(DetectRequest {
            model: Arc::clone(model),
            image: Arc::clone(&preview.image),
            generation: self.generation,
        })
    }
}

pub fn log_raw_predictions(result: &Result<Vec<Prediction>, DetectError>) {
    match result {
        Ok(predictions) => {
            for (i, p) in predictions.iter().enumerate() {
                tracing::info!("[{i}] {}: {:.6}", p.label, p.probability);
            }
        }
        Err(e) => tracing::error!("Raw prediction failed: {e}"),
    }
}
