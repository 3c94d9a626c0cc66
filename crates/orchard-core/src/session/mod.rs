//! Page-lifetime state shared by bootstrap, input handling and detection.
//!
//! The owner (GUI app or CLI command) holds one `Session` and is the only
//! thing that mutates it. Slow work (model load, decode, inference) can run
//! elsewhere; results are applied back through the methods here.

mod detect;
mod rows;
mod status;

use std::sync::Arc;

use crate::error::{InputError, ModelLoadError};
use crate::input::{PreviewImage, SelectedFile};
use crate::labels::{resolve_labels, ClassLabel};
use crate::model::source::ModelSource;
use crate::model::{ImageClassifier, ModelLoader};

pub use detect::{log_raw_predictions, DetectRequest, DetectionOutcome};
pub use rows::{ResultRow, Summary};
pub use status::{BusyState, ModelStatus};

/// Result of a successful bootstrap.
#[derive(Clone, Debug, PartialEq)]
pub struct Ready {
    pub labels: Vec<ClassLabel>,
    /// True when the model exposed no labels and the fallback set is shown.
    pub fallback: bool,
}

/// A new preview is on screen and the results were cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewReady {
    pub generation: u64,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone)]
pub struct Session {
    model: Option<Arc<dyn ImageClassifier>>,
    status: ModelStatus,
    labels: Vec<ClassLabel>,
    fallback: bool,
    rows: Vec<ResultRow>,
    summary: Summary,
    preview: Option<PreviewImage>,
    busy: Option<BusyState>,
    detecting: bool,
    accepts_input: bool,
    /// Bumped for every new preview; detection results carry the value
    /// they were started with.
    generation: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session waiting for its model.
    pub fn new() -> Self {
        Self {
            model: None,
            status: ModelStatus::Loading,
            labels: Vec::new(),
            fallback: false,
            rows: Vec::new(),
            summary: Summary::default(),
            preview: None,
            busy: Some(BusyState::LoadingModel),
            detecting: false,
            accepts_input: false,
            generation: 0,
        }
    }

    /// Load the model and install it. On failure the session stays inert.
    pub fn initialize(
        &mut self,
        loader: &dyn ModelLoader,
        source: &ModelSource,
    ) -> Result<Ready, ModelLoadError> {
        match loader.load(source) {
            Ok(model) => Ok(self.install_model(model)),
            Err(e) => {
                self.fail_model(&e);
                Err(e)
            }
        }
    }

    /// Resolve labels, build one cleared row per label, then start accepting
    /// input.
    pub fn install_model(&mut self, model: Arc<dyn ImageClassifier>) -> Ready {
        let resolved = resolve_labels(model.labels());
        if resolved.fallback {
            tracing::warn!("Model exposes no labels, using fallback set");
        }
        tracing::info!(
            "Model classes: {}",
            resolved
                .labels
                .iter()
                .map(ClassLabel::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        self.rows = rows::build_rows(&resolved.labels);
        self.labels = resolved.labels.clone();
        self.fallback = resolved.fallback;
        self.summary.reset();
        self.model = Some(model);
        self.status = ModelStatus::Ready;
        self.busy = None;
        self.accepts_input = true;

        Ready {
            labels: resolved.labels,
            fallback: resolved.fallback,
        }
    }

    /// Record a load failure. Input and detection remain disabled.
    pub fn fail_model(&mut self, error: &ModelLoadError) {
        tracing::error!("Model load failed: {error}");
        self.model = None;
        self.status = ModelStatus::Failed(error.to_string());
        self.busy = None;
        self.accepts_input = false;
    }

    /// Validate, decode and show a file in one step.
    pub fn select_file(&mut self, file: &SelectedFile) -> Result<PreviewReady, InputError> {
        self.ensure_accepting(&file.name)?;
        let preview = file.decode().inspect_err(|e| {
            tracing::warn!("Rejected {}: {e}", file.name);
        })?;
        self.show_preview(preview)
    }

    /// Show a decoded preview and clear all results.
    ///
    /// Fails with `NotAccepting` until a model is installed.
    pub fn show_preview(&mut self, preview: PreviewImage) -> Result<PreviewReady, InputError> {
        self.ensure_accepting(&preview.name)?;
        self.generation += 1;
        let ready = PreviewReady {
            generation: self.generation,
            width: preview.width(),
            height: preview.height(),
        };
        tracing::info!(
            "Previewing {} ({}x{})",
            preview.name,
            ready.width,
            ready.height
        );
        self.preview = Some(preview);
        self.reset_results();
        Ok(ready)
    }

    fn ensure_accepting(&self, name: &str) -> Result<(), InputError> {
        if self.accepts_input {
            Ok(())
        } else {
            tracing::warn!("Ignoring {name}, no model installed");
            Err(InputError::NotAccepting {
                name: name.to_string(),
            })
        }
    }

    /// Every row back to 0%/inactive and the summary to placeholders.
    pub fn reset_results(&mut self) {
        for row in &mut self.rows {
            row.reset();
        }
        self.summary.reset();
    }

    pub fn status(&self) -> &ModelStatus {
        &self.status
    }

    pub fn labels(&self) -> &[ClassLabel] {
        &self.labels
    }

    pub fn uses_fallback_labels(&self) -> bool {
        self.fallback
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn preview(&self) -> Option<&PreviewImage> {
        self.preview.as_ref()
    }

    pub fn busy(&self) -> Option<BusyState> {
        self.busy
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// File selection is only wired once the result rows exist.
    /// `select_file` and `show_preview` refuse files until then.
    pub fn accepts_input(&self) -> bool {
        self.accepts_input
    }

    pub fn is_detecting(&self) -> bool {
        self.detecting
    }

    /// Detect needs a model and a preview, and no detection in flight.
    pub fn detect_enabled(&self) -> bool {
        self.model.is_some() && self.preview.is_some() && !self.detecting
    }

    /// Index of the highlighted row, if any.
    pub fn active_row(&self) -> Option<usize> {
        self.rows.iter().position(ResultRow::is_active)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("status", &self.status)
            .field("labels", &self.labels)
            .field("rows", &self.rows)
            .field("summary", &self.summary)
            .field("preview", &self.preview.as_ref().map(|p| &p.name))
            .field("busy", &self.busy)
            .field("detecting", &self.detecting)
            .field("generation", &self.generation)
            .finish()
    }
}
