#![allow(dead_code)]

pub mod onnx;

use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

use orchard_core::error::{DetectError, ModelLoadError};
use orchard_core::input::SelectedFile;
use orchard_core::model::source::ModelSource;
use orchard_core::model::{ImageClassifier, ModelLoader};
use orchard_core::prediction::Prediction;
use orchard_core::session::Session;

/// Classifier returning a fixed probability vector, or failing on demand.
pub struct FakeClassifier {
    pub labels: Vec<String>,
    pub probabilities: Vec<f32>,
    pub fail: bool,
    calls: AtomicUsize,
}

impl FakeClassifier {
    pub fn new(labels: &[&str], probabilities: &[f32]) -> Self {
        Self {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            probabilities: probabilities.to_vec(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(labels: &[&str]) -> Self {
        Self {
            fail: true,
            ..Self::new(labels, &[])
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ImageClassifier for FakeClassifier {
    fn labels(&self) -> &[String] {
        &self.labels
    }

    fn classify(&self, _image: &DynamicImage) -> Result<Vec<Prediction>, DetectError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DetectError::Inference("backend rejected input".into()));
        }
        Ok(self
            .probabilities
            .iter()
            .enumerate()
            .map(|(i, &p)| {
                let name = self
                    .labels
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| format!("Class {}", i + 1));
                Prediction::new(name, p)
            })
            .collect())
    }
}

/// Loader that either hands out a prepared classifier or fails.
pub struct FakeLoader {
    pub model: Option<Arc<FakeClassifier>>,
}

impl ModelLoader for FakeLoader {
    fn load(&self, _source: &ModelSource) -> Result<Arc<dyn ImageClassifier>, ModelLoadError> {
        match &self.model {
            Some(m) => Ok(Arc::clone(m) as Arc<dyn ImageClassifier>),
            None => Err(ModelLoadError::Model("no such model".into())),
        }
    }
}

pub fn test_source() -> ModelSource {
    ModelSource::from_base("https://models.example/fruit/", "model.onnx", "metadata.json")
}

/// Encode a solid-color PNG in memory.
pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buf, ImageFormat::Png)
        .expect("encode png");
    buf.into_inner()
}

pub fn image_file(name: &str) -> SelectedFile {
    SelectedFile::new(name, "image/png", png_bytes(8, 6, [200, 120, 40]))
}

pub fn text_file(name: &str) -> SelectedFile {
    SelectedFile::new(name, "text/plain", b"not an image".to_vec())
}

/// Session with the classifier installed and no preview yet.
pub fn ready_session(model: FakeClassifier) -> (Session, Arc<FakeClassifier>) {
    let model = Arc::new(model);
    let mut session = Session::new();
    session.install_model(Arc::clone(&model) as Arc<dyn ImageClassifier>);
    (session, model)
}

/// Session with the classifier installed and a preview showing.
pub fn previewing_session(model: FakeClassifier) -> (Session, Arc<FakeClassifier>) {
    let (mut session, model) = ready_session(model);
    session.select_file(&image_file("fruit.png")).expect("select image");
    (session, model)
}
