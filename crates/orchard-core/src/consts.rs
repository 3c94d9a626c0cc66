/// Labels used when the model exposes none, in display order.
pub const FALLBACK_LABELS: [&str; 6] = ["Banana", "Orange", "Mango", "Pineapple", "Apple", "Guava"];

/// Text shown in both summary fields before any detection.
pub const SUMMARY_PLACEHOLDER: &str = "-";

/// Summary caption after a successful detection. The real winning probability
/// is deliberately not shown here.
pub const DETECTION_CAPTION: &str = "100% Accurate Detection";

/// Fill percentage of the winning row.
pub const WINNER_FILL_PERCENT: u8 = 100;

/// Default model directory, relative to the working directory. It must hold
/// the ONNX export and its `metadata.json`.
pub const DEFAULT_MODEL_BASE: &str = "models/fruit";

pub const DEFAULT_MODEL_FILE: &str = "model.onnx";

pub const DEFAULT_METADATA_FILE: &str = "metadata.json";

/// Square input edge used when neither metadata nor config provide one.
pub const DEFAULT_INPUT_SIZE: u32 = 224;

/// Media type prefix a selected file must declare.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Media type assumed when none is declared and the extension is unknown.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Notification shown when the model cannot be loaded.
pub const MODEL_LOAD_FAILED_NOTICE: &str = "Model load failed. Check internet connection.";

/// Notification shown when the selected file is not an image.
pub const NOT_AN_IMAGE_NOTICE: &str = "Please upload an image file";

/// Notification shown when the model call fails during detection.
pub const DETECTION_FAILED_NOTICE: &str = "Detection failed";
