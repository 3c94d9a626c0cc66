use serde::{Deserialize, Serialize};

use crate::consts::FALLBACK_LABELS;

/// One category the model can output.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassLabel(String);

impl ClassLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassLabel {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ClassLabel {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Labels in display order, and whether they came from the fallback set.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedLabels {
    pub labels: Vec<ClassLabel>,
    pub fallback: bool,
}

/// Use the model's labels as-is, or the fallback set when it has none.
pub fn resolve_labels(model_labels: &[String]) -> ResolvedLabels {
    if model_labels.is_empty() {
        ResolvedLabels {
            labels: fallback_labels(),
            fallback: true,
        }
    } else {
        ResolvedLabels {
            labels: model_labels.iter().cloned().map(ClassLabel::from).collect(),
            fallback: false,
        }
    }
}

pub fn fallback_labels() -> Vec<ClassLabel> {
    FALLBACK_LABELS.iter().map(|&l| ClassLabel::from(l)).collect()
}
