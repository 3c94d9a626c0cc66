use serde::Serialize;

use crate::labels::ClassLabel;

/// Probability the model assigned to one label for one image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub label: ClassLabel,
    pub probability: f32,
}

impl Prediction {
    pub fn new(label: impl Into<ClassLabel>, probability: f32) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Index of the highest probability, keeping the earliest index on ties.
///
/// The best index is only replaced on a strictly greater probability, so
/// `[0.2, 0.9, 0.9]` yields 1. A NaN never beats a number. Returns `None` for
/// an empty slice.
pub fn select_winner(predictions: &[Prediction]) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (i, p) in predictions.iter().enumerate() {
        best = match best {
            None => Some(i),
            Some(b) => {
                let current = predictions[b].probability;
                if p.probability > current || (current.is_nan() && !p.probability.is_nan()) {
                    Some(i)
                } else {
                    Some(b)
                }
            }
        };
    }

    best
}
