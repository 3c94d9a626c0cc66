use crate::consts::{DETECTION_CAPTION, SUMMARY_PLACEHOLDER, WINNER_FILL_PERCENT};
use crate::labels::ClassLabel;

/// Display state of one label: a fill bar and a highlight flag.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub label: ClassLabel,
    fill_percent: u8,
    active: bool,
}

impl ResultRow {
    pub fn new(label: ClassLabel) -> Self {
        Self {
            label,
            fill_percent: 0,
            active: false,
        }
    }

    pub fn reset(&mut self) {
        self.fill_percent = 0;
        self.active = false;
    }

    pub(crate) fn mark_winner(&mut self) {
        self.fill_percent = WINNER_FILL_PERCENT;
        self.active = true;
    }

    pub fn fill_percent(&self) -> u8 {
        self.fill_percent
    }

    /// Fill as `0.0..=1.0`, for progress bars.
    pub fn fill_fraction(&self) -> f32 {
        f32::from(self.fill_percent) / 100.0
    }

    pub fn percent_text(&self) -> String {
        format!("{}%", self.fill_percent)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

pub(crate) fn build_rows(labels: &[ClassLabel]) -> Vec<ResultRow> {
    labels.iter().cloned().map(ResultRow::new).collect()
}

/// The two-field "final result" readout.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub label: String,
    pub caption: String,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            label: SUMMARY_PLACEHOLDER.to_string(),
            caption: SUMMARY_PLACEHOLDER.to_string(),
        }
    }
}

impl Summary {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn show_winner(&mut self, label: &ClassLabel) {
        self.label = label.to_string();
        self.caption = DETECTION_CAPTION.to_string();
    }

    pub fn is_placeholder(&self) -> bool {
        self.label == SUMMARY_PLACEHOLDER && self.caption == SUMMARY_PLACEHOLDER
    }
}
