/// Model status indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelStatus {
    Loading,
    Ready,
    /// Carries the load error message. Detection stays off for the session.
    Failed(String),
}

impl ModelStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl std::fmt::Display for ModelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading Model..."),
            Self::Ready => write!(f, "Model Loaded Successfully"),
            Self::Failed(_) => write!(f, "Model Loading Failed"),
        }
    }
}

/// What the busy indicator is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BusyState {
    LoadingModel,
    Analyzing,
}

impl std::fmt::Display for BusyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LoadingModel => write!(f, "Loading AI Model..."),
            Self::Analyzing => write!(f, "Analyzing Image..."),
        }
    }
}
