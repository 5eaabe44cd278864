//! Generation outcome and display state.

/// Text shown in place of an itinerary when generation fails.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred.";

/// Tagged result of a single generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Request issued, no response yet.
    Pending,
    /// Raw itinerary text as returned by the service.
    Success(String),
    /// Generic diagnostic shown as ordinary result text.
    Failure(String),
}

impl GenerationOutcome {
    pub fn failure() -> Self {
        GenerationOutcome::Failure(GENERIC_FAILURE_MESSAGE.to_string())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GenerationOutcome::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success(_))
    }

    /// Text to render in the result area, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Pending => None,
            GenerationOutcome::Success(text) | GenerationOutcome::Failure(text) => Some(text),
        }
    }
}

/// Snapshot of what the shell should currently show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    Outcome(GenerationOutcome),
}

impl DisplayState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Outcome(GenerationOutcome::Pending))
    }

    pub fn outcome(&self) -> Option<&GenerationOutcome> {
        match self {
            DisplayState::Idle => None,
            DisplayState::Outcome(outcome) => Some(outcome),
        }
    }
}
