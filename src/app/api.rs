//! Public API for itinerary planning.

use std::path::PathBuf;

use crate::app::lifecycle::ItineraryLifecycle;
use crate::domain::{AppError, GenerationOutcome, TripDays, TripRequest};
use crate::ports::{GenerationClient, MockGenerationClient, NoopObserver, StateObserver};
use crate::services::{HttpGeminiClient, load_config};

/// How a plan request reaches (or skips) the generation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanMode {
    /// Call the Gemini API.
    #[default]
    Generate,
    /// Use the offline mock client.
    Mock,
    /// Render the prompt only.
    PromptPreview,
}

/// Options for [`plan`].
#[derive(Debug, Clone)]
pub struct PlanOptions {
    pub city: String,
    pub days: TripDays,
    pub mode: PlanMode,
    /// Explicit config file; `viaja.toml` in the working directory otherwise.
    pub config_path: Option<PathBuf>,
}

impl PlanOptions {
    pub fn new(city: impl Into<String>, days: TripDays) -> Self {
        Self { city: city.into(), days, mode: PlanMode::default(), config_path: None }
    }

    pub fn with_mode(mut self, mode: PlanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }
}

/// Result of [`plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanResult {
    /// Rendered prompt, nothing sent.
    Preview(String),
    /// Outcome of the single generation call.
    Generated(GenerationOutcome),
}

/// Plan a trip without observing intermediate states.
pub fn plan(options: &PlanOptions) -> Result<PlanResult, AppError> {
    plan_with_observer(options, NoopObserver)
}

/// Plan a trip, reporting display-state transitions to `observer`.
///
/// Input is checked before configuration or credentials are touched, so a
/// blank city fails with [`AppError::Validation`] even without an API key.
pub fn plan_with_observer(
    options: &PlanOptions,
    observer: impl StateObserver + 'static,
) -> Result<PlanResult, AppError> {
    TripRequest::new(&options.city, options.days)?;

    let client: Box<dyn GenerationClient> = match options.mode {
        PlanMode::Generate => {
            let cwd = std::env::current_dir()?;
            let config = load_config(options.config_path.as_deref(), &cwd)?;
            Box::new(HttpGeminiClient::from_env_with_config(&config.generation)?)
        }
        PlanMode::Mock | PlanMode::PromptPreview => Box::new(MockGenerationClient),
    };

    let lifecycle = ItineraryLifecycle::new(client).with_observer(observer);

    if options.mode == PlanMode::PromptPreview {
        return lifecycle.preview_prompt(&options.city, options.days).map(PlanResult::Preview);
    }

    lifecycle.submit(&options.city, options.days).map(PlanResult::Generated)
}
