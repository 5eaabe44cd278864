//! viaja: generate day-by-day travel itineraries through a generative-language API.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::ItineraryLifecycle;
pub use app::api::{PlanMode, PlanOptions, PlanResult, plan, plan_with_observer};
pub use domain::{
    AppError, DisplayState, GENERIC_FAILURE_MESSAGE, GenerationOutcome, TripDays, TripRequest,
};
pub use ports::{GenerationClient, MockGenerationClient, StateObserver};
pub use services::HttpGeminiClient;
