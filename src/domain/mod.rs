pub mod configuration;
mod error;
mod outcome;
pub mod prompt;
mod trip;

pub use configuration::{GenerationApiConfig, ViajaConfig};
pub use error::AppError;
pub use outcome::{DisplayState, GENERIC_FAILURE_MESSAGE, GenerationOutcome};
pub use trip::{EMPTY_CITY_NOTICE, NOTICE_TITLE, TripDays, TripRequest};
