pub mod api;
pub mod cli;
pub mod lifecycle;
mod logging;

pub use lifecycle::ItineraryLifecycle;
pub use logging::LOG_ENV;
