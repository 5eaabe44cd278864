mod generation_client;
mod state_observer;

pub use generation_client::{GenerationClient, MockGenerationClient};
pub use state_observer::{NoopObserver, StateObserver};
