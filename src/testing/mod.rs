mod fake_generation_client;
mod gated_generation_client;
mod recording_observer;

pub use fake_generation_client::FakeGenerationClient;
pub use gated_generation_client::GatedGenerationClient;
pub use recording_observer::RecordingObserver;
