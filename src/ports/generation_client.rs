//! Text-generation client port definition.

use crate::domain::AppError;

/// Port for the external text-generation service.
///
/// One call per prompt. Implementations do not retry or cache.
pub trait GenerationClient {
    /// Send a single prompt and return the generated text.
    fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

impl<C: GenerationClient + ?Sized> GenerationClient for Box<C> {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        (**self).generate(prompt)
    }
}

/// Offline client returning a canned itinerary without calling the API.
#[derive(Debug, Clone, Default)]
pub struct MockGenerationClient;

impl GenerationClient for MockGenerationClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        tracing::info!(prompt_chars = prompt.chars().count(), "mock generation");

        Ok(format!(
            "Dia 1: roteiro de demonstração (modo mock)\n\n\
             Nenhuma chamada foi feita à API de geração.\n\
             Prompt recebido: {} caracteres.",
            prompt.chars().count()
        ))
    }
}
