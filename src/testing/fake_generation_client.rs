use crate::domain::AppError;
use crate::ports::GenerationClient;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Records every prompt and answers from a script, falling back to a fixed reply.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub prompts: Arc<Mutex<Vec<String>>>,
    script: Arc<Mutex<VecDeque<Result<String, String>>>>,
    fallback: String,
}

impl FakeGenerationClient {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(vec![])),
            script: Arc::new(Mutex::new(VecDeque::new())),
            fallback: fallback.into(),
        }
    }

    /// Queue a failure for the next call.
    pub fn fail_next(self, message: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Err(message.into()));
        self
    }

    /// Queue a reply for the next call.
    pub fn reply_next(self, text: impl Into<String>) -> Self {
        self.script.lock().unwrap().push_back(Ok(text.into()));
        self
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AppError::Generation(message)),
            None => Ok(self.fallback.clone()),
        }
    }
}
