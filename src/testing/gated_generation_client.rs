use crate::domain::AppError;
use crate::ports::GenerationClient;
use std::collections::HashMap;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Condvar, Mutex};

/// Client whose calls block until the test releases them by prompt.
///
/// Each call announces its prompt on `started` before waiting.
#[derive(Clone)]
pub struct GatedGenerationClient {
    releases: Arc<(Mutex<HashMap<String, String>>, Condvar)>,
    started: Sender<String>,
}

impl GatedGenerationClient {
    pub fn new() -> (Self, Receiver<String>) {
        let (started, rx) = channel();
        (Self { releases: Arc::new((Mutex::new(HashMap::new()), Condvar::new())), started }, rx)
    }

    /// Let the call whose prompt contains `needle` return `reply`.
    pub fn release(&self, needle: &str, reply: &str) {
        let (lock, cvar) = &*self.releases;
        lock.lock().unwrap().insert(needle.to_string(), reply.to_string());
        cvar.notify_all();
    }
}

impl GenerationClient for GatedGenerationClient {
    fn generate(&self, prompt: &str) -> Result<String, AppError> {
        self.started.send(prompt.to_string()).unwrap();
        let (lock, cvar) = &*self.releases;
        let mut releases = lock.lock().unwrap();
        loop {
            let hit = releases.keys().find(|needle| prompt.contains(needle.as_str())).cloned();
            if let Some(needle) = hit {
                return Ok(releases.remove(&needle).unwrap());
            }
            releases = cvar.wait(releases).unwrap();
        }
    }
}
