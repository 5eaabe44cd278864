use crate::domain::DisplayState;
use crate::ports::StateObserver;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct RecordingObserver {
    pub states: Arc<Mutex<Vec<DisplayState>>>,
}

impl RecordingObserver {
    pub fn snapshot(&self) -> Vec<DisplayState> {
        self.states.lock().unwrap().clone()
    }
}

impl StateObserver for RecordingObserver {
    fn on_state(&self, state: &DisplayState) {
        self.states.lock().unwrap().push(state.clone());
    }
}
