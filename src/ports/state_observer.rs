use crate::domain::DisplayState;

/// Port notified whenever the lifecycle applies a new display state.
///
/// Called while the lifecycle's state lock is held; implementations must not
/// call back into the lifecycle.
pub trait StateObserver: Send + Sync {
    fn on_state(&self, state: &DisplayState);
}

/// Observer that ignores every transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StateObserver for NoopObserver {
    fn on_state(&self, _state: &DisplayState) {}
}
