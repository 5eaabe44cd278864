//! Generation request lifecycle.
//!
//! Turns a checked trip request into exactly one call on the injected
//! [`GenerationClient`] and maps the result to a [`GenerationOutcome`].
//! Overlapping submissions are not cancelled; each one gets a ticket and only
//! the latest ticket may update the shared display state.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::prompt::itinerary_prompt;
use crate::domain::{AppError, DisplayState, GenerationOutcome, TripDays, TripRequest};
use crate::ports::{GenerationClient, NoopObserver, StateObserver};

#[derive(Debug, Default)]
struct Slot {
    issued: u64,
    display: DisplayState,
}

pub struct ItineraryLifecycle<C: GenerationClient> {
    client: C,
    observer: Box<dyn StateObserver>,
    slot: Mutex<Slot>,
}

impl<C: GenerationClient> ItineraryLifecycle<C> {
    pub fn new(client: C) -> Self {
        Self { client, observer: Box::new(NoopObserver), slot: Mutex::new(Slot::default()) }
    }

    /// Attach an observer notified on every applied display state.
    pub fn with_observer(mut self, observer: impl StateObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Current display state snapshot.
    pub fn state(&self) -> DisplayState {
        self.lock().display.clone()
    }

    /// True while the latest submission is awaiting its response.
    ///
    /// Shells use this to disable their trigger.
    pub fn is_pending(&self) -> bool {
        self.lock().display.is_loading()
    }

    /// Validate input and render the prompt without calling the client.
    pub fn preview_prompt(&self, city: &str, days: TripDays) -> Result<String, AppError> {
        let request = TripRequest::new(city, days)?;
        itinerary_prompt(&request)
    }

    /// Submit a trip for itinerary generation.
    ///
    /// Blank cities return [`AppError::Validation`] without touching the state or
    /// the client. Every accepted submission issues exactly one client call and
    /// resolves to `Success` or `Failure`; client errors never surface as `Err`.
    pub fn submit(&self, city: &str, days: TripDays) -> Result<GenerationOutcome, AppError> {
        let request = TripRequest::new(city, days)?;
        let prompt = itinerary_prompt(&request)?;

        let ticket = self.begin();
        tracing::info!(ticket, city = request.city(), days = days.get(), "generating itinerary");

        let outcome = match self.client.generate(&prompt) {
            Ok(text) => GenerationOutcome::Success(text),
            Err(err) => {
                tracing::error!(ticket, error = %err, "Error generating itinerary");
                GenerationOutcome::failure()
            }
        };

        self.finish(ticket, &outcome);
        Ok(outcome)
    }

    fn begin(&self) -> u64 {
        let mut slot = self.lock();
        slot.issued += 1;
        slot.display = DisplayState::Outcome(GenerationOutcome::Pending);
        self.observer.on_state(&slot.display);
        slot.issued
    }

    fn finish(&self, ticket: u64, outcome: &GenerationOutcome) {
        let mut slot = self.lock();
        if slot.issued != ticket {
            tracing::debug!(ticket, latest = slot.issued, "discarding stale outcome");
            return;
        }
        slot.display = DisplayState::Outcome(outcome.clone());
        self.observer.on_state(&slot.display);
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<C: GenerationClient + std::fmt::Debug> std::fmt::Debug for ItineraryLifecycle<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItineraryLifecycle")
            .field("client", &self.client)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}
