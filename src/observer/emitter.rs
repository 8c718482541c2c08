use std::sync::{Mutex, PoisonError};

use event_emitter_rs::EventEmitter;

use super::{StoreEvent, StoreObserver};

/// Observer that re-emits store events on an [`EventEmitter`] for
/// in-process subscribers. Each event goes out on the channel named by
/// [`StoreEvent::event_type`] with its JSON rendering as payload.
///
/// Listeners run on the emitter's own threads, so delivery is asynchronous.
pub struct EmitterObserver {
    emitter: Mutex<EventEmitter>,
}

impl Default for EmitterObserver {
    fn default() -> Self {
        Self::new(EventEmitter::new())
    }
}

impl EmitterObserver {
    pub fn new(emitter: EventEmitter) -> Self {
        EmitterObserver {
            emitter: Mutex::new(emitter),
        }
    }

    /// Register a listener for an event type such as `"EmployeeCreated"`.
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on(event, listener);
    }
}

impl StoreObserver for EmitterObserver {
    fn notify(&self, event: &StoreEvent) {
        let mut emitter = self.emitter.lock().unwrap_or_else(PoisonError::into_inner);
        emitter.emit(event.event_type(), event.to_json());
    }
}
