use std::sync::{Arc, Mutex, PoisonError};

use super::{StoreEvent, StoreObserver};

/// Observer that writes one line per event to `tracing`, or to a shared
/// buffer when one is supplied.
#[derive(Clone, Default)]
pub struct LogObserver {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl LogObserver {
    pub fn new() -> Self {
        LogObserver { buffer: None }
    }

    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogObserver {
            buffer: Some(buffer),
        }
    }
}

impl StoreObserver for LogObserver {
    fn notify(&self, event: &StoreEvent) {
        let payload = event.to_json();
        match &self.buffer {
            Some(buffer) => {
                let line = format!("[STORE] {} {}", event.event_type(), payload);
                buffer
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(line);
            }
            None if event.is_rejection() => {
                tracing::warn!(event = event.event_type(), %payload, "store operation rejected");
            }
            None => {
                tracing::info!(event = event.event_type(), %payload, "store mutation");
            }
        }
    }
}
