use super::events::WatchEvent;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Single-subscriber relay shared between the registry and its watch callbacks.
///
/// Subscribing again replaces the previous subscriber, whose receiver then
/// disconnects. Sending with no subscriber drops the event.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    slot: Arc<Mutex<Option<Sender<WatchEvent>>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<WatchEvent> {
        let (tx, rx) = channel();
        *self.lock() = Some(tx);
        rx
    }

    /// Returns false when nobody received the event.
    pub fn send(&self, event: WatchEvent) -> bool {
        let mut slot = self.lock();
        match slot.as_ref() {
            Some(tx) => {
                if tx.send(event).is_ok() {
                    true
                } else {
                    *slot = None;
                    false
                }
            }
            None => false,
        }
    }

    pub fn detach(&self) {
        *self.lock() = None;
    }

    pub fn is_attached(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Sender<WatchEvent>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
