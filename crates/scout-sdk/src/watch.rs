use std::pin::Pin;
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::task::{Context, Poll};
use std::time::Duration;

use futures::stream::Stream;

use crate::error::{Error, Result};

// Re-export event types for convenient use in client code
pub use scout_runtime::WatchEvent;

/// How often the bridge checks whether the stream was dropped.
const BRIDGE_POLL: Duration = Duration::from_millis(100);

/// Async stream of project change notifications.
///
/// Ends when the client shuts down or another subscriber takes over.
pub struct LiveStream {
    receiver: tokio::sync::mpsc::UnboundedReceiver<WatchEvent>,
}

impl LiveStream {
    pub(crate) fn start(source: Receiver<WatchEvent>) -> Result<Self> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| Error::Internal(anyhow::anyhow!("watch requires a tokio runtime: {}", e)))?;

        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();

        // Bridge the blocking receiver to the async sender
        handle.spawn_blocking(move || {
            loop {
                match source.recv_timeout(BRIDGE_POLL) {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break; // Stream dropped
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.is_closed() {
                            break;
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Ok(Self { receiver: rx })
    }

    /// Poll for the next event (non-blocking).
    ///
    /// Returns `None` if no event is available immediately.
    pub fn try_next(&mut self) -> Option<WatchEvent> {
        self.receiver.try_recv().ok()
    }
}

impl Stream for LiveStream {
    type Item = WatchEvent;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.receiver.poll_recv(cx)
    }
}
