//! Event Bus - central pub/sub system for center events
//!
//! The EventBus uses tokio broadcast channels to deliver events to all
//! subscribers with minimal latency. Workers emit events, consumers (console
//! logger, test recorders) subscribe.

use std::sync::Arc;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::debug;

use super::types::CenterEvent;

/// Default channel capacity (events)
///
/// A run emits a handful of events per help plus retry noise; this buffer
/// covers the configurations the simulator is used with without lagging a
/// live subscriber.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 10_000;

/// Central event bus for center activity streaming
///
/// Every observable action in the center emits an event to this bus.
/// All consumers subscribe to receive events.
pub struct EventBus {
    tx: broadcast::Sender<CenterEvent>,
}

impl EventBus {
    /// Create a new event bus with the given capacity
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Create a new event bus with default capacity
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Emit an event to all subscribers
    ///
    /// This is fire-and-forget: if there are no subscribers, the event is
    /// dropped. If the channel is full, oldest events are dropped.
    pub fn emit(&self, event: CenterEvent) {
        debug!(
            event_type = event.event_type(),
            student_id = event.student_id(),
            "EventBus::emit"
        );
        // Ignore send errors (no subscribers is OK)
        let _ = self.tx.send(event);
    }

    /// Subscribe to receive events
    ///
    /// Returns a receiver that will receive all events emitted after
    /// subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<CenterEvent> {
        self.tx.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

/// Create an event bus wrapped in an Arc for shared ownership
pub fn create_event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::with_default_capacity())
}

/// Buffers every event from the bus until the bus closes
///
/// This is the recording sink the scenario tests use: attach before the run,
/// drop all other bus handles once the run completes, then `finish()` to get
/// the full trace in emission order.
pub struct EventRecorder {
    handle: JoinHandle<Vec<CenterEvent>>,
}

impl EventRecorder {
    /// Subscribe to the bus and start buffering in a background task
    pub fn attach(bus: &EventBus) -> Self {
        let mut rx = bus.subscribe();
        let handle = tokio::spawn(async move {
            let mut events = Vec::new();
            loop {
                match rx.recv().await {
                    Ok(event) => events.push(event),
                    Err(broadcast::error::RecvError::Lagged(missed)) => {
                        tracing::warn!(missed, "EventRecorder: lagged behind, missed events");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            events
        });
        Self { handle }
    }

    /// Wait for the bus to close and return the recorded trace
    pub async fn finish(self) -> Vec<CenterEvent> {
        self.handle.await.unwrap_or_default()
    }
}
