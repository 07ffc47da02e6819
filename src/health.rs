//! Per-camera stream-health publish/subscribe channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The external media layer publishes raw stream-state strings into this
//! monitor; mounted tiles subscribe by camera id. Unsubscribing removes the
//! callback itself, so an event arriving after unmount has nowhere to go —
//! there is no window where a destroyed tile can still be updated.

#[cfg(test)]
#[path = "health_test.rs"]
mod health_test;

use std::collections::HashMap;

use crate::consts::UNHEALTHY_STREAM_STATES;

/// Classify a raw stream state per the external signaling contract.
///
/// Healthy is simply "not in the unhealthy set"; unknown states are healthy.
#[must_use]
pub fn is_stream_state_unhealthy(stream_state: &str) -> bool {
    UNHEALTHY_STREAM_STATES.contains(&stream_state)
}

/// Callback invoked with the raw stream-state string on every event.
pub type StreamStateHandler = Box<dyn FnMut(&str)>;

/// Handle returned by [`StreamHealthMonitor::subscribe`].
///
/// Pass it back to [`StreamHealthMonitor::unsubscribe`] to detach; the
/// handle identifies exactly one registered callback.
#[derive(Debug)]
pub struct StreamHealthSubscription {
    camera_id: String,
    token: u64,
}

impl StreamHealthSubscription {
    /// The camera id this subscription listens on.
    #[must_use]
    pub fn camera_id(&self) -> &str {
        &self.camera_id
    }
}

/// Registry of stream-state subscribers keyed by camera id.
#[derive(Default)]
pub struct StreamHealthMonitor {
    next_token: u64,
    channels: HashMap<String, Vec<(u64, StreamStateHandler)>>,
}

impl StreamHealthMonitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for events on `camera_id`.
    pub fn subscribe(
        &mut self,
        camera_id: &str,
        handler: StreamStateHandler,
    ) -> StreamHealthSubscription {
        let token = self.next_token;
        self.next_token += 1;
        self.channels.entry(camera_id.to_owned()).or_default().push((token, handler));
        StreamHealthSubscription { camera_id: camera_id.to_owned(), token }
    }

    /// Remove the callback identified by `subscription`.
    pub fn unsubscribe(&mut self, subscription: StreamHealthSubscription) {
        if let Some(handlers) = self.channels.get_mut(&subscription.camera_id) {
            handlers.retain(|(token, _)| *token != subscription.token);
            if handlers.is_empty() {
                self.channels.remove(&subscription.camera_id);
            }
        }
    }

    /// Deliver a stream-state event to every subscriber of `camera_id`,
    /// in subscription order. No subscribers is a no-op.
    pub fn publish(&mut self, camera_id: &str, stream_state: &str) {
        if let Some(handlers) = self.channels.get_mut(camera_id) {
            for (_, handler) in handlers.iter_mut() {
                handler(stream_state);
            }
        }
    }

    /// How many callbacks are registered for `camera_id`.
    #[must_use]
    pub fn subscriber_count(&self, camera_id: &str) -> usize {
        self.channels.get(camera_id).map_or(0, Vec::len)
    }
}
