//! Process-wide application events
//!
//! A broadcast bus owned by the composition root replaces the ambient
//! notification-center pattern: components subscribe while active and drop
//! the receiver when they deactivate.

use tokio::sync::broadcast;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Events any active component may observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// All persisted domain state was cleared; re-initialize from defaults.
    DataReset,
}

/// Cloneable handle to the application event bus.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to future events. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    /// Publish to all current subscribers. Publishing with no subscribers
    /// is not an error.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivered_to_every_subscriber() {
        let bus = EventBus::new();
        let mut first = bus.subscribe();
        let mut second = bus.subscribe();

        bus.publish(AppEvent::DataReset);

        assert_eq!(first.recv().await.unwrap(), AppEvent::DataReset);
        assert_eq!(second.recv().await.unwrap(), AppEvent::DataReset);
    }

    #[test]
    fn publish_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(AppEvent::DataReset);
    }

    #[tokio::test]
    async fn late_subscribers_miss_earlier_events() {
        let bus = EventBus::new();
        bus.publish(AppEvent::DataReset);

        let mut receiver = bus.subscribe();
        bus.publish(AppEvent::DataReset);

        assert_eq!(receiver.recv().await.unwrap(), AppEvent::DataReset);
        assert!(receiver.try_recv().is_err());
    }
}
