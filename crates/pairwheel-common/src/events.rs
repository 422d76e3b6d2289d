use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::RoundState;

/// Notifications a pairing session sends to whoever presents it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionEvent {
    PersonAdded(String),
    PersonRemoved(String),
    RoundStateChanged(RoundState),
    PairCommitted { first: String, second: String },
    NoLegalPairs { remaining: usize },
    RoundAborted { reason: String },
    DrawStalled { attempts: u32 },
    /// An event type this build does not know. Lets readers of `--json`
    /// output from a newer build keep decoding the lines they understand.
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<SessionEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of receivers the event reached (0 with none).
    pub fn publish(&self, event: SessionEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(SessionEvent::RoundStateChanged(RoundState::AwaitingFirst));

        let event = rx.recv().await.unwrap();
        assert_eq!(
            event,
            SessionEvent::RoundStateChanged(RoundState::AwaitingFirst)
        );
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(SessionEvent::NoLegalPairs { remaining: 1 });

        let e1 = rx1.recv().await.unwrap();
        let e2 = rx2.recv().await.unwrap();
        assert!(matches!(e1, SessionEvent::NoLegalPairs { remaining: 1 }));
        assert!(matches!(e2, SessionEvent::NoLegalPairs { remaining: 1 }));
    }

    #[tokio::test]
    async fn events_arrive_in_order() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(SessionEvent::PersonAdded("jake".into()));
        bus.publish(SessionEvent::PairCommitted {
            first: "jake".into(),
            second: "pranavi".into(),
        });
        bus.publish(SessionEvent::PersonRemoved("nathan".into()));

        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::PersonAdded(ref n) if n == "jake"));
        assert!(matches!(
            rx.recv().await.unwrap(),
            SessionEvent::PairCommitted { ref first, ref second } if first == "jake" && second == "pranavi"
        ));
        assert!(matches!(rx.recv().await.unwrap(), SessionEvent::PersonRemoved(ref n) if n == "nathan"));
    }

    #[test]
    fn publish_returns_zero_with_no_subscribers() {
        let bus = EventBus::new(16);
        assert_eq!(bus.publish(SessionEvent::RoundAborted { reason: "reset".into() }), 0);
    }

    #[test]
    fn publish_returns_subscriber_count() {
        let bus = EventBus::default();
        let _rx1 = bus.subscribe();
        let _rx2 = bus.subscribe();
        assert_eq!(bus.publish(SessionEvent::DrawStalled { attempts: 3 }), 2);
    }

    #[test]
    fn json_shape_is_tagged() {
        let event = SessionEvent::PairCommitted {
            first: "a".into(),
            second: "b".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"PairCommitted","data":{"first":"a","second":"b"}}"#
        );
    }

    #[test]
    fn unknown_event_deserializes() {
        let json = r#"{"type":"SomethingNew","data":null}"#;
        let event: SessionEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event, SessionEvent::Unknown);
    }
}
