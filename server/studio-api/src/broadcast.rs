//! Live event fan-out to connected dashboard clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::debug;

/// One message pushed to every WebSocket client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveEvent {
  #[serde(rename = "type")]
  pub kind: String,
  pub data: Value,
  pub timestamp: DateTime<Utc>,
}

impl LiveEvent {
  pub fn new(kind: &str, data: Value) -> Self {
    Self {
      kind: kind.to_string(),
      data,
      timestamp: Utc::now(),
    }
  }

  /// A client-sent text frame becomes an `update` event; non-JSON frames are rejected.
  pub fn from_client_text(text: &str) -> Result<Self, serde_json::Error> {
    let data: Value = serde_json::from_str(text)?;
    Ok(Self::new("update", data))
  }
}

#[derive(Clone)]
pub struct Broadcaster {
  tx: broadcast::Sender<LiveEvent>,
}

impl Broadcaster {
  pub fn new(capacity: usize) -> Self {
    let (tx, _) = broadcast::channel(capacity);
    Self { tx }
  }

  /// Send to all subscribers; a no-op when nobody is connected.
  pub fn publish(&self, event: LiveEvent) {
    match self.tx.send(event) {
      Ok(n) => debug!(clients = n, "live event published"),
      Err(_) => debug!("live event dropped, no clients"),
    }
  }

  pub fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
    self.tx.subscribe()
  }

  pub fn client_count(&self) -> usize {
    self.tx.receiver_count()
  }
}

impl Default for Broadcaster {
  fn default() -> Self {
    Self::new(100)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[tokio::test]
  async fn subscribers_receive_published_events() {
    let events = Broadcaster::new(8);
    let mut a = events.subscribe();
    let mut b = events.subscribe();
    assert_eq!(events.client_count(), 2);

    events.publish(LiveEvent::new("seo_audit", json!({ "score": 80 })));

    let got_a = a.recv().await.unwrap();
    let got_b = b.recv().await.unwrap();
    assert_eq!(got_a.kind, "seo_audit");
    assert_eq!(got_b.data["score"], 80);
  }

  #[test]
  fn publish_without_clients_is_harmless() {
    let events = Broadcaster::default();
    events.publish(LiveEvent::new("activity", Value::Null));
    assert_eq!(events.client_count(), 0);
  }

  #[test]
  fn client_text_becomes_update_event() {
    let event = LiveEvent::from_client_text(r#"{"page":"seo"}"#).unwrap();
    assert_eq!(event.kind, "update");
    assert_eq!(event.data["page"], "seo");
    assert!(LiveEvent::from_client_text("not json").is_err());

    let wire = serde_json::to_value(&event).unwrap();
    assert_eq!(wire["type"], "update");
  }
}
