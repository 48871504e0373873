//! Shared application state for the HTTP handlers.

use std::sync::Arc;

use crate::ai::{Assistant, OfflineAssistant};
use crate::broadcast::Broadcaster;
use crate::store::{JsonFileStore, Store};
use crate::youtube::{ChannelDirectory, SimulatedDirectory};

pub struct AppState {
  pub store: Arc<dyn Store>,
  pub events: Broadcaster,
  pub assistant: Arc<dyn Assistant>,
  pub youtube: Arc<dyn ChannelDirectory>,
}

impl AppState {
  pub fn new(
    store: Arc<dyn Store>,
    assistant: Arc<dyn Assistant>,
    youtube: Arc<dyn ChannelDirectory>,
  ) -> Self {
    Self {
      store,
      events: Broadcaster::default(),
      assistant,
      youtube,
    }
  }

  /// In-memory store with the offline assistant and simulated YouTube data.
  pub fn offline() -> Self {
    Self::new(
      Arc::new(JsonFileStore::in_memory()),
      Arc::new(OfflineAssistant),
      Arc::new(SimulatedDirectory),
    )
  }
}
