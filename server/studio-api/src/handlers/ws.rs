//! Live channel: pushes every published event to the client and rebroadcasts client JSON.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::broadcast::LiveEvent;
use crate::state::AppState;

pub async fn upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
  ws.on_upgrade(move |socket| client_session(socket, state))
}

async fn client_session(socket: WebSocket, state: Arc<AppState>) {
  let (mut sender, mut receiver) = socket.split();
  let mut events = state.events.subscribe();
  info!(clients = state.events.client_count(), "websocket client connected");

  let hello = json!({
    "type": "connected",
    "message": "Connected to creator studio live updates",
  });
  if sender.send(Message::Text(hello.to_string())).await.is_err() {
    return;
  }

  let mut push = tokio::spawn(async move {
    loop {
      match events.recv().await {
        Ok(event) => {
          let text = match serde_json::to_string(&event) {
            Ok(t) => t,
            Err(e) => {
              warn!(error = %e, "failed to serialize live event");
              continue;
            }
          };
          if sender.send(Message::Text(text)).await.is_err() {
            break;
          }
        }
        Err(RecvError::Lagged(skipped)) => warn!(skipped, "websocket client lagging"),
        Err(RecvError::Closed) => break,
      }
    }
  });

  let events = state.events.clone();
  let mut pull = tokio::spawn(async move {
    while let Some(Ok(message)) = receiver.next().await {
      match message {
        Message::Text(text) => match LiveEvent::from_client_text(&text) {
          Ok(event) => events.publish(event),
          Err(e) => debug!(error = %e, "ignoring non-JSON websocket message"),
        },
        Message::Close(_) => break,
        _ => {}
      }
    }
  });

  tokio::select! {
    _ = &mut push => pull.abort(),
    _ = &mut pull => push.abort(),
  }
  info!("websocket client disconnected");
}
