use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;
use tracing::info;

use super::{ApiResult, RangeQuery};
use crate::broadcast::LiveEvent;
use crate::dates::parse_day;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::models::Activity;
use crate::planning::NewCalendarEvent;
use crate::state::AppState;

pub async fn list(
  State(state): State<Arc<AppState>>,
  ApiQuery(query): ApiQuery<RangeQuery>,
) -> ApiResult {
  let events = state.store.calendar_events(query.range()?).await?;
  Ok(Json(json!({ "success": true, "events": events })))
}

pub async fn create(
  State(state): State<Arc<AppState>>,
  ApiJson(mut new): ApiJson<NewCalendarEvent>,
) -> ApiResult {
  new.title = new.title.trim().to_string();
  new.date = new.date.trim().to_string();
  if new.title.is_empty() || new.date.is_empty() {
    return Err(ApiError::validation("Title and date are required"));
  }
  if parse_day(&new.date).is_none() {
    return Err(ApiError::validation(format!("Invalid date: {}", new.date)));
  }

  let event = new.into_event();
  let activity = Activity::new(
    "calendar_event",
    format!("Scheduled: {}", event.title),
    format!("Date: {}", event.date),
  );
  let live = LiveEvent::new(
    "calendar_event",
    json!({ "id": event.id, "title": event.title, "date": event.date }),
  );
  let id = state.store.add_calendar_event(event).await?;
  state.store.add_activity(activity).await?;

  info!(event_id = %id, "calendar event scheduled");
  state.events.publish(live);
  Ok(Json(json!({ "success": true, "id": id })))
}
