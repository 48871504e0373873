use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{required, ApiResult};
use crate::broadcast::LiveEvent;
use crate::extract::ApiJson;
use crate::models::{Activity, StatsUpdate};
use crate::state::AppState;

pub async fn get_stats(State(state): State<Arc<AppState>>) -> ApiResult {
  let stats = state.store.stats().await?;
  let activities = state.store.recent_activities().await?;
  Ok(Json(json!({
    "success": true,
    "stats": stats,
    "activities": activities,
  })))
}

pub async fn update_stats(
  State(state): State<Arc<AppState>>,
  ApiJson(update): ApiJson<StatsUpdate>,
) -> ApiResult {
  let stats = update.into_stats();
  state.store.update_stats(stats.clone()).await?;
  info!(total_views = stats.total_views, "dashboard stats updated");

  state
    .events
    .publish(LiveEvent::new("dashboard_update", serde_json::to_value(&stats).unwrap_or_default()));
  Ok(Json(json!({ "success": true, "message": "Stats updated" })))
}

#[derive(Debug, Deserialize)]
pub struct ActivityRequest {
  #[serde(rename = "type", default = "default_kind")]
  pub kind: String,
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
}

fn default_kind() -> String {
  "custom".to_string()
}

pub async fn log_activity(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<ActivityRequest>,
) -> ApiResult {
  let title = required(&req.title, "Title is required")?;
  let activity = Activity::new(&req.kind, title, req.description);
  state.store.add_activity(activity.clone()).await?;

  state
    .events
    .publish(LiveEvent::new("activity", serde_json::to_value(&activity).unwrap_or_default()));
  Ok(Json(json!({ "success": true, "activity": activity })))
}
