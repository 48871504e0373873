use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;
use tracing::info;

use super::youtube::ChannelRequest;
use super::{required, ApiResult};
use crate::broadcast::LiveEvent;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::models::Activity;
use crate::planning::NewCompetitor;
use crate::state::AppState;

pub async fn add(
  State(state): State<Arc<AppState>>,
  ApiJson(mut new): ApiJson<NewCompetitor>,
) -> ApiResult {
  new.name = required(&new.name, "Name is required")?;
  let competitor = new.into_competitor();
  let avg_views = match competitor.avg_views {
    0 => "N/A".to_string(),
    n => n.to_string(),
  };
  let activity = Activity::new(
    "competitor_added",
    format!("Added competitor: {}", competitor.name),
    format!("Avg views: {}", avg_views),
  );
  let event = LiveEvent::new(
    "competitor_added",
    json!({
      "id": competitor.id,
      "name": competitor.name,
      "avg_views": competitor.avg_views,
    }),
  );
  let id = state.store.add_competitor(competitor).await?;
  state.store.add_activity(activity).await?;

  info!(competitor_id = %id, "competitor added");
  state.events.publish(event);
  Ok(Json(json!({ "success": true, "id": id })))
}

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult {
  let competitors = state.store.list_competitors().await?;
  Ok(Json(json!({ "success": true, "competitors": competitors })))
}

pub async fn analyze(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<ChannelRequest>,
) -> ApiResult {
  let channel_id = req.resolve()?;
  let stats = state
    .youtube
    .channel_stats(&channel_id)
    .await?
    .ok_or(ApiError::NotFound("Channel not found"))?;
  Ok(Json(json!({
    "success": true,
    "analysis": {
      "channel_name": stats.name,
      "subscriber_count": stats.subscriber_count,
      "total_views": stats.view_count,
      "video_count": stats.video_count,
      "avg_views_per_video": stats.avg_views_per_video(),
      "thumbnail": stats.thumbnail,
      "apiUsed": state.youtube.enabled(),
    },
  })))
}
