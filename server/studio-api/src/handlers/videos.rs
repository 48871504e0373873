use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;
use tracing::info;

use super::{required, ApiResult};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::models::{Activity, NewVideo, VideoUpdate};
use crate::state::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult {
  let videos = state.store.list_videos().await?;
  Ok(Json(json!({ "success": true, "videos": videos })))
}

pub async fn create(
  State(state): State<Arc<AppState>>,
  ApiJson(mut new): ApiJson<NewVideo>,
) -> ApiResult {
  new.title = required(&new.title, "Title is required")?;
  let video = new.into_video();
  let activity = Activity::new(
    "video_added",
    format!("Video added: {}", video.title),
    format!("Status: {}", video.status),
  );
  let id = state.store.add_video(video).await?;
  state.store.add_activity(activity).await?;

  info!(video_id = %id, "video added");
  Ok(Json(json!({ "success": true, "id": id })))
}

pub async fn update(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  ApiJson(patch): ApiJson<VideoUpdate>,
) -> ApiResult {
  let video = state
    .store
    .update_video(&id, patch)
    .await?
    .ok_or(ApiError::NotFound("Video not found"))?;
  Ok(Json(json!({ "success": true, "video": video })))
}
