use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;
use tracing::info;

use super::ApiResult;
use crate::broadcast::LiveEvent;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::models::{Activity, Counter};
use crate::planning::ThumbnailDraft;
use crate::state::AppState;

pub async fn save(
  State(state): State<Arc<AppState>>,
  ApiJson(draft): ApiJson<ThumbnailDraft>,
) -> ApiResult {
  let given_name = draft
    .name
    .as_deref()
    .map(str::trim)
    .filter(|n| !n.is_empty())
    .map(str::to_string);
  let saved = state.store.save_thumbnail(draft).await?;
  if saved.created {
    state.store.bump_counter(Counter::ThumbnailsCreated, 1).await?;
  }
  state
    .store
    .add_activity(Activity::new(
      "thumbnail_created",
      given_name.as_deref().unwrap_or("Thumbnail created"),
      format!("Thumbnail ID: {}", saved.id),
    ))
    .await?;

  info!(thumbnail_id = %saved.id, created = saved.created, "thumbnail saved");
  state.events.publish(LiveEvent::new(
    "thumbnail_saved",
    json!({ "id": saved.id, "name": given_name }),
  ));
  Ok(Json(json!({ "success": true, "id": saved.id })))
}

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult {
  let thumbnails = state.store.list_thumbnails().await?;
  Ok(Json(json!({ "success": true, "thumbnails": thumbnails })))
}

pub async fn get(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult {
  let thumbnail = state
    .store
    .get_thumbnail(&id)
    .await?
    .ok_or(ApiError::NotFound("Thumbnail not found"))?;
  Ok(Json(json!({ "success": true, "thumbnail": thumbnail })))
}
