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
use crate::planning::ScriptDraft;
use crate::state::AppState;

pub async fn save(
  State(state): State<Arc<AppState>>,
  ApiJson(draft): ApiJson<ScriptDraft>,
) -> ApiResult {
  let given_title = draft
    .title
    .as_deref()
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .map(str::to_string);
  let saved = state.store.save_script(draft).await?;
  if saved.created {
    state.store.bump_counter(Counter::ScriptsCreated, 1).await?;
  }
  state
    .store
    .add_activity(Activity::new(
      "script_saved",
      given_title.as_deref().unwrap_or("Script saved"),
      format!("Script ID: {}", saved.id),
    ))
    .await?;

  info!(script_id = %saved.id, created = saved.created, "script saved");
  state.events.publish(LiveEvent::new(
    "script_saved",
    json!({ "id": saved.id, "title": given_title }),
  ));
  Ok(Json(json!({ "success": true, "id": saved.id })))
}

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult {
  let scripts = state.store.list_scripts().await?;
  Ok(Json(json!({ "success": true, "scripts": scripts })))
}

pub async fn get(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult {
  let script = state
    .store
    .get_script(&id)
    .await?
    .ok_or(ApiError::NotFound("Script not found"))?;
  Ok(Json(json!({ "success": true, "script": script })))
}

pub async fn delete(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult {
  if !state.store.delete_script(&id).await? {
    return Err(ApiError::NotFound("Script not found"));
  }
  info!(script_id = %id, "script deleted");
  Ok(Json(json!({ "success": true, "message": "Script deleted" })))
}
