use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;
use tracing::info;

use super::{required, ApiResult};
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::models::{Activity, IdeaUpdate, NewIdea};
use crate::state::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult {
  let ideas = state.store.list_ideas().await?;
  Ok(Json(json!({ "success": true, "ideas": ideas })))
}

pub async fn create(
  State(state): State<Arc<AppState>>,
  ApiJson(mut new): ApiJson<NewIdea>,
) -> ApiResult {
  new.title = required(&new.title, "Title is required")?;
  let idea = new.into_idea();
  let activity = Activity::new(
    "idea_added",
    format!("New idea: {}", idea.title),
    format!("Category: {}", idea.category),
  );
  let id = state.store.add_idea(idea).await?;
  state.store.add_activity(activity).await?;

  info!(idea_id = %id, "idea added");
  Ok(Json(json!({ "success": true, "id": id })))
}

pub async fn update(
  State(state): State<Arc<AppState>>,
  Path(id): Path<String>,
  ApiJson(patch): ApiJson<IdeaUpdate>,
) -> ApiResult {
  let idea = state
    .store
    .update_idea(&id, patch)
    .await?
    .ok_or(ApiError::NotFound("Idea not found"))?;
  Ok(Json(json!({ "success": true, "idea": idea })))
}
