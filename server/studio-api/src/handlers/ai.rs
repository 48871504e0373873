use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{required, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

pub async fn status(State(state): State<Arc<AppState>>) -> ApiResult {
  let enabled = state.assistant.enabled();
  let message = if enabled {
    "AI features are enabled"
  } else {
    "AI features are disabled. Set OPENAI_API_KEY to enable."
  };
  Ok(Json(json!({ "success": true, "enabled": enabled, "message": message })))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: String,
}

pub async fn seo_suggestions(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<SuggestionRequest>,
) -> ApiResult {
  let title = required(&req.title, "Title is required")?;
  let suggestions = state
    .assistant
    .seo_suggestions(&title, &req.description)
    .await?;
  Ok(Json(json!({
    "success": true,
    "suggestions": suggestions,
    "aiUsed": state.assistant.enabled(),
  })))
}
