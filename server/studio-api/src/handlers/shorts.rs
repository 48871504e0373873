use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use seo_engine::shorts_hashtags;
use serde::Deserialize;
use serde_json::json;

use super::{required, ApiResult};
use crate::extract::ApiJson;
use crate::models::Activity;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HashtagRequest {
  #[serde(default)]
  pub topic: String,
}

pub async fn generate(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<HashtagRequest>,
) -> ApiResult {
  let topic = required(&req.topic, "Topic is required")?;
  let tags = shorts_hashtags(&topic);
  state
    .store
    .add_activity(Activity::new(
      "hashtags_generated",
      format!("Generated hashtags for: {}", topic),
      format!("{} tags", tags.len()),
    ))
    .await?;
  Ok(Json(json!({
    "success": true,
    "tagString": tags.join(" "),
    "tags": tags,
  })))
}
