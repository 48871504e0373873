use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{required, ApiResult};
use crate::extract::ApiJson;
use crate::research::research_keyword;
use crate::state::AppState;

pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult {
  let keywords = state.store.list_keywords().await?;
  Ok(Json(json!({ "success": true, "keywords": keywords })))
}

#[derive(Debug, Deserialize)]
pub struct ResearchRequest {
  #[serde(default)]
  pub keyword: String,
}

pub async fn research(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<ResearchRequest>,
) -> ApiResult {
  let keyword = required(&req.keyword, "Keyword is required")?;
  let estimate = research_keyword(state.youtube.as_ref(), &keyword).await;
  let research = estimate.research;
  let id = state.store.save_keyword(research.clone()).await?;

  info!(keyword = %keyword, api_used = estimate.api_used, "keyword researched");
  Ok(Json(json!({
    "success": true,
    "keyword": {
      "id": id,
      "keyword": research.keyword,
      "search_volume": research.search_volume,
      "competition": research.competition,
      "cpc": research.cpc,
      "apiUsed": estimate.api_used,
    },
  })))
}
