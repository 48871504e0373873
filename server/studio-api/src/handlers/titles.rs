use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use seo_engine::{rank_titles, score_title, template_titles};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::{required, ApiResult};
use crate::broadcast::LiveEvent;
use crate::extract::{ApiJson, ApiQuery};
use crate::models::{new_id, Activity, Counter, TitleRecord};
use crate::state::AppState;

const AI_TITLE_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
  #[serde(default)]
  pub topic: String,
  #[serde(default = "default_use_ai")]
  pub use_ai: bool,
}

fn default_use_ai() -> bool {
  true
}

pub async fn generate(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<GenerateRequest>,
) -> ApiResult {
  let topic = required(&req.topic, "Topic is required")?;
  let ai_enabled = state.assistant.enabled();

  let mut candidates = Vec::new();
  if req.use_ai && ai_enabled {
    match state.assistant.titles(&topic, AI_TITLE_COUNT).await {
      Ok(titles) => candidates = titles,
      Err(e) => warn!(error = %e, topic = %topic, "AI title generation failed, using templates"),
    }
  }
  let ai_used = !candidates.is_empty();
  if !ai_used {
    candidates = template_titles(&topic);
  }

  let now = Utc::now();
  let records: Vec<TitleRecord> = rank_titles(candidates)
    .into_iter()
    .map(|t| TitleRecord {
      id: new_id(),
      topic: topic.clone(),
      title: t.title,
      score: t.score,
      created_at: now,
    })
    .collect();
  let count = records.len();

  state.store.save_titles(records.clone()).await?;
  state
    .store
    .bump_counter(Counter::TitlesGenerated, count as u64)
    .await?;
  state
    .store
    .add_activity(Activity::new(
      "title_generated",
      format!("Generated {} titles", count),
      format!("Topic: {}", topic),
    ))
    .await?;

  info!(topic = %topic, count, ai_used, "titles generated");
  state.events.publish(LiveEvent::new(
    "titles_generated",
    json!({ "topic": topic, "count": count }),
  ));

  let titles: Vec<_> = records
    .iter()
    .map(|r| json!({ "id": r.id, "title": r.title, "score": r.score }))
    .collect();
  Ok(Json(json!({
    "success": true,
    "titles": titles,
    "aiEnabled": ai_enabled,
    "aiUsed": ai_used,
  })))
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
  pub topic: Option<String>,
}

pub async fn history(
  State(state): State<Arc<AppState>>,
  ApiQuery(query): ApiQuery<HistoryQuery>,
) -> ApiResult {
  let topic = query.topic.as_deref().map(str::trim).filter(|t| !t.is_empty());
  let titles = state.store.titles_by_topic(topic).await?;
  Ok(Json(json!({ "success": true, "titles": titles })))
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
  #[serde(default)]
  pub title: String,
}

pub async fn score(ApiJson(req): ApiJson<ScoreRequest>) -> ApiResult {
  let title = required(&req.title, "Title is required")?;
  let score = score_title(&title);
  Ok(Json(json!({ "success": true, "title": title, "score": score })))
}
