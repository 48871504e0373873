use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use seo_engine::AuditInput;
use serde_json::json;
use tracing::info;

use super::ApiResult;
use crate::broadcast::LiveEvent;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::models::{new_id, Activity, SeoAuditRecord};
use crate::state::AppState;

/// Score the metadata and keep the result; the audit itself never rejects input.
pub async fn run_audit(
  State(state): State<Arc<AppState>>,
  ApiJson(input): ApiJson<AuditInput>,
) -> ApiResult {
  let report = seo_engine::audit(&input);
  let score = report.score_percentage;

  let record = SeoAuditRecord {
    id: new_id(),
    title: input.title,
    description: input.description,
    tags: input.tags,
    score,
    results: report.results,
    created_at: Utc::now(),
  };
  let id = record.id.clone();
  let results = record.results.clone();
  state.store.save_audit(record).await?;
  state
    .store
    .add_activity(Activity::new(
      "seo_audit",
      "SEO Audit completed",
      format!("Score: {}/100", score),
    ))
    .await?;

  info!(audit_id = %id, score, "seo audit completed");
  state
    .events
    .publish(LiveEvent::new("seo_audit", json!({ "id": id, "score": score })));

  Ok(Json(json!({
    "success": true,
    "score": score,
    "results": results,
    "id": id,
  })))
}

pub async fn history(State(state): State<Arc<AppState>>) -> ApiResult {
  let audits = state.store.recent_audits().await?;
  Ok(Json(json!({ "success": true, "audits": audits })))
}

pub async fn get_audit(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> ApiResult {
  let audit = state
    .store
    .get_audit(&id)
    .await?
    .ok_or(ApiError::NotFound("Audit not found"))?;
  Ok(Json(json!({ "success": true, "audit": audit })))
}
