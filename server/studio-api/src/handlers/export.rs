use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::ApiResult;
use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

const EXPORT_DISPOSITION: &str = "attachment; filename=tubevision-export.json";

pub async fn export(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
  let snapshot = state.store.export().await?;
  Ok(([(header::CONTENT_DISPOSITION, EXPORT_DISPOSITION)], Json(snapshot)).into_response())
}

#[derive(Debug, Deserialize)]
pub struct ImportRequest {
  pub data: Option<Value>,
}

pub async fn import(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<ImportRequest>,
) -> ApiResult {
  let data = req
    .data
    .filter(|d| !d.is_null())
    .ok_or_else(|| ApiError::validation("Data is required"))?;
  state.store.import(data).await?;
  Ok(Json(json!({ "success": true, "message": "Data imported successfully" })))
}
