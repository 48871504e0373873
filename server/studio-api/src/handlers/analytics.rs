use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use super::{required, ApiResult, RangeQuery};
use crate::extract::{ApiJson, ApiQuery};
use crate::planning::{AnalyticsTotals, NewAnalytics};
use crate::state::AppState;

pub async fn list(
  State(state): State<Arc<AppState>>,
  ApiQuery(query): ApiQuery<RangeQuery>,
) -> ApiResult {
  let analytics = state.store.analytics(query.range()?).await?;
  let totals = AnalyticsTotals::of(&analytics);
  Ok(Json(json!({ "success": true, "analytics": analytics, "totals": totals })))
}

pub async fn create(
  State(state): State<Arc<AppState>>,
  ApiJson(mut new): ApiJson<NewAnalytics>,
) -> ApiResult {
  new.date = required(&new.date, "Date is required")?;
  let id = state.store.add_analytics(new.into_entry()).await?;
  Ok(Json(json!({ "success": true, "id": id })))
}
