use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{required, ApiResult, RangeQuery};
use crate::extract::{ApiJson, ApiQuery};
use crate::planning::{revenue_totals, NewRevenue, RevenueEstimate};
use crate::state::AppState;

pub async fn list(
  State(state): State<Arc<AppState>>,
  ApiQuery(query): ApiQuery<RangeQuery>,
) -> ApiResult {
  let revenue = state.store.revenue(query.range()?).await?;
  let (total, by_source) = revenue_totals(&revenue);
  Ok(Json(json!({
    "success": true,
    "revenue": revenue,
    "total": total,
    "bySource": by_source,
  })))
}

pub async fn create(
  State(state): State<Arc<AppState>>,
  ApiJson(mut new): ApiJson<NewRevenue>,
) -> ApiResult {
  new.date = required(&new.date, "Date is required")?;
  let id = state.store.add_revenue(new.into_entry()).await?;
  Ok(Json(json!({ "success": true, "id": id })))
}

/// Figures may arrive as numbers or numeric strings.
#[derive(Debug, Default, Deserialize)]
pub struct EstimateRequest {
  pub views: Option<Value>,
  pub cpm: Option<Value>,
  pub rpm: Option<Value>,
}

fn number(value: Option<&Value>) -> Option<f64> {
  match value? {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }
}

pub async fn calculate(ApiJson(req): ApiJson<EstimateRequest>) -> ApiResult {
  let estimate = RevenueEstimate::calculate(
    number(req.views.as_ref()),
    number(req.cpm.as_ref()),
    number(req.rpm.as_ref()),
  );
  Ok(Json(json!({
    "success": true,
    "estimated_revenue": estimate.estimated_revenue,
    "estimated_cpm": estimate.estimated_cpm,
    "views": estimate.views,
  })))
}
