//! HTTP handlers, one module per dashboard area.

use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::dates::DateRange;
use crate::error::ApiError;

pub mod ai;
pub mod analytics;
pub mod calendar;
pub mod competitors;
pub mod dashboard;
pub mod export;
pub mod ideas;
pub mod keywords;
pub mod revenue;
pub mod scripts;
pub mod seo;
pub mod shorts;
pub mod thumbnails;
pub mod titles;
pub mod videos;
pub mod ws;
pub mod youtube;

pub type ApiResult = Result<Json<Value>, ApiError>;

pub async fn health() -> Json<Value> {
  Json(json!({ "status": "ok", "timestamp": Utc::now() }))
}

/// Trimmed copy of a required text field, or a 400 naming it.
pub(crate) fn required(value: &str, message: &str) -> Result<String, ApiError> {
  let trimmed = value.trim();
  if trimmed.is_empty() {
    return Err(ApiError::validation(message));
  }
  Ok(trimmed.to_string())
}

/// `?startDate=&endDate=` on the calendar, analytics and revenue listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeQuery {
  pub start_date: Option<String>,
  pub end_date: Option<String>,
}

impl RangeQuery {
  pub(crate) fn range(&self) -> Result<Option<DateRange>, ApiError> {
    DateRange::from_bounds(self.start_date.as_deref(), self.end_date.as_deref())
      .map_err(ApiError::Validation)
  }
}
