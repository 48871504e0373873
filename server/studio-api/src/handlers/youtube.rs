use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::{required, ApiResult};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;
use crate::youtube::extract_channel_id;

const DEFAULT_REGION: &str = "US";
const DEFAULT_KEYWORD_LIMIT: usize = 10;
const MAX_KEYWORD_LIMIT: usize = 50;

pub async fn status(State(state): State<Arc<AppState>>) -> ApiResult {
  let enabled = state.youtube.enabled();
  let message = if enabled {
    "YouTube API is enabled"
  } else {
    "YouTube API is disabled, serving simulated data. Set YOUTUBE_API_KEY to enable."
  };
  Ok(Json(json!({ "success": true, "enabled": enabled, "message": message })))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRequest {
  pub url: Option<String>,
  pub channel_id: Option<String>,
}

impl ChannelRequest {
  /// An explicit id wins over one parsed from the URL.
  pub(crate) fn resolve(&self) -> Result<String, ApiError> {
    match (self.channel_id.as_deref().map(str::trim), self.url.as_deref()) {
      (Some(id), _) if !id.is_empty() => Ok(id.to_string()),
      (_, Some(url)) if !url.trim().is_empty() => extract_channel_id(url)
        .ok_or_else(|| ApiError::validation("Could not extract channel ID from URL")),
      _ => Err(ApiError::validation("Channel URL or ID is required")),
    }
  }
}

pub async fn analyze_channel(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<ChannelRequest>,
) -> ApiResult {
  let channel_id = req.resolve()?;
  let stats = state
    .youtube
    .channel_stats(&channel_id)
    .await?
    .ok_or(ApiError::NotFound("Channel not found"))?;
  info!(channel_id = %channel_id, "channel analyzed");
  Ok(Json(json!({
    "success": true,
    "channelId": channel_id,
    "stats": stats,
    "apiUsed": state.youtube.enabled(),
  })))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStatsRequest {
  #[serde(default)]
  pub video_id: String,
}

pub async fn video_stats(
  State(state): State<Arc<AppState>>,
  ApiJson(req): ApiJson<VideoStatsRequest>,
) -> ApiResult {
  let video_id = required(&req.video_id, "Video ID is required")?;
  let stats = state
    .youtube
    .video_stats(&video_id)
    .await?
    .ok_or(ApiError::NotFound("Video not found"))?;
  Ok(Json(json!({
    "success": true,
    "videoId": video_id,
    "stats": stats,
    "apiUsed": state.youtube.enabled(),
  })))
}

#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
  pub region: Option<String>,
  pub limit: Option<usize>,
}

pub async fn trending_keywords(
  State(state): State<Arc<AppState>>,
  ApiQuery(query): ApiQuery<TrendingQuery>,
) -> ApiResult {
  let region = query
    .region
    .filter(|r| !r.trim().is_empty())
    .unwrap_or_else(|| DEFAULT_REGION.to_string());
  let limit = query
    .limit
    .unwrap_or(DEFAULT_KEYWORD_LIMIT)
    .clamp(1, MAX_KEYWORD_LIMIT);

  let keywords = state.youtube.trending_keywords(&region, limit).await?;
  Ok(Json(json!({
    "success": true,
    "region": region,
    "keywords": keywords,
    "apiUsed": state.youtube.enabled(),
  })))
}
