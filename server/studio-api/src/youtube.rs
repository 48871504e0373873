//! Channel and video lookups: YouTube Data API v3 when keyed, simulated figures otherwise.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ClientError;

const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3";

static CHANNEL_URL_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn channel_url_patterns() -> &'static [Regex] {
  CHANNEL_URL_PATTERNS.get_or_init(|| {
    [
      r"youtube\.com/channel/([a-zA-Z0-9_-]+)",
      r"youtube\.com/c/([a-zA-Z0-9_-]+)",
      r"youtube\.com/user/([a-zA-Z0-9_-]+)",
      r"youtube\.com/@([a-zA-Z0-9_-]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("channel url pattern is valid"))
    .collect()
  })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
  pub name: String,
  pub subscriber_count: u64,
  pub view_count: u64,
  pub video_count: u64,
  pub thumbnail: String,
}

impl ChannelStats {
  /// Rounded down; zero for a channel with no videos.
  pub fn avg_views_per_video(&self) -> u64 {
    self.view_count.checked_div(self.video_count).unwrap_or(0)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoStats {
  pub title: String,
  pub view_count: u64,
  pub like_count: u64,
  pub comment_count: u64,
  pub published_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCount {
  pub keyword: String,
  pub count: usize,
}

#[async_trait]
pub trait ChannelDirectory: Send + Sync {
  /// Whether this implementation talks to the real API.
  fn enabled(&self) -> bool;

  async fn channel_stats(&self, channel_id: &str) -> Result<Option<ChannelStats>, ClientError>;

  async fn video_stats(&self, video_id: &str) -> Result<Option<VideoStats>, ClientError>;

  async fn trending_keywords(
    &self,
    region: &str,
    limit: usize,
  ) -> Result<Vec<KeywordCount>, ClientError>;
}

pub fn directory_from_config(config: &Config) -> Result<Arc<dyn ChannelDirectory>, ClientError> {
  match &config.youtube_api_key {
    Some(key) => {
      info!("YouTube API enabled");
      Ok(Arc::new(YouTubeApi::new(key.clone())?))
    }
    None => {
      info!("YouTube API disabled (no YOUTUBE_API_KEY), using simulated data");
      Ok(Arc::new(SimulatedDirectory))
    }
  }
}

/// Channel id or handle from a channel URL (`/channel/`, `/c/`, `/user/`, `/@`).
pub fn extract_channel_id(url: &str) -> Option<String> {
  channel_url_patterns()
    .iter()
    .find_map(|re| re.captures(url))
    .and_then(|caps| caps.get(1))
    .map(|m| m.as_str().to_string())
}

/// Tag frequency, most common first; ties broken alphabetically.
pub fn rank_keywords<I>(tags: I, limit: usize) -> Vec<KeywordCount>
where
  I: IntoIterator<Item = String>,
{
  let mut counts: HashMap<String, usize> = HashMap::new();
  for tag in tags {
    *counts.entry(tag).or_insert(0) += 1;
  }
  let mut ranked: Vec<KeywordCount> = counts
    .into_iter()
    .map(|(keyword, count)| KeywordCount { keyword, count })
    .collect();
  ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
  ranked.truncate(limit);
  ranked
}

// ---------------------------------------------------------------------------
// YouTube Data API v3
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
  #[serde(default = "Vec::new")]
  items: Vec<T>,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
  #[serde(default)]
  default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
  url: String,
}

#[derive(Debug, Deserialize)]
struct ChannelItem {
  snippet: ChannelSnippet,
  #[serde(default)]
  statistics: Counts,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
  title: String,
  #[serde(default)]
  thumbnails: Thumbnails,
}

/// The API sends counts as decimal strings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Counts {
  subscriber_count: Option<String>,
  view_count: Option<String>,
  video_count: Option<String>,
  like_count: Option<String>,
  comment_count: Option<String>,
}

fn count(v: &Option<String>) -> u64 {
  v.as_deref().and_then(|s| s.parse().ok()).unwrap_or(0)
}

#[derive(Debug, Deserialize)]
struct VideoItem {
  snippet: VideoSnippet,
  #[serde(default)]
  statistics: Counts,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
  title: String,
  #[serde(default)]
  published_at: String,
  #[serde(default)]
  tags: Vec<String>,
}

pub struct YouTubeApi {
  http: reqwest::Client,
  api_key: String,
  base_url: String,
}

impl YouTubeApi {
  pub fn new(api_key: String) -> Result<Self, ClientError> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(30))
      .build()?;
    Ok(Self {
      http,
      api_key,
      base_url: YOUTUBE_API_BASE.to_string(),
    })
  }

  async fn list<T>(&self, resource: &str, query: &[(&str, &str)]) -> Result<Vec<T>, ClientError>
  where
    T: serde::de::DeserializeOwned + Send,
  {
    let url = format!("{}/{}", self.base_url, resource);
    debug!(resource, "youtube api request");
    let response = self
      .http
      .get(&url)
      .query(query)
      .query(&[("key", self.api_key.as_str())])
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(ClientError::Api {
        status: status.as_u16(),
        body,
      });
    }
    let parsed: ListResponse<T> = response.json().await?;
    Ok(parsed.items)
  }
}

#[async_trait]
impl ChannelDirectory for YouTubeApi {
  fn enabled(&self) -> bool {
    true
  }

  async fn channel_stats(&self, channel_id: &str) -> Result<Option<ChannelStats>, ClientError> {
    let items: Vec<ChannelItem> = self
      .list("channels", &[("part", "statistics,snippet"), ("id", channel_id)])
      .await?;
    Ok(items.into_iter().next().map(|c| ChannelStats {
      name: c.snippet.title,
      subscriber_count: count(&c.statistics.subscriber_count),
      view_count: count(&c.statistics.view_count),
      video_count: count(&c.statistics.video_count),
      thumbnail: c
        .snippet
        .thumbnails
        .default
        .map(|t| t.url)
        .unwrap_or_default(),
    }))
  }

  async fn video_stats(&self, video_id: &str) -> Result<Option<VideoStats>, ClientError> {
    let items: Vec<VideoItem> = self
      .list("videos", &[("part", "statistics,snippet"), ("id", video_id)])
      .await?;
    Ok(items.into_iter().next().map(|v| VideoStats {
      title: v.snippet.title,
      view_count: count(&v.statistics.view_count),
      like_count: count(&v.statistics.like_count),
      comment_count: count(&v.statistics.comment_count),
      published_at: v.snippet.published_at,
    }))
  }

  async fn trending_keywords(
    &self,
    region: &str,
    limit: usize,
  ) -> Result<Vec<KeywordCount>, ClientError> {
    let max_results = limit.to_string();
    let items: Vec<VideoItem> = self
      .list(
        "videos",
        &[
          ("part", "snippet"),
          ("chart", "mostPopular"),
          ("regionCode", region),
          ("maxResults", max_results.as_str()),
        ],
      )
      .await?;
    let tags = items.into_iter().flat_map(|v| v.snippet.tags);
    Ok(rank_keywords(tags, limit))
  }
}

// ---------------------------------------------------------------------------
// Simulated
// ---------------------------------------------------------------------------

/// Stable pseudo-figures keyed by id, so the dashboard works without an API key.
pub struct SimulatedDirectory;

const SAMPLE_TRENDING_TAGS: [&[&str]; 4] = [
  &["music", "official video", "pop"],
  &["gaming", "minecraft", "lets play"],
  &["music", "live", "concert"],
  &["tutorial", "how to", "gaming"],
];

pub(crate) fn seed(id: &str) -> u64 {
  let hash = blake3::hash(id.as_bytes());
  let mut bytes = [0u8; 8];
  bytes.copy_from_slice(&hash.as_bytes()[..8]);
  u64::from_le_bytes(bytes)
}

#[async_trait]
impl ChannelDirectory for SimulatedDirectory {
  fn enabled(&self) -> bool {
    false
  }

  async fn channel_stats(&self, channel_id: &str) -> Result<Option<ChannelStats>, ClientError> {
    if channel_id.trim().is_empty() {
      return Ok(None);
    }
    let s = seed(channel_id);
    let subscribers = 1_000 + s % 500_000;
    Ok(Some(ChannelStats {
      name: format!("Channel {}", channel_id),
      subscriber_count: subscribers,
      view_count: subscribers * (50 + (s >> 20) % 200),
      video_count: 10 + (s >> 40) % 400,
      thumbnail: String::new(),
    }))
  }

  async fn video_stats(&self, video_id: &str) -> Result<Option<VideoStats>, ClientError> {
    if video_id.trim().is_empty() {
      return Ok(None);
    }
    let s = seed(video_id);
    let views = 500 + s % 2_000_000;
    Ok(Some(VideoStats {
      title: format!("Video {}", video_id),
      view_count: views,
      like_count: views / (20 + (s >> 24) % 30),
      comment_count: views / (200 + (s >> 32) % 300),
      published_at: String::new(),
    }))
  }

  async fn trending_keywords(
    &self,
    _region: &str,
    limit: usize,
  ) -> Result<Vec<KeywordCount>, ClientError> {
    let tags = SAMPLE_TRENDING_TAGS
      .iter()
      .flat_map(|v| v.iter().map(|t| t.to_string()));
    Ok(rank_keywords(tags, limit))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extracts_ids_from_known_url_shapes() {
    assert_eq!(
      extract_channel_id("https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw").as_deref(),
      Some("UC_x5XG1OV2P6uZZ5FSM9Ttw")
    );
    assert_eq!(
      extract_channel_id("https://youtube.com/@veritasium").as_deref(),
      Some("veritasium")
    );
    assert_eq!(
      extract_channel_id("https://youtube.com/user/some-user/videos").as_deref(),
      Some("some-user")
    );
    assert_eq!(extract_channel_id("https://example.com/@someone"), None);
  }

  #[test]
  fn keywords_ranked_by_count_then_name() {
    let tags = ["b", "a", "c", "a", "b", "a"].map(String::from);
    let ranked = rank_keywords(tags, 2);
    assert_eq!(
      ranked,
      vec![
        KeywordCount { keyword: "a".into(), count: 3 },
        KeywordCount { keyword: "b".into(), count: 2 },
      ]
    );
  }

  #[test]
  fn average_views_handle_empty_channels() {
    let mut stats = ChannelStats {
      name: "c".into(),
      subscriber_count: 10,
      view_count: 1_000,
      video_count: 3,
      thumbnail: String::new(),
    };
    assert_eq!(stats.avg_views_per_video(), 333);
    stats.video_count = 0;
    assert_eq!(stats.avg_views_per_video(), 0);
  }

  #[tokio::test]
  async fn simulated_figures_are_stable() {
    let a = SimulatedDirectory.channel_stats("UC123").await.unwrap().unwrap();
    let b = SimulatedDirectory.channel_stats("UC123").await.unwrap().unwrap();
    assert_eq!(a, b);
    assert!(a.subscriber_count >= 1_000);
    assert!(SimulatedDirectory.channel_stats(" ").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn simulated_trending_uses_sample_tags() {
    let top = SimulatedDirectory.trending_keywords("US", 2).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].count, 2);
    assert_eq!(top[0].keyword, "gaming");
    assert_eq!(top[1].keyword, "music");
  }

  #[test]
  fn api_counts_parse_from_strings() {
    let item: ChannelItem = serde_json::from_str(
      r#"{"snippet":{"title":"Chan","thumbnails":{"default":{"url":"http://x"}}},
          "statistics":{"subscriberCount":"1200","viewCount":"bad"}}"#,
    )
    .unwrap();
    assert_eq!(count(&item.statistics.subscriber_count), 1200);
    assert_eq!(count(&item.statistics.view_count), 0);
    assert_eq!(count(&item.statistics.video_count), 0);
  }
}
