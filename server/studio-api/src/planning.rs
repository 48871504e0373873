//! Content-planning records: scripts, thumbnails, competitors, the publishing
//! calendar, analytics and revenue entries, and keyword research.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dates::parse_day;
use crate::models::new_id;

/// Result of an upsert: the record id and whether a new record was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Saved {
  pub id: String,
  pub created: bool,
}

// ---------------------------------------------------------------------------
// Scripts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Script {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub hook: String,
  #[serde(default)]
  pub intro: String,
  #[serde(default)]
  pub content: String,
  #[serde(default)]
  pub cta: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/scripts/save`. With an `id` it overwrites that script.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptDraft {
  pub id: Option<String>,
  pub title: Option<String>,
  #[serde(default)]
  pub hook: String,
  #[serde(default)]
  pub intro: String,
  #[serde(default)]
  pub content: String,
  #[serde(default)]
  pub cta: String,
}

impl ScriptDraft {
  pub fn title(&self) -> &str {
    self
      .title
      .as_deref()
      .map(str::trim)
      .filter(|t| !t.is_empty())
      .unwrap_or("Untitled Script")
  }

  /// Write the draft over `script`, keeping its id and creation time.
  pub fn apply(&self, script: &mut Script) {
    script.title = self.title().to_string();
    script.hook = self.hook.clone();
    script.intro = self.intro.clone();
    script.content = self.content.clone();
    script.cta = self.cta.clone();
    script.updated_at = Utc::now();
  }

  pub fn into_script(self, id: String) -> Script {
    let now = Utc::now();
    Script {
      id,
      title: self.title().to_string(),
      hook: self.hook,
      intro: self.intro,
      content: self.content,
      cta: self.cta,
      created_at: now,
      updated_at: now,
    }
  }
}

// ---------------------------------------------------------------------------
// Thumbnails
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thumbnail {
  pub id: String,
  pub name: String,
  /// Editor settings, stored as given.
  #[serde(default = "empty_object")]
  pub settings: Value,
  #[serde(default)]
  pub image_data: String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

fn empty_object() -> Value {
  Value::Object(Default::default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThumbnailDraft {
  pub id: Option<String>,
  pub name: Option<String>,
  pub settings: Option<Value>,
  #[serde(default)]
  pub image_data: String,
}

impl ThumbnailDraft {
  pub fn name(&self) -> &str {
    self
      .name
      .as_deref()
      .map(str::trim)
      .filter(|n| !n.is_empty())
      .unwrap_or("Untitled Thumbnail")
  }

  fn settings(&self) -> Value {
    match &self.settings {
      Some(v) if !v.is_null() => v.clone(),
      _ => empty_object(),
    }
  }

  pub fn apply(&self, thumbnail: &mut Thumbnail) {
    thumbnail.name = self.name().to_string();
    thumbnail.settings = self.settings();
    thumbnail.image_data = self.image_data.clone();
    thumbnail.updated_at = Utc::now();
  }

  pub fn into_thumbnail(self, id: String) -> Thumbnail {
    let now = Utc::now();
    Thumbnail {
      id,
      name: self.name().to_string(),
      settings: self.settings(),
      image_data: self.image_data,
      created_at: now,
      updated_at: now,
    }
  }
}

// ---------------------------------------------------------------------------
// Competitors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub avg_views: u64,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCompetitor {
  #[serde(default)]
  pub name: String,
  pub url: Option<String>,
  pub avg_views: Option<u64>,
}

impl NewCompetitor {
  pub fn into_competitor(self) -> Competitor {
    Competitor {
      id: new_id(),
      name: self.name,
      url: self.url.unwrap_or_default(),
      avg_views: self.avg_views.unwrap_or(0),
      created_at: Utc::now(),
    }
  }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
  pub id: String,
  pub title: String,
  /// `YYYY-MM-DD`.
  pub date: String,
  pub time: String,
  #[serde(rename = "type")]
  pub kind: String,
  #[serde(default)]
  pub video_id: Option<String>,
  pub status: String,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCalendarEvent {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub date: String,
  pub time: Option<String>,
  #[serde(rename = "type")]
  pub kind: Option<String>,
  pub video_id: Option<String>,
}

impl NewCalendarEvent {
  pub fn into_event(self) -> CalendarEvent {
    CalendarEvent {
      id: new_id(),
      title: self.title,
      date: self.date,
      time: self.time.unwrap_or_else(|| "12:00".to_string()),
      kind: self.kind.unwrap_or_else(|| "publish".to_string()),
      video_id: self.video_id,
      status: "scheduled".to_string(),
      created_at: Utc::now(),
    }
  }
}

// ---------------------------------------------------------------------------
// Analytics + revenue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEntry {
  pub id: String,
  #[serde(default)]
  pub video_id: Option<String>,
  pub date: String,
  #[serde(default)]
  pub views: u64,
  /// Minutes watched.
  #[serde(default)]
  pub watch_time: f64,
  #[serde(default)]
  pub subscribers_gained: i64,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAnalytics {
  pub video_id: Option<String>,
  #[serde(default)]
  pub date: String,
  pub views: Option<u64>,
  pub watch_time: Option<f64>,
  pub subscribers_gained: Option<i64>,
}

impl NewAnalytics {
  pub fn into_entry(self) -> AnalyticsEntry {
    AnalyticsEntry {
      id: new_id(),
      video_id: self.video_id,
      date: self.date,
      views: self.views.unwrap_or(0),
      watch_time: self.watch_time.unwrap_or(0.0),
      subscribers_gained: self.subscribers_gained.unwrap_or(0),
      created_at: Utc::now(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticsTotals {
  pub views: u64,
  pub watch_time: f64,
  pub subscribers_gained: i64,
}

impl AnalyticsTotals {
  pub fn of(entries: &[AnalyticsEntry]) -> Self {
    entries.iter().fold(Self::default(), |mut acc, e| {
      acc.views += e.views;
      acc.watch_time += e.watch_time;
      acc.subscribers_gained += e.subscribers_gained;
      acc
    })
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueEntry {
  pub id: String,
  pub date: String,
  #[serde(default)]
  pub revenue: f64,
  pub source: String,
  #[serde(default)]
  pub video_id: Option<String>,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewRevenue {
  #[serde(default)]
  pub date: String,
  pub revenue: Option<f64>,
  pub source: Option<String>,
  pub video_id: Option<String>,
}

impl NewRevenue {
  pub fn into_entry(self) -> RevenueEntry {
    RevenueEntry {
      id: new_id(),
      date: self.date,
      revenue: self.revenue.unwrap_or(0.0),
      source: self
        .source
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "ads".to_string()),
      video_id: self.video_id,
      created_at: Utc::now(),
    }
  }
}

/// Grand total and per-source totals.
pub fn revenue_totals(entries: &[RevenueEntry]) -> (f64, BTreeMap<String, f64>) {
  let mut by_source = BTreeMap::new();
  let mut total = 0.0;
  for e in entries {
    total += e.revenue;
    *by_source.entry(e.source.clone()).or_insert(0.0) += e.revenue;
  }
  (total, by_source)
}

const DEFAULT_CPM: f64 = 2.5;
const DEFAULT_RPM: f64 = 2.0;

/// Ad revenue projection for a view count; zero or missing rates use the defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevenueEstimate {
  pub views: f64,
  pub estimated_cpm: f64,
  /// Two decimals, as shown on the dashboard.
  pub estimated_revenue: String,
}

impl RevenueEstimate {
  pub fn calculate(views: Option<f64>, cpm: Option<f64>, rpm: Option<f64>) -> Self {
    let rate = |v: Option<f64>, default: f64| v.filter(|r| *r != 0.0 && r.is_finite()).unwrap_or(default);
    let views = views.filter(|v| v.is_finite()).unwrap_or(0.0);
    let rpm = rate(rpm, DEFAULT_RPM);
    Self {
      views,
      estimated_cpm: rate(cpm, DEFAULT_CPM),
      estimated_revenue: format!("{:.2}", views / 1000.0 * rpm),
    }
  }
}

/// Newest date first; entries with unparseable dates go last.
pub fn sort_newest_first<T>(items: &mut [T], date: impl Fn(&T) -> &str) {
  items.sort_by_key(|item| std::cmp::Reverse(parse_day(date(item))));
}

// ---------------------------------------------------------------------------
// Keyword research
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
  Low,
  #[default]
  Medium,
  High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordResearch {
  pub id: String,
  pub keyword: String,
  #[serde(default)]
  pub search_volume: u64,
  #[serde(default)]
  pub competition: Competition,
  #[serde(default)]
  pub cpc: f64,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

/// Starter research rows for an empty database.
pub fn sample_keywords() -> Vec<KeywordResearch> {
  let now = Utc::now();
  let day = chrono::Duration::days(1);
  let sample = |id: &str, keyword: &str, volume, competition, cpc, age: i32| KeywordResearch {
    id: id.to_string(),
    keyword: keyword.to_string(),
    search_volume: volume,
    competition,
    cpc,
    created_at: now - day * age,
    updated_at: None,
  };
  vec![
    sample("kw-1", "javascript tutorial", 45_000, Competition::High, 2.5, 1),
    sample("kw-2", "react hooks", 28_000, Competition::Medium, 1.8, 2),
    sample("kw-3", "web development", 120_000, Competition::High, 3.2, 3),
  ]
}
