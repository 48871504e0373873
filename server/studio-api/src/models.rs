//! Records kept in the dashboard database and the request payloads that create them.

use chrono::{DateTime, Utc};
use seo_engine::FactorResult;
use serde::{Deserialize, Serialize};

pub fn new_id() -> String {
  uuid::Uuid::new_v4().to_string()
}

// ---------------------------------------------------------------------------
// Activity feed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
  pub id: String,
  #[serde(rename = "type")]
  pub kind: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
  pub timestamp: DateTime<Utc>,
}

impl Activity {
  pub fn new(kind: &str, title: impl Into<String>, description: impl Into<String>) -> Self {
    Self {
      id: new_id(),
      kind: kind.to_string(),
      title: title.into(),
      description: description.into(),
      timestamp: Utc::now(),
    }
  }
}

// ---------------------------------------------------------------------------
// Titles + audits
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleRecord {
  pub id: String,
  pub topic: String,
  pub title: String,
  pub score: u8,
  pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoAuditRecord {
  pub id: String,
  pub title: String,
  pub description: String,
  pub tags: String,
  pub score: u8,
  pub results: Vec<FactorResult>,
  pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Dashboard counters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
  #[serde(default)]
  pub total_views: u64,
  #[serde(default)]
  pub ctr: f64,
  #[serde(default)]
  pub revenue: f64,
  #[serde(default)]
  pub titles_generated: u64,
  #[serde(default)]
  pub scripts_created: u64,
  #[serde(default)]
  pub thumbnails_created: u64,
  pub updated_at: DateTime<Utc>,
}

impl Default for DashboardStats {
  fn default() -> Self {
    Self {
      total_views: 0,
      ctr: 0.0,
      revenue: 0.0,
      titles_generated: 0,
      scripts_created: 0,
      thumbnails_created: 0,
      updated_at: Utc::now(),
    }
  }
}

/// Running totals bumped by the creation endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
  TitlesGenerated,
  ScriptsCreated,
  ThumbnailsCreated,
}

impl DashboardStats {
  pub fn bump(&mut self, counter: Counter, by: u64) {
    let slot = match counter {
      Counter::TitlesGenerated => &mut self.titles_generated,
      Counter::ScriptsCreated => &mut self.scripts_created,
      Counter::ThumbnailsCreated => &mut self.thumbnails_created,
    };
    *slot += by;
    self.updated_at = Utc::now();
  }
}

/// Body of `POST /api/dashboard/stats`; absent counters reset to zero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatsUpdate {
  #[serde(default)]
  pub total_views: u64,
  #[serde(default)]
  pub ctr: f64,
  #[serde(default)]
  pub revenue: f64,
  #[serde(default)]
  pub titles_generated: u64,
  #[serde(default)]
  pub scripts_created: u64,
  #[serde(default)]
  pub thumbnails_created: u64,
}

impl StatsUpdate {
  pub fn into_stats(self) -> DashboardStats {
    DashboardStats {
      total_views: self.total_views,
      ctr: self.ctr,
      revenue: self.revenue,
      titles_generated: self.titles_generated,
      scripts_created: self.scripts_created,
      thumbnails_created: self.thumbnails_created,
      updated_at: Utc::now(),
    }
  }
}

// ---------------------------------------------------------------------------
// Video ideas
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  High,
  #[default]
  Medium,
  Low,
}

impl Priority {
  pub fn rank(self) -> u8 {
    match self {
      Self::High => 3,
      Self::Medium => 2,
      Self::Low => 1,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoIdea {
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default = "default_category")]
  pub category: String,
  #[serde(default)]
  pub priority: Priority,
  #[serde(default = "default_idea_status")]
  pub status: String,
  #[serde(default)]
  pub votes: u32,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
  "general".to_string()
}

fn default_idea_status() -> String {
  "pending".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewIdea {
  #[serde(default)]
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub category: Option<String>,
  #[serde(default)]
  pub priority: Option<Priority>,
}

impl NewIdea {
  pub fn into_idea(self) -> VideoIdea {
    VideoIdea {
      id: new_id(),
      title: self.title,
      description: self.description.unwrap_or_default(),
      category: self.category.unwrap_or_else(default_category),
      priority: self.priority.unwrap_or_default(),
      status: default_idea_status(),
      votes: 0,
      created_at: Utc::now(),
      updated_at: None,
    }
  }
}

/// Partial update; only present fields overwrite.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IdeaUpdate {
  pub title: Option<String>,
  pub description: Option<String>,
  pub category: Option<String>,
  pub priority: Option<Priority>,
  pub status: Option<String>,
  pub votes: Option<u32>,
}

impl IdeaUpdate {
  pub fn apply(self, idea: &mut VideoIdea) {
    if let Some(v) = self.title {
      idea.title = v;
    }
    if let Some(v) = self.description {
      idea.description = v;
    }
    if let Some(v) = self.category {
      idea.category = v;
    }
    if let Some(v) = self.priority {
      idea.priority = v;
    }
    if let Some(v) = self.status {
      idea.status = v;
    }
    if let Some(v) = self.votes {
      idea.votes = v;
    }
    idea.updated_at = Some(Utc::now());
  }
}

/// Starter ideas for an empty database.
pub fn sample_ideas() -> Vec<VideoIdea> {
  let now = Utc::now();
  let day = chrono::Duration::days(1);
  let sample = |id: &str, title: &str, description: &str, category: &str, priority, age: i32| {
    VideoIdea {
      id: id.to_string(),
      title: title.to_string(),
      description: description.to_string(),
      category: category.to_string(),
      priority,
      status: default_idea_status(),
      votes: 0,
      created_at: now - day * age,
      updated_at: None,
    }
  };
  vec![
    sample(
      "sample-1",
      "10 JavaScript Tips Every Developer Should Know",
      "Share practical tips for JavaScript developers",
      "tutorial",
      Priority::High,
      1,
    ),
    sample(
      "sample-2",
      "React vs Vue: Which Framework is Better in 2025?",
      "Comprehensive comparison of popular frameworks",
      "review",
      Priority::Medium,
      2,
    ),
    sample(
      "sample-3",
      "Building My First SaaS Product - Day by Day",
      "Document the journey of building a SaaS product",
      "general",
      Priority::High,
      3,
    ),
  ]
}

// ---------------------------------------------------------------------------
// Video library
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
  pub id: String,
  pub title: String,
  #[serde(default = "default_video_status")]
  pub status: String,
  #[serde(default)]
  pub url: String,
  #[serde(default)]
  pub publish_date: Option<String>,
  #[serde(default)]
  pub views: u64,
  #[serde(default)]
  pub likes: u64,
  #[serde(default)]
  pub comments: u64,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
}

fn default_video_status() -> String {
  "draft".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewVideo {
  #[serde(default)]
  pub title: String,
  pub status: Option<String>,
  pub url: Option<String>,
  pub publish_date: Option<String>,
  pub views: Option<u64>,
  pub likes: Option<u64>,
  pub comments: Option<u64>,
}

impl NewVideo {
  pub fn into_video(self) -> Video {
    Video {
      id: new_id(),
      title: self.title,
      status: self.status.unwrap_or_else(default_video_status),
      url: self.url.unwrap_or_default(),
      publish_date: self.publish_date,
      views: self.views.unwrap_or(0),
      likes: self.likes.unwrap_or(0),
      comments: self.comments.unwrap_or(0),
      created_at: Utc::now(),
      updated_at: None,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoUpdate {
  pub title: Option<String>,
  pub status: Option<String>,
  pub url: Option<String>,
  pub publish_date: Option<String>,
  pub views: Option<u64>,
  pub likes: Option<u64>,
  pub comments: Option<u64>,
}

impl VideoUpdate {
  pub fn apply(self, video: &mut Video) {
    if let Some(v) = self.title {
      video.title = v;
    }
    if let Some(v) = self.status {
      video.status = v;
    }
    if let Some(v) = self.url {
      video.url = v;
    }
    if let Some(v) = self.publish_date {
      video.publish_date = Some(v);
    }
    if let Some(v) = self.views {
      video.views = v;
    }
    if let Some(v) = self.likes {
      video.likes = v;
    }
    if let Some(v) = self.comments {
      video.comments = v;
    }
    video.updated_at = Some(Utc::now());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_idea_fills_defaults() {
    let idea = NewIdea {
      title: "Guitar".into(),
      ..Default::default()
    }
    .into_idea();
    assert_eq!(idea.category, "general");
    assert_eq!(idea.priority, Priority::Medium);
    assert_eq!(idea.status, "pending");
    assert!(idea.updated_at.is_none());
  }

  #[test]
  fn idea_update_only_touches_present_fields() {
    let mut idea = sample_ideas().remove(0);
    let update: IdeaUpdate = serde_json::from_str(r#"{"status":"done","votes":3}"#).unwrap();
    update.apply(&mut idea);
    assert_eq!(idea.status, "done");
    assert_eq!(idea.votes, 3);
    assert_eq!(idea.category, "tutorial");
    assert!(idea.updated_at.is_some());
  }

  #[test]
  fn activity_serializes_kind_as_type() {
    let a = Activity::new("seo_audit", "SEO Audit completed", "Score: 80/100");
    let v = serde_json::to_value(&a).unwrap();
    assert_eq!(v["type"], "seo_audit");
    assert!(v.get("kind").is_none());
  }

  #[test]
  fn priority_ranks() {
    assert!(Priority::High.rank() > Priority::Medium.rank());
    assert!(Priority::Medium.rank() > Priority::Low.rank());
  }
}
