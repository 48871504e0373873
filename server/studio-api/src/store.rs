//! Dashboard persistence: the `Store` trait and its JSON-file implementation.
//!
//! The whole database is one JSON document held in memory and rewritten after
//! every mutation. Writers are serialized by the lock; the last writer wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::dates::DateRange;
use crate::models::*;
use crate::planning::*;

const ACTIVITIES_KEPT: usize = 100;
const ACTIVITIES_LISTED: usize = 50;
const TITLES_KEPT: usize = 500;
const TITLES_LISTED: usize = 20;
const AUDITS_KEPT: usize = 100;
const AUDITS_LISTED: usize = 20;
const EXPORT_VERSION: &str = "2.0";

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("corrupt database {path}: {reason}")]
  Corrupt { path: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  /// Caller-supplied data that cannot be merged into the database.
  #[error("{0}")]
  Rejected(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository for everything the dashboard persists.
///
/// Listing methods return newest first unless noted.
#[async_trait]
pub trait Store: Send + Sync {
  async fn add_activity(&self, activity: Activity) -> StoreResult<()>;
  async fn recent_activities(&self) -> StoreResult<Vec<Activity>>;

  /// Prepend a batch, keeping its internal order.
  async fn save_titles(&self, titles: Vec<TitleRecord>) -> StoreResult<()>;
  /// Case-insensitive substring match on topic; `None` or blank lists everything.
  async fn titles_by_topic(&self, topic: Option<&str>) -> StoreResult<Vec<TitleRecord>>;

  async fn save_audit(&self, audit: SeoAuditRecord) -> StoreResult<()>;
  async fn recent_audits(&self) -> StoreResult<Vec<SeoAuditRecord>>;
  async fn get_audit(&self, id: &str) -> StoreResult<Option<SeoAuditRecord>>;

  async fn stats(&self) -> StoreResult<DashboardStats>;
  async fn update_stats(&self, stats: DashboardStats) -> StoreResult<()>;
  async fn bump_counter(&self, counter: Counter, by: u64) -> StoreResult<DashboardStats>;

  async fn add_idea(&self, idea: VideoIdea) -> StoreResult<String>;
  /// Sorted high > medium > low; ties keep insertion order.
  async fn list_ideas(&self) -> StoreResult<Vec<VideoIdea>>;
  async fn update_idea(&self, id: &str, update: IdeaUpdate) -> StoreResult<Option<VideoIdea>>;

  async fn add_video(&self, video: Video) -> StoreResult<String>;
  async fn list_videos(&self) -> StoreResult<Vec<Video>>;
  async fn update_video(&self, id: &str, update: VideoUpdate) -> StoreResult<Option<Video>>;

  /// Insert, or overwrite the script with the draft's id.
  async fn save_script(&self, draft: ScriptDraft) -> StoreResult<Saved>;
  async fn get_script(&self, id: &str) -> StoreResult<Option<Script>>;
  async fn list_scripts(&self) -> StoreResult<Vec<Script>>;
  async fn delete_script(&self, id: &str) -> StoreResult<bool>;

  async fn save_thumbnail(&self, draft: ThumbnailDraft) -> StoreResult<Saved>;
  async fn get_thumbnail(&self, id: &str) -> StoreResult<Option<Thumbnail>>;
  async fn list_thumbnails(&self) -> StoreResult<Vec<Thumbnail>>;

  async fn add_competitor(&self, competitor: Competitor) -> StoreResult<String>;
  /// Highest average views first.
  async fn list_competitors(&self) -> StoreResult<Vec<Competitor>>;

  async fn add_calendar_event(&self, event: CalendarEvent) -> StoreResult<String>;
  /// Earliest date first.
  async fn calendar_events(&self, range: Option<DateRange>) -> StoreResult<Vec<CalendarEvent>>;

  async fn add_analytics(&self, entry: AnalyticsEntry) -> StoreResult<String>;
  /// Latest date first.
  async fn analytics(&self, range: Option<DateRange>) -> StoreResult<Vec<AnalyticsEntry>>;

  async fn add_revenue(&self, entry: RevenueEntry) -> StoreResult<String>;
  /// Latest date first.
  async fn revenue(&self, range: Option<DateRange>) -> StoreResult<Vec<RevenueEntry>>;

  /// Upsert by exact keyword; an existing row keeps its id.
  async fn save_keyword(&self, research: KeywordResearch) -> StoreResult<String>;
  /// Highest search volume first.
  async fn list_keywords(&self) -> StoreResult<Vec<KeywordResearch>>;

  /// Whole database as `{export_date, version, data}`.
  async fn export(&self) -> StoreResult<serde_json::Value>;
  /// Append imported arrays and merge imported objects, key by key.
  async fn import(&self, data: serde_json::Value) -> StoreResult<()>;
}

/// On-disk document. Unknown top-level keys are dropped on the next write.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Database {
  #[serde(default)]
  activities: Vec<Activity>,
  #[serde(default)]
  titles: Vec<TitleRecord>,
  #[serde(default)]
  seo_audits: Vec<SeoAuditRecord>,
  #[serde(default)]
  video_ideas: Vec<VideoIdea>,
  #[serde(default)]
  videos: Vec<Video>,
  #[serde(default)]
  dashboard_stats: DashboardStats,
  #[serde(default)]
  scripts: Vec<Script>,
  #[serde(default)]
  thumbnails: Vec<Thumbnail>,
  #[serde(default)]
  competitors: Vec<Competitor>,
  #[serde(default)]
  content_calendar: Vec<CalendarEvent>,
  #[serde(default)]
  analytics: Vec<AnalyticsEntry>,
  #[serde(default)]
  revenue_data: Vec<RevenueEntry>,
  #[serde(default)]
  keyword_research: Vec<KeywordResearch>,
}

impl Database {
  fn seeded() -> Self {
    Self {
      video_ideas: sample_ideas(),
      keyword_research: sample_keywords(),
      ..Self::default()
    }
  }

  /// This database with `incoming` merged in: arrays are appended, objects
  /// merged field by field, unknown keys and mismatched shapes skipped.
  fn merged(&self, incoming: serde_json::Value) -> StoreResult<Self> {
    use serde_json::Value;

    let Value::Object(incoming) = incoming else {
      return Err(StoreError::Rejected("Import data must be an object".into()));
    };
    let mut current = serde_json::to_value(self)?;
    if let Value::Object(tables) = &mut current {
      for (key, value) in incoming {
        match (tables.get_mut(&key), value) {
          (Some(Value::Array(rows)), Value::Array(more)) => rows.extend(more),
          (Some(Value::Object(fields)), Value::Object(more)) => fields.extend(more),
          _ => debug!(key = %key, "import key skipped"),
        }
      }
    }
    serde_json::from_value(current)
      .map_err(|e| StoreError::Rejected(format!("Invalid import data: {}", e)))
  }
}

pub struct JsonFileStore {
  path: Option<PathBuf>,
  db: RwLock<Database>,
}

impl JsonFileStore {
  /// Load `path`, or start from sample data if it does not exist yet.
  pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
    let path = path.into();
    let db = match tokio::fs::read_to_string(&path).await {
      Ok(raw) => {
        let mut db: Database = serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
          path: path.display().to_string(),
          reason: e.to_string(),
        })?;
        if db.video_ideas.is_empty() {
          db.video_ideas = sample_ideas();
        }
        info!(path = %path.display(), "loaded database");
        db
      }
      Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
        info!(path = %path.display(), "database not found, starting from sample data");
        Database::seeded()
      }
      Err(e) => return Err(e.into()),
    };
    Ok(Self {
      path: Some(path),
      db: RwLock::new(db),
    })
  }

  /// Memory-only store (nothing is written to disk).
  pub fn in_memory() -> Self {
    Self {
      path: None,
      db: RwLock::new(Database::seeded()),
    }
  }

  pub fn path(&self) -> Option<&Path> {
    self.path.as_deref()
  }

  /// Apply `f` to a copy under the write lock; the copy replaces the live
  /// database only once it has been persisted.
  async fn try_mutate<T: Send>(
    &self,
    f: impl FnOnce(&mut Database) -> StoreResult<T> + Send,
  ) -> StoreResult<T> {
    let mut db = self.db.write().await;
    let mut next = db.clone();
    let out = f(&mut next)?;
    self.persist(&next).await?;
    *db = next;
    Ok(out)
  }

  async fn mutate<T: Send>(&self, f: impl FnOnce(&mut Database) -> T + Send) -> StoreResult<T> {
    self.try_mutate(|db| Ok(f(db))).await
  }

  async fn persist(&self, db: &Database) -> StoreResult<()> {
    let Some(path) = &self.path else {
      return Ok(());
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_vec_pretty(db)?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &json).await?;
    tokio::fs::rename(&tmp, path).await?;
    debug!(path = %path.display(), bytes = json.len(), "database saved");
    Ok(())
  }
}

#[async_trait]
impl Store for JsonFileStore {
  async fn add_activity(&self, activity: Activity) -> StoreResult<()> {
    self
      .mutate(|db| {
        db.activities.insert(0, activity);
        db.activities.truncate(ACTIVITIES_KEPT);
      })
      .await
  }

  async fn recent_activities(&self) -> StoreResult<Vec<Activity>> {
    let db = self.db.read().await;
    Ok(db.activities.iter().take(ACTIVITIES_LISTED).cloned().collect())
  }

  async fn save_titles(&self, mut titles: Vec<TitleRecord>) -> StoreResult<()> {
    self
      .mutate(|db| {
        titles.append(&mut db.titles);
        db.titles = titles;
        db.titles.truncate(TITLES_KEPT);
      })
      .await
  }

  async fn titles_by_topic(&self, topic: Option<&str>) -> StoreResult<Vec<TitleRecord>> {
    let needle = topic.map(|t| t.trim().to_lowercase()).unwrap_or_default();
    let db = self.db.read().await;
    Ok(
      db.titles
        .iter()
        .filter(|t| needle.is_empty() || t.topic.to_lowercase().contains(&needle))
        .take(TITLES_LISTED)
        .cloned()
        .collect(),
    )
  }

  async fn save_audit(&self, audit: SeoAuditRecord) -> StoreResult<()> {
    self
      .mutate(|db| {
        db.seo_audits.insert(0, audit);
        db.seo_audits.truncate(AUDITS_KEPT);
      })
      .await
  }

  async fn recent_audits(&self) -> StoreResult<Vec<SeoAuditRecord>> {
    let db = self.db.read().await;
    Ok(db.seo_audits.iter().take(AUDITS_LISTED).cloned().collect())
  }

  async fn get_audit(&self, id: &str) -> StoreResult<Option<SeoAuditRecord>> {
    let db = self.db.read().await;
    Ok(db.seo_audits.iter().find(|a| a.id == id).cloned())
  }

  async fn stats(&self) -> StoreResult<DashboardStats> {
    Ok(self.db.read().await.dashboard_stats.clone())
  }

  async fn update_stats(&self, stats: DashboardStats) -> StoreResult<()> {
    self.mutate(|db| db.dashboard_stats = stats).await
  }

  async fn bump_counter(&self, counter: Counter, by: u64) -> StoreResult<DashboardStats> {
    self
      .mutate(|db| {
        db.dashboard_stats.bump(counter, by);
        db.dashboard_stats.clone()
      })
      .await
  }

  async fn add_idea(&self, idea: VideoIdea) -> StoreResult<String> {
    let id = idea.id.clone();
    self.mutate(|db| db.video_ideas.insert(0, idea)).await?;
    Ok(id)
  }

  async fn list_ideas(&self) -> StoreResult<Vec<VideoIdea>> {
    let mut ideas = self.db.read().await.video_ideas.clone();
    ideas.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
    Ok(ideas)
  }

  async fn update_idea(&self, id: &str, update: IdeaUpdate) -> StoreResult<Option<VideoIdea>> {
    if !self.db.read().await.video_ideas.iter().any(|i| i.id == id) {
      return Ok(None);
    }
    self
      .mutate(|db| {
        let idea = db.video_ideas.iter_mut().find(|i| i.id == id)?;
        update.apply(idea);
        Some(idea.clone())
      })
      .await
  }

  async fn add_video(&self, video: Video) -> StoreResult<String> {
    let id = video.id.clone();
    self.mutate(|db| db.videos.insert(0, video)).await?;
    Ok(id)
  }

  async fn list_videos(&self) -> StoreResult<Vec<Video>> {
    Ok(self.db.read().await.videos.clone())
  }

  async fn update_video(&self, id: &str, update: VideoUpdate) -> StoreResult<Option<Video>> {
    if !self.db.read().await.videos.iter().any(|v| v.id == id) {
      return Ok(None);
    }
    self
      .mutate(|db| {
        let video = db.videos.iter_mut().find(|v| v.id == id)?;
        update.apply(video);
        Some(video.clone())
      })
      .await
  }

  async fn save_script(&self, draft: ScriptDraft) -> StoreResult<Saved> {
    self
      .mutate(|db| {
        if let Some(id) = draft.id.as_deref() {
          if let Some(script) = db.scripts.iter_mut().find(|s| s.id == id) {
            draft.apply(script);
            return Saved {
              id: id.to_string(),
              created: false,
            };
          }
        }
        let id = draft.id.clone().unwrap_or_else(new_id);
        db.scripts.insert(0, draft.into_script(id.clone()));
        Saved { id, created: true }
      })
      .await
  }

  async fn get_script(&self, id: &str) -> StoreResult<Option<Script>> {
    let db = self.db.read().await;
    Ok(db.scripts.iter().find(|s| s.id == id).cloned())
  }

  async fn list_scripts(&self) -> StoreResult<Vec<Script>> {
    Ok(self.db.read().await.scripts.clone())
  }

  async fn delete_script(&self, id: &str) -> StoreResult<bool> {
    if !self.db.read().await.scripts.iter().any(|s| s.id == id) {
      return Ok(false);
    }
    self
      .mutate(|db| {
        let before = db.scripts.len();
        db.scripts.retain(|s| s.id != id);
        db.scripts.len() < before
      })
      .await
  }

  async fn save_thumbnail(&self, draft: ThumbnailDraft) -> StoreResult<Saved> {
    self
      .mutate(|db| {
        if let Some(id) = draft.id.as_deref() {
          if let Some(thumbnail) = db.thumbnails.iter_mut().find(|t| t.id == id) {
            draft.apply(thumbnail);
            return Saved {
              id: id.to_string(),
              created: false,
            };
          }
        }
        let id = draft.id.clone().unwrap_or_else(new_id);
        db.thumbnails.insert(0, draft.into_thumbnail(id.clone()));
        Saved { id, created: true }
      })
      .await
  }

  async fn get_thumbnail(&self, id: &str) -> StoreResult<Option<Thumbnail>> {
    let db = self.db.read().await;
    Ok(db.thumbnails.iter().find(|t| t.id == id).cloned())
  }

  async fn list_thumbnails(&self) -> StoreResult<Vec<Thumbnail>> {
    Ok(self.db.read().await.thumbnails.clone())
  }

  async fn add_competitor(&self, competitor: Competitor) -> StoreResult<String> {
    let id = competitor.id.clone();
    self.mutate(|db| db.competitors.push(competitor)).await?;
    Ok(id)
  }

  async fn list_competitors(&self) -> StoreResult<Vec<Competitor>> {
    let mut competitors = self.db.read().await.competitors.clone();
    competitors.sort_by(|a, b| b.avg_views.cmp(&a.avg_views));
    Ok(competitors)
  }

  async fn add_calendar_event(&self, event: CalendarEvent) -> StoreResult<String> {
    let id = event.id.clone();
    self
      .mutate(|db| {
        db.content_calendar.push(event);
        db.content_calendar
          .sort_by_key(|e| crate::dates::parse_day(&e.date));
      })
      .await?;
    Ok(id)
  }

  async fn calendar_events(&self, range: Option<DateRange>) -> StoreResult<Vec<CalendarEvent>> {
    let db = self.db.read().await;
    Ok(
      db.content_calendar
        .iter()
        .filter(|e| range.map_or(true, |r| r.contains(&e.date)))
        .cloned()
        .collect(),
    )
  }

  async fn add_analytics(&self, entry: AnalyticsEntry) -> StoreResult<String> {
    let id = entry.id.clone();
    self.mutate(|db| db.analytics.push(entry)).await?;
    Ok(id)
  }

  async fn analytics(&self, range: Option<DateRange>) -> StoreResult<Vec<AnalyticsEntry>> {
    let mut entries: Vec<AnalyticsEntry> = {
      let db = self.db.read().await;
      db.analytics
        .iter()
        .filter(|e| range.map_or(true, |r| r.contains(&e.date)))
        .cloned()
        .collect()
    };
    sort_newest_first(&mut entries, |e| &e.date);
    Ok(entries)
  }

  async fn add_revenue(&self, entry: RevenueEntry) -> StoreResult<String> {
    let id = entry.id.clone();
    self.mutate(|db| db.revenue_data.push(entry)).await?;
    Ok(id)
  }

  async fn revenue(&self, range: Option<DateRange>) -> StoreResult<Vec<RevenueEntry>> {
    let mut entries: Vec<RevenueEntry> = {
      let db = self.db.read().await;
      db.revenue_data
        .iter()
        .filter(|e| range.map_or(true, |r| r.contains(&e.date)))
        .cloned()
        .collect()
    };
    sort_newest_first(&mut entries, |e| &e.date);
    Ok(entries)
  }

  async fn save_keyword(&self, research: KeywordResearch) -> StoreResult<String> {
    self
      .mutate(|db| {
        match db
          .keyword_research
          .iter_mut()
          .find(|k| k.keyword == research.keyword)
        {
          Some(existing) => {
            existing.search_volume = research.search_volume;
            existing.competition = research.competition;
            existing.cpc = research.cpc;
            existing.updated_at = Some(chrono::Utc::now());
            existing.id.clone()
          }
          None => {
            let id = research.id.clone();
            db.keyword_research.push(research);
            id
          }
        }
      })
      .await
  }

  async fn list_keywords(&self) -> StoreResult<Vec<KeywordResearch>> {
    let mut keywords = self.db.read().await.keyword_research.clone();
    keywords.sort_by(|a, b| b.search_volume.cmp(&a.search_volume));
    Ok(keywords)
  }

  async fn export(&self) -> StoreResult<serde_json::Value> {
    let data = serde_json::to_value(&*self.db.read().await)?;
    Ok(serde_json::json!({
      "export_date": chrono::Utc::now(),
      "version": EXPORT_VERSION,
      "data": data,
    }))
  }

  async fn import(&self, data: serde_json::Value) -> StoreResult<()> {
    self
      .try_mutate(|db| {
        *db = db.merged(data)?;
        Ok(())
      })
      .await?;
    info!("database import merged");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  fn title(topic: &str, text: &str) -> TitleRecord {
    TitleRecord {
      id: new_id(),
      topic: topic.into(),
      title: text.into(),
      score: 50,
      created_at: Utc::now(),
    }
  }

  fn audit_record(id: &str) -> SeoAuditRecord {
    SeoAuditRecord {
      id: id.into(),
      title: "t".into(),
      description: String::new(),
      tags: String::new(),
      score: 10,
      results: Vec::new(),
      created_at: Utc::now(),
    }
  }

  #[tokio::test]
  async fn activities_are_newest_first_and_capped() {
    let store = JsonFileStore::in_memory();
    for i in 0..120 {
      store
        .add_activity(Activity::new("test", format!("a{}", i), ""))
        .await
        .unwrap();
    }
    let recent = store.recent_activities().await.unwrap();
    assert_eq!(recent.len(), ACTIVITIES_LISTED);
    assert_eq!(recent[0].title, "a119");
    assert_eq!(store.db.read().await.activities.len(), ACTIVITIES_KEPT);
  }

  #[tokio::test]
  async fn titles_filter_by_topic_case_insensitively() {
    let store = JsonFileStore::in_memory();
    store
      .save_titles(vec![title("Guitar", "g1"), title("Guitar", "g2")])
      .await
      .unwrap();
    store.save_titles(vec![title("Cooking", "c1")]).await.unwrap();

    let guitar = store.titles_by_topic(Some("guit")).await.unwrap();
    assert_eq!(guitar.len(), 2);
    assert_eq!(guitar[0].title, "g1");

    let all = store.titles_by_topic(None).await.unwrap();
    assert_eq!(all[0].title, "c1");
    assert_eq!(store.titles_by_topic(Some("  ")).await.unwrap().len(), 3);
  }

  #[tokio::test]
  async fn audits_can_be_fetched_by_id() {
    let store = JsonFileStore::in_memory();
    store.save_audit(audit_record("a-1")).await.unwrap();
    store.save_audit(audit_record("a-2")).await.unwrap();
    assert_eq!(store.recent_audits().await.unwrap()[0].id, "a-2");
    assert!(store.get_audit("a-1").await.unwrap().is_some());
    assert!(store.get_audit("missing").await.unwrap().is_none());
  }

  #[tokio::test]
  async fn ideas_sorted_by_priority() {
    let store = JsonFileStore::in_memory();
    let low = NewIdea {
      title: "low".into(),
      priority: Some(Priority::Low),
      ..Default::default()
    }
    .into_idea();
    store.add_idea(low).await.unwrap();
    let ideas = store.list_ideas().await.unwrap();
    assert_eq!(ideas[0].priority, Priority::High);
    assert_eq!(ideas.last().unwrap().title, "low");
  }

  #[tokio::test]
  async fn update_missing_idea_returns_none() {
    let store = JsonFileStore::in_memory();
    let res = store
      .update_idea("nope", IdeaUpdate::default())
      .await
      .unwrap();
    assert!(res.is_none());
  }

  #[tokio::test]
  async fn counters_accumulate_independently() {
    let store = JsonFileStore::in_memory();
    store.bump_counter(Counter::TitlesGenerated, 3).await.unwrap();
    store.bump_counter(Counter::ScriptsCreated, 1).await.unwrap();
    let stats = store.bump_counter(Counter::TitlesGenerated, 4).await.unwrap();
    assert_eq!(stats.titles_generated, 7);
    assert_eq!(stats.scripts_created, 1);
    assert_eq!(stats.thumbnails_created, 0);
  }

  #[tokio::test]
  async fn file_store_persists_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("database.json");

    let store = JsonFileStore::open(&path).await.unwrap();
    assert_eq!(store.path(), Some(path.as_path()));
    assert!(JsonFileStore::in_memory().path().is_none());
    let id = store
      .add_video(
        NewVideo {
          title: "First upload".into(),
          ..Default::default()
        }
        .into_video(),
      )
      .await
      .unwrap();
    assert!(path.exists());

    let reopened = JsonFileStore::open(&path).await.unwrap();
    let videos = reopened.list_videos().await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, id);
    assert_eq!(videos[0].status, "draft");
    assert_eq!(reopened.list_ideas().await.unwrap().len(), 3);
  }

  #[tokio::test]
  async fn failed_write_leaves_state_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    let store = JsonFileStore::open(&path).await.unwrap();

    let blocker = path.with_extension("json.tmp");
    std::fs::create_dir(&blocker).unwrap();
    assert!(store
      .add_activity(Activity::new("test", "ghost", ""))
      .await
      .is_err());
    assert!(store
      .recent_activities()
      .await
      .unwrap()
      .iter()
      .all(|a| a.title != "ghost"));

    std::fs::remove_dir(&blocker).unwrap();
    store
      .add_activity(Activity::new("test", "real", ""))
      .await
      .unwrap();
    let reopened = JsonFileStore::open(&path).await.unwrap();
    let titles: Vec<String> = reopened
      .recent_activities()
      .await
      .unwrap()
      .into_iter()
      .map(|a| a.title)
      .collect();
    assert_eq!(titles, vec!["real".to_string()]);
  }

  #[tokio::test]
  async fn script_save_inserts_then_overwrites() {
    let store = JsonFileStore::in_memory();
    let first = store
      .save_script(ScriptDraft {
        title: Some("Intro to Rust".into()),
        hook: "Why Rust?".into(),
        ..Default::default()
      })
      .await
      .unwrap();
    assert!(first.created);

    let again = store
      .save_script(ScriptDraft {
        id: Some(first.id.clone()),
        title: Some("Intro to Rust v2".into()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert_eq!(again, Saved { id: first.id.clone(), created: false });

    let scripts = store.list_scripts().await.unwrap();
    assert_eq!(scripts.len(), 1);
    assert_eq!(scripts[0].title, "Intro to Rust v2");
    assert_eq!(scripts[0].hook, "");

    assert!(store.delete_script(&first.id).await.unwrap());
    assert!(!store.delete_script(&first.id).await.unwrap());
    assert!(store.get_script(&first.id).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn unknown_thumbnail_id_creates_a_record_with_that_id() {
    let store = JsonFileStore::in_memory();
    let saved = store
      .save_thumbnail(ThumbnailDraft {
        id: Some("thumb-7".into()),
        ..Default::default()
      })
      .await
      .unwrap();
    assert_eq!(saved, Saved { id: "thumb-7".into(), created: true });
    let thumb = store.get_thumbnail("thumb-7").await.unwrap().unwrap();
    assert_eq!(thumb.name, "Untitled Thumbnail");
  }

  #[tokio::test]
  async fn calendar_is_date_ordered_and_filterable() {
    let store = JsonFileStore::in_memory();
    for (title, date) in [("b", "2025-06-10"), ("a", "2025-06-01"), ("c", "2025-07-01")] {
      let event = NewCalendarEvent {
        title: title.into(),
        date: date.into(),
        ..Default::default()
      }
      .into_event();
      store.add_calendar_event(event).await.unwrap();
    }
    let all: Vec<String> = store
      .calendar_events(None)
      .await
      .unwrap()
      .into_iter()
      .map(|e| e.title)
      .collect();
    assert_eq!(all, vec!["a", "b", "c"]);

    let june = DateRange::from_bounds(Some("2025-06-01"), Some("2025-06-30")).unwrap();
    assert_eq!(store.calendar_events(june).await.unwrap().len(), 2);
  }

  #[tokio::test]
  async fn keyword_research_upserts_by_keyword() {
    let store = JsonFileStore::in_memory();
    let row = |volume| KeywordResearch {
      id: new_id(),
      keyword: "react hooks".into(),
      search_volume: volume,
      competition: Competition::Low,
      cpc: 1.0,
      created_at: Utc::now(),
      updated_at: None,
    };
    let id = store.save_keyword(row(500_000)).await.unwrap();
    assert_eq!(id, "kw-2");

    let keywords = store.list_keywords().await.unwrap();
    assert_eq!(keywords.len(), 3);
    assert_eq!(keywords[0].keyword, "react hooks");
    assert_eq!(keywords[0].competition, Competition::Low);
    assert!(keywords[0].updated_at.is_some());
  }

  #[tokio::test]
  async fn import_appends_arrays_and_merges_stats() {
    let store = JsonFileStore::in_memory();
    store
      .import(serde_json::json!({
        "videos": [{
          "id": "v-imported",
          "title": "Imported",
          "status": "published",
          "created_at": "2025-01-01T00:00:00Z",
          "updated_at": "2025-01-01T00:00:00Z"
        }],
        "dashboard_stats": { "scripts_created": 4 },
        "users": [{ "id": "ignored" }],
        "scripts": "not a list"
      }))
      .await
      .unwrap();

    let videos = store.list_videos().await.unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].id, "v-imported");
    assert_eq!(store.stats().await.unwrap().scripts_created, 4);

    let export = store.export().await.unwrap();
    assert_eq!(export["version"], "2.0");
    assert_eq!(export["data"]["videos"][0]["id"], "v-imported");
    assert!(export["data"].get("users").is_none());
  }

  #[tokio::test]
  async fn malformed_import_is_rejected_without_changes() {
    let store = JsonFileStore::in_memory();
    let err = store.import(serde_json::json!([1, 2])).await.unwrap_err();
    assert!(matches!(err, StoreError::Rejected(_)));

    let err = store
      .import(serde_json::json!({ "videos": [{ "title": 42 }] }))
      .await
      .unwrap_err();
    assert!(matches!(err, StoreError::Rejected(_)));
    assert!(store.list_videos().await.unwrap().is_empty());
  }

  #[tokio::test]
  async fn corrupt_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("database.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = JsonFileStore::open(&path).await.err().unwrap();
    assert!(matches!(err, StoreError::Corrupt { .. }));
  }
}
