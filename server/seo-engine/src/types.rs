//! Input/output types for the SEO engine (JSON contract with the studio API).

use serde::{Deserialize, Deserializer, Serialize};

/// Input: one JSON object with the video metadata to audit. Missing or null fields are empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditInput {
  #[serde(default, deserialize_with = "null_as_empty")]
  pub title: String,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub description: String,
  /// Comma-separated tag list, as typed into the upload form.
  #[serde(default, deserialize_with = "null_as_empty")]
  pub tags: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl AuditInput {
  pub fn new(title: &str, description: &str, tags: &str) -> Self {
    Self {
      title: title.to_string(),
      description: description.to_string(),
      tags: tags.to_string(),
    }
  }
}

/// Coarse bucket used by the dashboard for coloring a factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
  High,
  Med,
  Low,
}

impl Status {
  /// `high` at or above `high`, `med` at or above `med`, else `low`.
  pub fn from_thresholds(score: u8, high: u8, med: u8) -> Self {
    if score >= high {
      Self::High
    } else if score >= med {
      Self::Med
    } else {
      Self::Low
    }
  }
}

/// The seven audit factors, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
  TitleLength,
  DescriptionLength,
  TagsCount,
  KeywordConsistency,
  CallToAction,
  EngagementSignals,
  Timestamps,
}

impl Factor {
  pub const ALL: [Factor; 7] = [
    Factor::TitleLength,
    Factor::DescriptionLength,
    Factor::TagsCount,
    Factor::KeywordConsistency,
    Factor::CallToAction,
    Factor::EngagementSignals,
    Factor::Timestamps,
  ];

  pub fn name(self) -> &'static str {
    match self {
      Self::TitleLength => "Title Length",
      Self::DescriptionLength => "Description Length",
      Self::TagsCount => "Tags Count",
      Self::KeywordConsistency => "Keyword Consistency",
      Self::CallToAction => "Call-to-Action",
      Self::EngagementSignals => "Engagement Signals",
      Self::Timestamps => "Timestamps",
    }
  }

  pub fn max_score(self) -> u8 {
    match self {
      Self::TitleLength | Self::DescriptionLength => 20,
      Self::TagsCount | Self::KeywordConsistency => 15,
      Self::CallToAction | Self::EngagementSignals | Self::Timestamps => 10,
    }
  }
}

/// One scored factor. `score` never exceeds `max_score`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorResult {
  pub name: String,
  pub score: u8,
  pub max_score: u8,
  pub status: Status,
  pub message: String,
}

impl FactorResult {
  pub fn new(factor: Factor, score: u8, status: Status, message: impl Into<String>) -> Self {
    Self {
      name: factor.name().to_string(),
      score: score.min(factor.max_score()),
      max_score: factor.max_score(),
      status,
      message: message.into(),
    }
  }
}

/// Output: the full audit, serialized as `{"score": .., "results": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
  #[serde(rename = "score")]
  pub score_percentage: u8,
  pub results: Vec<FactorResult>,
}

/// A candidate title with its heuristic score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTitle {
  pub title: String,
  pub score: u8,
}
