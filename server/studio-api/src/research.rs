//! Keyword research: estimates from trending tags when the YouTube API is
//! keyed, stable simulated figures otherwise.

use chrono::Utc;
use tracing::warn;

use crate::models::new_id;
use crate::planning::{Competition, KeywordResearch};
use crate::youtube::{seed, ChannelDirectory, KeywordCount};

const TRENDING_REGION: &str = "US";
const TRENDING_SAMPLE: usize = 50;
const VIEWS_PER_TAG: u64 = 1_000;

/// A research row plus whether it came from live API data.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
  pub research: KeywordResearch,
  pub api_used: bool,
}

fn cents(value: f64) -> f64 {
  (value * 100.0).round() / 100.0
}

/// Fraction in `[0, 1)` from the upper bits of `seed`.
fn unit(seed: u64) -> f64 {
  (seed >> 11) as f64 / (1u64 << 53) as f64
}

fn row(keyword: &str, search_volume: u64, competition: Competition, cpc: f64) -> KeywordResearch {
  KeywordResearch {
    id: new_id(),
    keyword: keyword.to_string(),
    search_volume,
    competition,
    cpc: cents(cpc),
    created_at: Utc::now(),
    updated_at: None,
  }
}

/// Match `keyword` against trending tags (substring either way, ignoring case).
pub fn estimate_from_trending(keyword: &str, trending: &[KeywordCount]) -> Option<KeywordResearch> {
  let needle = keyword.to_lowercase();
  let hit = trending.iter().find(|k| {
    let tag = k.keyword.to_lowercase();
    tag.contains(&needle) || needle.contains(&tag)
  })?;
  let competition = match hit.count {
    c if c > 5 => Competition::High,
    c if c > 2 => Competition::Medium,
    _ => Competition::Low,
  };
  let cpc = 0.5 + unit(seed(keyword)) * 3.0;
  Some(row(keyword, hit.count as u64 * VIEWS_PER_TAG, competition, cpc))
}

/// Deterministic per keyword.
pub fn simulated_estimate(keyword: &str) -> KeywordResearch {
  let s = seed(keyword);
  let competition = match s % 3 {
    0 => Competition::Low,
    1 => Competition::Medium,
    _ => Competition::High,
  };
  let cpc = 0.5 + unit(s.rotate_left(17)) * 5.0;
  row(keyword, 1_000 + (s >> 8) % 100_000, competition, cpc)
}

pub async fn research_keyword(directory: &dyn ChannelDirectory, keyword: &str) -> Estimate {
  if directory.enabled() {
    match directory.trending_keywords(TRENDING_REGION, TRENDING_SAMPLE).await {
      Ok(trending) => {
        if let Some(research) = estimate_from_trending(keyword, &trending) {
          return Estimate {
            research,
            api_used: true,
          };
        }
      }
      Err(e) => warn!(error = %e, keyword, "trending lookup failed, simulating"),
    }
  }
  Estimate {
    research: simulated_estimate(keyword),
    api_used: false,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::youtube::SimulatedDirectory;

  fn tag(keyword: &str, count: usize) -> KeywordCount {
    KeywordCount {
      keyword: keyword.into(),
      count,
    }
  }

  #[test]
  fn trending_match_sets_volume_and_competition() {
    let trending = [tag("minecraft", 7), tag("music", 3), tag("live", 1)];

    let hit = estimate_from_trending("Minecraft Builds", &trending).unwrap();
    assert_eq!(hit.search_volume, 7_000);
    assert_eq!(hit.competition, Competition::High);
    assert!((0.5..3.5).contains(&hit.cpc));

    let medium = estimate_from_trending("mus", &trending).unwrap();
    assert_eq!(medium.competition, Competition::Medium);
    assert_eq!(
      estimate_from_trending("live", &trending).unwrap().competition,
      Competition::Low
    );
    assert!(estimate_from_trending("cooking", &trending).is_none());
  }

  #[test]
  fn simulated_estimate_is_stable_and_bounded() {
    let a = simulated_estimate("rust tutorial");
    let b = simulated_estimate("rust tutorial");
    assert_eq!(
      (a.search_volume, a.competition, a.cpc),
      (b.search_volume, b.competition, b.cpc)
    );
    assert!((1_000..101_000).contains(&a.search_volume));
    assert!((0.5..=5.5).contains(&a.cpc));
    assert_eq!(a.cpc, cents(a.cpc));
  }

  #[tokio::test]
  async fn offline_directory_falls_back_to_simulation() {
    let estimate = research_keyword(&SimulatedDirectory, "gaming").await;
    assert!(!estimate.api_used);
    assert_eq!(estimate.research.keyword, "gaming");
  }
}
