//! The seven factor evaluators. Each is independent and total over its input.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{Factor, FactorResult, Status};

/// Substrings that count as a call to action in the description.
const CTA_KEYWORDS: [&str; 9] = [
  "subscribe", "like", "comment", "share", "watch", "click", "link", "check", "visit",
];

static TIMESTAMP_RE: OnceLock<Regex> = OnceLock::new();

fn timestamp_re() -> &'static Regex {
  TIMESTAMP_RE.get_or_init(|| Regex::new(r"[0-9]+:[0-9]+").expect("timestamp pattern is valid"))
}

/// Title length in characters: 30-60 is ideal, longer titles get truncated in search.
///
/// Characters are Unicode scalar values, not UTF-16 code units, so a title of
/// 31 emoji is 31 characters here (a browser's `String.length` reports 62).
pub fn title_length(title: &str) -> FactorResult {
  let len = title.chars().count();
  let (score, message) = match len {
    0 => (0, "Title is required".to_string()),
    30..=60 => (20, format!("Perfect length ({} chars)", len)),
    1..=29 => (10, format!("Too short ({} chars). Aim for 30-60 characters.", len)),
    61..=70 => (15, format!("Too long ({} chars). May be truncated.", len)),
    _ => (5, format!("Very long ({} chars). Will be truncated.", len)),
  };
  FactorResult::new(
    Factor::TitleLength,
    score,
    Status::from_thresholds(score, 15, 10),
    message,
  )
}

/// Description length in characters: 125-5000 is ideal.
///
/// Counted in Unicode scalar values, like [`title_length`].
pub fn description_length(description: &str) -> FactorResult {
  let len = description.chars().count();
  let (score, message) = match len {
    0 => (0, "Description is recommended".to_string()),
    125..=5000 => (20, format!("Good length ({} chars)", len)),
    1..=124 => (10, format!("Too short ({} chars). Aim for 125+ characters.", len)),
    _ => (15, format!("Very long ({} chars). May be excessive.", len)),
  };
  FactorResult::new(
    Factor::DescriptionLength,
    score,
    Status::from_thresholds(score, 15, 10),
    message,
  )
}

/// Non-empty, trimmed entries of a comma-separated tag list.
pub fn split_tags(tags: &str) -> Vec<&str> {
  tags
    .split(',')
    .map(str::trim)
    .filter(|t| !t.is_empty())
    .collect()
}

pub fn tags_count(tags: &str) -> FactorResult {
  let count = split_tags(tags).len();
  let (score, message) = match count {
    0 => (0, "Tags are recommended".to_string()),
    5..=15 => (15, format!("Optimal tag count ({} tags)", count)),
    1..=4 => (8, format!("Few tags ({}). Add more for better discoverability.", count)),
    _ => (10, format!("Too many tags ({}). YouTube may ignore some.", count)),
  };
  FactorResult::new(
    Factor::TagsCount,
    score,
    Status::from_thresholds(score, 12, 8),
    message,
  )
}

/// Number of title words (longer than 3 chars) that also appear as a description word.
///
/// Only the title side is length-filtered. Repeated title words count once per occurrence.
pub fn common_word_count(title: &str, description: &str) -> usize {
  let desc = description.to_lowercase();
  let desc_words: Vec<&str> = desc.split_whitespace().collect();
  title
    .to_lowercase()
    .split_whitespace()
    .filter(|w| w.chars().count() > 3)
    .filter(|w| desc_words.contains(w))
    .count()
}

pub fn keyword_consistency(title: &str, description: &str) -> FactorResult {
  let (score, message) = if title.is_empty() || description.is_empty() {
    (0, "Need both title and description".to_string())
  } else {
    match common_word_count(title, description) {
      0 => (5, "Consider using keywords from title in description".to_string()),
      1 => (10, "Good keyword overlap".to_string()),
      n => (15, format!("Excellent keyword overlap ({} keywords)", n)),
    }
  };
  FactorResult::new(
    Factor::KeywordConsistency,
    score,
    Status::from_thresholds(score, 12, 8),
    message,
  )
}

pub fn call_to_action(description: &str) -> FactorResult {
  let desc = description.to_lowercase();
  if CTA_KEYWORDS.iter().any(|k| desc.contains(k)) {
    FactorResult::new(Factor::CallToAction, 10, Status::High, "CTA found in description")
  } else {
    FactorResult::new(
      Factor::CallToAction,
      5,
      Status::Med,
      "Consider adding a CTA (subscribe, like, etc.)",
    )
  }
}

/// Questions in either field invite comments.
pub fn engagement_signals(title: &str, description: &str) -> FactorResult {
  let questions = title.matches('?').count() + description.matches('?').count();
  if questions > 0 {
    FactorResult::new(
      Factor::EngagementSignals,
      10,
      Status::High,
      format!("Questions found ({}) - good for engagement", questions),
    )
  } else {
    FactorResult::new(
      Factor::EngagementSignals,
      5,
      Status::Med,
      "Consider adding questions to boost engagement",
    )
  }
}

pub fn timestamps(description: &str) -> FactorResult {
  if timestamp_re().is_match(description) {
    FactorResult::new(
      Factor::Timestamps,
      10,
      Status::High,
      "Timestamps found - improves user experience",
    )
  } else {
    FactorResult::new(
      Factor::Timestamps,
      0,
      Status::Low,
      "Consider adding timestamps for longer videos",
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn title_length_boundaries() {
    assert_eq!(title_length(&"a".repeat(30)).score, 20);
    assert_eq!(title_length(&"a".repeat(60)).score, 20);
    assert_eq!(title_length(&"a".repeat(29)).score, 10);
    assert_eq!(title_length(&"a".repeat(61)).score, 15);
    assert_eq!(title_length(&"a".repeat(70)).score, 15);
    assert_eq!(title_length(&"a".repeat(71)).score, 5);
  }

  #[test]
  fn lengths_count_scalar_values() {
    let emoji = "🎸".repeat(31);
    let result = title_length(&emoji);
    assert_eq!(result.score, 20);
    assert_eq!(result.message, "Perfect length (31 chars)");
    assert_eq!(description_length(&"é".repeat(125)).score, 20);
  }

  #[test]
  fn empty_title_is_required() {
    let r = title_length("");
    assert_eq!(r.score, 0);
    assert_eq!(r.status, Status::Low);
    assert_eq!(r.message, "Title is required");
  }

  #[test]
  fn title_length_counts_chars_not_bytes() {
    // 30 two-byte characters.
    let r = title_length(&"é".repeat(30));
    assert_eq!(r.score, 20);
  }

  #[test]
  fn description_length_buckets() {
    assert_eq!(description_length("").score, 0);
    assert_eq!(description_length("").message, "Description is recommended");
    assert_eq!(description_length(&"x".repeat(124)).score, 10);
    assert_eq!(description_length(&"x".repeat(125)).score, 20);
    assert_eq!(description_length(&"x".repeat(5000)).score, 20);
    let long = description_length(&"x".repeat(5001));
    assert_eq!(long.score, 15);
    assert_eq!(long.status, Status::High);
  }

  #[test]
  fn tags_are_trimmed_and_empties_dropped() {
    assert_eq!(split_tags(" a, ,b,, c ,"), vec!["a", "b", "c"]);
    assert!(split_tags("").is_empty());
    assert!(split_tags(" , ,").is_empty());
  }

  #[test]
  fn five_tags_is_optimal() {
    let r = tags_count("a, b, c, d, e");
    assert_eq!(r.score, 15);
    assert_eq!(r.status, Status::High);
  }

  #[test]
  fn tag_count_buckets() {
    let few = tags_count("a,b");
    assert_eq!((few.score, few.status), (8, Status::Med));
    let many: Vec<String> = (0..16).map(|i| format!("t{}", i)).collect();
    let many = tags_count(&many.join(","));
    assert_eq!((many.score, many.status), (10, Status::Med));
    let none = tags_count("");
    assert_eq!((none.score, none.status), (0, Status::Low));
  }

  #[test]
  fn keyword_overlap_filters_title_side_only() {
    // "the" is too short on the title side; "guitar" and "lessons" match.
    assert_eq!(
      common_word_count("The Guitar Lessons", "the best guitar lessons online"),
      2
    );
    // Duplicate title words count separately.
    assert_eq!(common_word_count("drum drum", "drum"), 2);
    assert_eq!(common_word_count("Guitar", "guitar,"), 0);
  }

  #[test]
  fn keyword_consistency_needs_both_fields() {
    let r = keyword_consistency("Guitar basics", "");
    assert_eq!(r.score, 0);
    assert_eq!(r.message, "Need both title and description");
    assert_eq!(keyword_consistency("Guitar basics", "nothing shared").score, 5);
    assert_eq!(keyword_consistency("Guitar basics", "learn guitar").score, 10);
    let r = keyword_consistency("Guitar basics", "guitar basics explained");
    assert_eq!(r.score, 15);
    assert_eq!(r.message, "Excellent keyword overlap (2 keywords)");
  }

  #[test]
  fn cta_is_case_insensitive_substring() {
    assert_eq!(call_to_action("Please SUBSCRIBE").score, 10);
    assert_eq!(call_to_action("unlikely").score, 10);
    let r = call_to_action("plain text");
    assert_eq!((r.score, r.status), (5, Status::Med));
  }

  #[test]
  fn engagement_counts_question_marks_across_fields() {
    let r = engagement_signals("Why?", "Really? Yes?");
    assert_eq!(r.score, 10);
    assert_eq!(r.message, "Questions found (3) - good for engagement");
    assert_eq!(engagement_signals("", "").score, 5);
  }

  #[test]
  fn timestamps_need_digits_on_both_sides() {
    assert_eq!(timestamps("0:00 Intro").score, 10);
    assert_eq!(timestamps("at 12:30").score, 10);
    assert_eq!(timestamps("ratio 1: 2").score, 0);
    assert_eq!(timestamps("").status, Status::Low);
  }
}
