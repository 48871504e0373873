//! Rule-based improvement suggestions derived from an audit report.

use crate::types::{AuditReport, Factor, Status};

const MAX_SUGGESTIONS: usize = 5;

fn suggestion_for(factor: Factor) -> &'static str {
  match factor {
    Factor::TitleLength => {
      "Keep the title between 30 and 60 characters so it is not truncated in search results"
    }
    Factor::DescriptionLength => {
      "Write a description of at least 125 characters that summarises the video"
    }
    Factor::TagsCount => "Use between 5 and 15 relevant tags",
    Factor::KeywordConsistency => {
      "Repeat the main keywords from the title in the first lines of the description"
    }
    Factor::CallToAction => "Ask viewers to like, comment or subscribe in the description",
    Factor::EngagementSignals => "Ask viewers a question to encourage comments",
    Factor::Timestamps => "Add chapter timestamps (e.g. 0:00 Intro) to the description",
  }
}

/// One suggestion per factor that is not `high`, in report order, capped at five.
pub fn suggest_improvements(report: &AuditReport) -> Vec<String> {
  Factor::ALL
    .iter()
    .zip(&report.results)
    .filter(|(_, r)| r.status != Status::High)
    .map(|(f, _)| suggestion_for(*f).to_string())
    .take(MAX_SUGGESTIONS)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::audit::audit;
  use crate::types::AuditInput;

  #[test]
  fn empty_input_is_capped_at_five() {
    let report = audit(&AuditInput::default());
    let s = suggest_improvements(&report);
    assert_eq!(s.len(), 5);
    assert!(s[0].contains("30 and 60"));
  }

  #[test]
  fn strong_factors_are_skipped() {
    let report = audit(&AuditInput::new(
      "Guitar Chords Explained for Total Beginners",
      &format!(
        "Guitar chords for beginners. 0:00 intro. Subscribe? {}",
        "x".repeat(120)
      ),
      "guitar, chords, beginner, lesson, music",
    ));
    let s = suggest_improvements(&report);
    assert!(s.is_empty(), "unexpected suggestions: {:?}", s);
  }
}
