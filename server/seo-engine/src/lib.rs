//! TubeVision SEO Engine: rule-based scoring with no AI, no DB, no network.
//! Used by the binary for stdin/stdout and linked into the studio API as a library.

mod audit;
pub mod factors;
mod hashtags;
mod suggestions;
mod templates;
mod title_score;
mod types;

pub use audit::{audit, evaluate_factors, score_percentage};
pub use hashtags::shorts_hashtags;
pub use suggestions::suggest_improvements;
pub use templates::{rank_titles, template_titles};
pub use title_score::score_title;
pub use types::{AuditInput, AuditReport, Factor, FactorResult, ScoredTitle, Status};

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn audit_returns_valid_output_shape() {
    let input = AuditInput::new(
      "10 Guitar Chords Every Beginner Should Know",
      "Learn the guitar chords every beginner needs. Subscribe for more!",
      "guitar, chords, beginner",
    );
    let out = audit(&input);
    assert!(out.score_percentage <= 100);
    assert_eq!(out.results.len(), 7);
    assert!(out.results.iter().all(|r| r.score <= r.max_score));
  }

  #[test]
  fn audit_is_idempotent() {
    let input = AuditInput::new("Same title?", "Same description 1:23", "a,b");
    let a = serde_json::to_string(&audit(&input)).unwrap();
    let b = serde_json::to_string(&audit(&input)).unwrap();
    assert_eq!(a, b);
  }
}
