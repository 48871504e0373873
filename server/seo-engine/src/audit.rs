//! Weighted aggregation of the seven factors into one report.

use crate::factors;
use crate::types::{AuditInput, AuditReport, FactorResult};

/// Score all factors in report order.
pub fn evaluate_factors(input: &AuditInput) -> Vec<FactorResult> {
  vec![
    factors::title_length(&input.title),
    factors::description_length(&input.description),
    factors::tags_count(&input.tags),
    factors::keyword_consistency(&input.title, &input.description),
    factors::call_to_action(&input.description),
    factors::engagement_signals(&input.title, &input.description),
    factors::timestamps(&input.description),
  ]
}

/// Percentage 0-100: round(100 * sum(score) / sum(max_score)).
pub fn score_percentage(results: &[FactorResult]) -> u8 {
  let total: u32 = results.iter().map(|r| r.score as u32).sum();
  let max: u32 = results.iter().map(|r| r.max_score as u32).sum();
  if max == 0 {
    return 0;
  }
  let pct = (total as f64 * 100.0 / max as f64).round();
  pct.clamp(0.0, 100.0) as u8
}

/// Run the full audit (no I/O, deterministic).
pub fn audit(input: &AuditInput) -> AuditReport {
  let results = evaluate_factors(input);
  AuditReport {
    score_percentage: score_percentage(&results),
    results,
  }
}
