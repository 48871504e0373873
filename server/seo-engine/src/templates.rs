//! Fallback title catalogue, used when no LLM is configured or it returns nothing.

use crate::title_score::score_title;
use crate::types::ScoredTitle;

/// `{}` is replaced with the topic.
const PATTERNS: [&str; 33] = [
  // question
  "Why {} is Taking Over in 2025",
  "Is {} Worth It in 2025? (Honest Review)",
  "What Nobody Tells You About {}",
  "Can You Really Master {}? (The Truth)",
  // guide
  "The Ultimate Guide to {} (Don't Miss This)",
  "{}: The Complete Beginner's Guide",
  "How to {} in 2025: Step-by-Step Tutorial",
  "Master {} in 30 Days: Full Course",
  // challenge
  "I Tried {} for 7 Days - Here's What Happened",
  "I Did {} Every Day for 30 Days (Results)",
  "Testing {}: Does It Actually Work?",
  "I Spent $1000 on {} - Was It Worth It?",
  // list
  "Top 10 Secrets About {}",
  "10 {} Tips That Changed Everything",
  "5 {} Mistakes Everyone Makes (Avoid These!)",
  "Top 7 {} Tools You Need in 2025",
  // warning
  "Stop Doing {} Wrong! (Costly Mistakes)",
  "{} is Broken - Here's How to Fix It",
  "The {} Scam Nobody Talks About",
  "Why {} Fails (And How to Succeed)",
  // explanation
  "{} Explained: Everything You Need to Know",
  "How {} Actually Works (Simple Explanation)",
  "{} for Beginners: Start Here",
  // success story
  "How I Mastered {} in 30 Days",
  "From Zero to Hero: My {} Journey",
  "How I Made $10K with {} (Full Breakdown)",
  // comparison
  "{} vs Traditional Methods (Which is Better?)",
  "Best {} Tools Compared (2025 Review)",
  // reveal
  "The Truth About {} (Industry Secrets)",
  "{} Secrets They Don't Want You to Know",
  "I Exposed the {} Industry (Shocking Truth)",
  // trend
  "{} is the Future (Here's Why)",
  "Why Everyone is Switching to {} in 2025",
];

/// Expand every pattern for `topic`, in catalogue order.
pub fn template_titles(topic: &str) -> Vec<String> {
  PATTERNS.iter().map(|p| p.replace("{}", topic)).collect()
}

/// Score each title and sort best-first; ties keep input order.
pub fn rank_titles<I, S>(titles: I) -> Vec<ScoredTitle>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  let mut scored: Vec<ScoredTitle> = titles
    .into_iter()
    .map(|t| {
      let title = t.into();
      let score = score_title(&title);
      ScoredTitle { title, score }
    })
    .collect();
  scored.sort_by(|a, b| b.score.cmp(&a.score));
  scored
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn every_pattern_mentions_topic() {
    let titles = template_titles("Sourdough");
    assert_eq!(titles.len(), 33);
    assert!(titles.iter().all(|t| t.contains("Sourdough")));
    assert!(titles.iter().all(|t| !t.contains("{}")));
  }

  #[test]
  fn ranking_is_descending_and_stable() {
    let ranked = rank_titles(vec!["b", "a", "Top 10 Guitar Tips (2025)"]);
    assert_eq!(ranked[0].title, "Top 10 Guitar Tips (2025)");
    assert_eq!(ranked[1].title, "b");
    assert_eq!(ranked[2].title, "a");
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
  }
}
