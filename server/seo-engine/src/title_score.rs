//! Click-through heuristic for candidate titles.

const POWER_WORDS: [&str; 11] = [
  "ultimate", "complete", "guide", "secret", "mistake", "wrong", "stop", "why", "how", "top",
  "best",
];

const EMOTIONAL_WORDS: [&str; 5] = ["amazing", "incredible", "shocking", "revealed", "exposed"];

/// Title score 0-100: base 50, plus length, power words, numbers, questions, emotion, brackets.
pub fn score_title(title: &str) -> u8 {
  let mut score: u32 = 50;

  let len = title.chars().count();
  score += match len {
    30..=60 => 20,
    20..=29 => 10,
    61..=70 => 5,
    _ => 0,
  };

  let lower = title.to_lowercase();
  let power_words = POWER_WORDS.iter().filter(|w| lower.contains(*w)).count() as u32;
  score += power_words * 5;

  if title.chars().any(|c| c.is_ascii_digit()) {
    score += 10;
  }
  if title.contains('?') {
    score += 8;
  }
  if EMOTIONAL_WORDS.iter().any(|w| lower.contains(w)) {
    score += 7;
  }
  if title.contains('(') && title.contains(')') {
    score += 12;
  }

  score.min(100) as u8
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn plain_short_title_gets_base() {
    assert_eq!(score_title("Guitar"), 50);
    assert_eq!(score_title(""), 50);
  }

  #[test]
  fn each_bonus_applies() {
    // 24 chars (+10), "how" (+5)
    assert_eq!(score_title("How to Learn Guitar Fast"), 65);
    // digit
    assert_eq!(score_title("Guitar 2"), 60);
    // question
    assert_eq!(score_title("Guitar?"), 58);
    // brackets need both halves
    assert_eq!(score_title("Guitar (live"), 50);
    assert_eq!(score_title("Guitar (live)"), 62);
    // emotional words count once
    assert_eq!(score_title("amazing shocking"), 57);
  }

  #[test]
  fn score_is_capped() {
    let t = "Why the Ultimate Complete Guide? Top 10 Best (Shocking)";
    assert_eq!(score_title(t), 100);
  }
}
