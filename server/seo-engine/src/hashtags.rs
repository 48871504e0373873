//! Hashtag sets for YouTube Shorts.

const BASE_TAGS: [&str; 5] = ["#shorts", "#viral", "#trending", "#fyp", "#youtube"];
const MAX_TAGS: usize = 15;

/// (topic keywords, tags added when any keyword appears in the topic)
const CATEGORY_TAGS: [(&[&str], [&str; 3]); 4] = [
  (&["cook", "food"], ["#cooking", "#foodie", "#recipe"]),
  (&["tech", "code"], ["#tech", "#coding", "#programming"]),
  (&["gaming", "game"], ["#gaming", "#gamer", "#games"]),
  (&["fitness", "workout"], ["#fitness", "#workout", "#gym"]),
];

/// Base tags, three spellings of the topic, then category tags; first
/// occurrence wins and the list is capped at fifteen.
pub fn shorts_hashtags(topic: &str) -> Vec<String> {
  let joined: String = topic.split_whitespace().collect();
  let camel: String = topic.split(' ').map(capitalize).collect();
  let lower = topic.to_lowercase();

  let candidates = BASE_TAGS
    .iter()
    .map(|t| t.to_string())
    .chain([
      format!("#{}", joined),
      format!("#{}", joined.to_lowercase()),
      format!("#{}", camel),
    ])
    .chain(
      CATEGORY_TAGS
        .iter()
        .filter(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .flat_map(|(_, tags)| tags.iter().map(|t| t.to_string())),
    );

  let mut tags: Vec<String> = Vec::new();
  for tag in candidates {
    if !tags.contains(&tag) {
      tags.push(tag);
    }
  }
  tags.truncate(MAX_TAGS);
  tags
}

fn capitalize(word: &str) -> String {
  let mut chars = word.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn topic_spellings_follow_base_tags() {
    let tags = shorts_hashtags("easy pasta night");
    assert_eq!(&tags[..5], &BASE_TAGS.map(String::from));
    assert_eq!(tags[5], "#easypastanight");
    assert_eq!(tags[6], "#EasyPastaNight");
    assert_eq!(tags.len(), 7);
  }

  #[test]
  fn duplicate_spellings_collapse() {
    let tags = shorts_hashtags("Workout");
    assert_eq!(
      tags[5..],
      ["#Workout", "#workout", "#fitness", "#gym"].map(String::from)
    );
  }

  #[test]
  fn capped_at_fifteen() {
    let tags = shorts_hashtags("food tech game workout");
    assert_eq!(tags.len(), 15);
    assert_eq!(tags.last().map(String::as_str), Some("#gamer"));
  }
}
