//! Writing assistant: LLM-backed when an API key is configured, rule-based otherwise.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use seo_engine::{audit, rank_titles, suggest_improvements, template_titles, AuditInput};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::ClientError;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const MAX_SUGGESTIONS: usize = 5;

static LIST_NUMBERING: OnceLock<Regex> = OnceLock::new();
static BULLET: OnceLock<Regex> = OnceLock::new();

fn list_numbering() -> &'static Regex {
  LIST_NUMBERING.get_or_init(|| Regex::new(r"^\d+[.)]\s*").expect("numbering pattern is valid"))
}

fn bullet() -> &'static Regex {
  BULLET.get_or_init(|| Regex::new(r"^[-*•]\s*").expect("bullet pattern is valid"))
}

#[async_trait]
pub trait Assistant: Send + Sync {
  /// Whether this implementation calls a real model.
  fn enabled(&self) -> bool;

  async fn titles(&self, topic: &str, count: usize) -> Result<Vec<String>, ClientError>;

  async fn seo_suggestions(&self, title: &str, description: &str)
    -> Result<Vec<String>, ClientError>;
}

/// Pick the implementation once, from whether an OpenAI key is configured.
pub fn assistant_from_config(config: &Config) -> Result<Arc<dyn Assistant>, ClientError> {
  match &config.openai_api_key {
    Some(key) => {
      info!(model = %config.openai_model, "AI features enabled");
      Ok(Arc::new(OpenAiAssistant::new(key.clone(), config.openai_model.clone())?))
    }
    None => {
      info!("AI features disabled (no OPENAI_API_KEY), using offline assistant");
      Ok(Arc::new(OfflineAssistant))
    }
  }
}

// ---------------------------------------------------------------------------
// Offline
// ---------------------------------------------------------------------------

/// Template titles and audit-derived suggestions; never fails.
pub struct OfflineAssistant;

#[async_trait]
impl Assistant for OfflineAssistant {
  fn enabled(&self) -> bool {
    false
  }

  async fn titles(&self, topic: &str, count: usize) -> Result<Vec<String>, ClientError> {
    Ok(
      rank_titles(template_titles(topic))
        .into_iter()
        .take(count)
        .map(|t| t.title)
        .collect(),
    )
  }

  async fn seo_suggestions(
    &self,
    title: &str,
    description: &str,
  ) -> Result<Vec<String>, ClientError> {
    let report = audit(&AuditInput::new(title, description, ""));
    Ok(suggest_improvements(&report))
  }
}

// ---------------------------------------------------------------------------
// OpenAI chat completions
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
  model: &'a str,
  messages: [ChatMessage<'a>; 2],
  temperature: f32,
  max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
  role: &'a str,
  content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
  choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
  message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
  #[serde(default)]
  content: String,
}

pub struct OpenAiAssistant {
  http: reqwest::Client,
  api_key: String,
  model: String,
}

impl OpenAiAssistant {
  pub fn new(api_key: String, model: String) -> Result<Self, ClientError> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(60))
      .build()?;
    Ok(Self {
      http,
      api_key,
      model,
    })
  }

  async fn complete(
    &self,
    system: &str,
    user: &str,
    temperature: f32,
    max_tokens: u32,
  ) -> Result<String, ClientError> {
    let request = ChatRequest {
      model: &self.model,
      messages: [
        ChatMessage {
          role: "system",
          content: system,
        },
        ChatMessage {
          role: "user",
          content: user,
        },
      ],
      temperature,
      max_tokens,
    };

    debug!(model = %self.model, "chat completion request");
    let response = self
      .http
      .post(OPENAI_CHAT_URL)
      .bearer_auth(&self.api_key)
      .json(&request)
      .send()
      .await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.text().await.unwrap_or_default();
      return Err(ClientError::Api {
        status: status.as_u16(),
        body,
      });
    }

    let parsed: ChatResponse = response.json().await?;
    parsed
      .choices
      .into_iter()
      .next()
      .map(|c| c.message.content)
      .ok_or_else(|| ClientError::Malformed("no choices in completion".into()))
  }
}

#[async_trait]
impl Assistant for OpenAiAssistant {
  fn enabled(&self) -> bool {
    true
  }

  async fn titles(&self, topic: &str, count: usize) -> Result<Vec<String>, ClientError> {
    let user = format!(
      "Generate {} viral YouTube video titles about \"{}\". Make them engaging, click-worthy, \
       and optimized for high click-through rates. Include power words, numbers, questions, \
       and emotional triggers.",
      count, topic
    );
    let content = self
      .complete(
        "You are a YouTube title expert. Generate viral, high-CTR video titles. \
         Return only titles, one per line, no numbering.",
        &user,
        0.9,
        500,
      )
      .await?;
    Ok(parse_title_lines(&content, count))
  }

  async fn seo_suggestions(
    &self,
    title: &str,
    description: &str,
  ) -> Result<Vec<String>, ClientError> {
    let user = format!(
      "Analyze this YouTube video metadata and provide 5 specific SEO improvement suggestions:\n\n\
       Title: {}\nDescription: {}\n\n\
       Provide suggestions in JSON format: {{\"suggestions\": [\"suggestion1\", \"suggestion2\", ...]}}",
      title, description
    );
    let content = self
      .complete(
        "You are a YouTube SEO expert. Provide actionable SEO improvement suggestions.",
        &user,
        0.7,
        500,
      )
      .await?;
    Ok(parse_suggestions(&content))
  }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// One title per non-blank line, leading "1." / "1)" numbering removed.
pub fn parse_title_lines(content: &str, count: usize) -> Vec<String> {
  content
    .lines()
    .map(|line| list_numbering().replace(line.trim(), "").trim().to_string())
    .filter(|t| !t.is_empty())
    .take(count)
    .collect()
}

#[derive(Deserialize)]
struct SuggestionList {
  suggestions: Vec<String>,
}

/// JSON `{"suggestions": [...]}` if the model complied, bullet lines otherwise.
pub fn parse_suggestions(content: &str) -> Vec<String> {
  if let Ok(list) = serde_json::from_str::<SuggestionList>(content.trim()) {
    return list.suggestions.into_iter().take(MAX_SUGGESTIONS).collect();
  }
  content
    .lines()
    .map(|line| bullet().replace(line.trim(), "").trim().to_string())
    .filter(|s| !s.is_empty())
    .take(MAX_SUGGESTIONS)
    .collect()
}
