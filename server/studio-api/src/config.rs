//! Service configuration from environment variables (and an optional `.env`).

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("{var}: {reason}")]
  Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct Config {
  pub bind_addr: IpAddr,
  pub port: u16,
  /// JSON database file; created on first write.
  pub data_file: PathBuf,
  pub openai_api_key: Option<String>,
  pub openai_model: String,
  pub youtube_api_key: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
      port: 3000,
      data_file: PathBuf::from("data/database.json"),
      openai_api_key: None,
      openai_model: "gpt-4o-mini".to_string(),
      youtube_api_key: None,
    }
  }
}

impl Config {
  /// Load `.env` if present, then read the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    let _ = dotenvy::dotenv();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build from any key lookup; blank values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
    let mut config = Self::default();

    if let Some(port) = get("PORT") {
      config.port = port.trim().parse().map_err(|e| ConfigError::Invalid {
        var: "PORT",
        reason: format!("{}", e),
      })?;
    }
    if let Some(addr) = get("BIND_ADDR") {
      config.bind_addr = addr.trim().parse().map_err(|e| ConfigError::Invalid {
        var: "BIND_ADDR",
        reason: format!("{}", e),
      })?;
    }
    if let Some(path) = get("DATA_FILE") {
      config.data_file = PathBuf::from(path);
    }
    if let Some(model) = get("OPENAI_MODEL") {
      config.openai_model = model;
    }
    config.openai_api_key = get("OPENAI_API_KEY");
    config.youtube_api_key = get("YOUTUBE_API_KEY");
    Ok(config)
  }

  pub fn socket_addr(&self) -> SocketAddr {
    SocketAddr::new(self.bind_addr, self.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| (k.to_string(), v.to_string()))
      .collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn defaults_when_nothing_set() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    assert!(config.openai_api_key.is_none());
    assert!(config.youtube_api_key.is_none());
  }

  #[test]
  fn reads_keys_and_overrides() {
    let config = Config::from_lookup(lookup(&[
      ("PORT", "8080"),
      ("BIND_ADDR", "0.0.0.0"),
      ("DATA_FILE", "/tmp/db.json"),
      ("OPENAI_API_KEY", "sk-test"),
      ("YOUTUBE_API_KEY", "  "),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(config.data_file, PathBuf::from("/tmp/db.json"));
    assert_eq!(config.openai_api_key.as_deref(), Some("sk-test"));
    assert!(config.youtube_api_key.is_none());
  }

  #[test]
  fn invalid_port_is_an_error() {
    let err = Config::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert!(err.to_string().starts_with("PORT"));
  }
}
