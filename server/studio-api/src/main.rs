//! Binary entrypoint for the creator studio API.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use studio_api::ai::assistant_from_config;
use studio_api::youtube::directory_from_config;
use studio_api::{build_router, AppState, Config, JsonFileStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
    )
    .init();

  let config = Config::from_env()?;
  let store = JsonFileStore::open(config.data_file.clone()).await?;

  let state = Arc::new(AppState::new(
    Arc::new(store),
    assistant_from_config(&config)?,
    directory_from_config(&config)?,
  ));
  let app = build_router(state);

  let addr = config.socket_addr();
  info!("studio-api listening on http://{}", addr);

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
