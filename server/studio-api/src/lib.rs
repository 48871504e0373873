//! Creator Studio API
//!
//! HTTP + WebSocket backend for the YouTube creator dashboard: SEO audits,
//! title generation, content planning, revenue and analytics logs, channel
//! research, and live updates.

pub mod ai;
pub mod broadcast;
pub mod config;
pub mod dates;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod planning;
pub mod research;
pub mod state;
pub mod store;
pub mod youtube;

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::Config;
pub use error::{ApiError, ClientError};
pub use state::AppState;
pub use store::{JsonFileStore, Store, StoreError};

pub fn build_router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/api/health", get(handlers::health))
    .route(
      "/api/dashboard/stats",
      get(handlers::dashboard::get_stats).post(handlers::dashboard::update_stats),
    )
    .route("/api/dashboard/activity", post(handlers::dashboard::log_activity))
    .route("/api/seo/audit", post(handlers::seo::run_audit))
    .route("/api/seo/history", get(handlers::seo::history))
    .route("/api/seo/audits/:id", get(handlers::seo::get_audit))
    .route("/api/titles/generate", post(handlers::titles::generate))
    .route("/api/titles/history", get(handlers::titles::history))
    .route("/api/titles/score", post(handlers::titles::score))
    .route(
      "/api/ideas",
      get(handlers::ideas::list).post(handlers::ideas::create),
    )
    .route("/api/ideas/:id", put(handlers::ideas::update))
    .route(
      "/api/videos",
      get(handlers::videos::list).post(handlers::videos::create),
    )
    .route("/api/videos/:id", put(handlers::videos::update))
    .route("/api/ai/status", get(handlers::ai::status))
    .route("/api/ai/seo-suggestions", post(handlers::ai::seo_suggestions))
    .route("/api/youtube/status", get(handlers::youtube::status))
    .route("/api/youtube/analyze-channel", post(handlers::youtube::analyze_channel))
    .route("/api/youtube/video-stats", post(handlers::youtube::video_stats))
    .route("/api/youtube/trending-keywords", get(handlers::youtube::trending_keywords))
    .route("/api/scripts", get(handlers::scripts::list))
    .route("/api/scripts/save", post(handlers::scripts::save))
    .route(
      "/api/scripts/:id",
      get(handlers::scripts::get).delete(handlers::scripts::delete),
    )
    .route("/api/thumbnails", get(handlers::thumbnails::list))
    .route("/api/thumbnails/save", post(handlers::thumbnails::save))
    .route("/api/thumbnails/:id", get(handlers::thumbnails::get))
    .route("/api/competitors", get(handlers::competitors::list))
    .route("/api/competitors/add", post(handlers::competitors::add))
    .route("/api/competitors/analyze", post(handlers::competitors::analyze))
    .route("/api/shorts/generate", post(handlers::shorts::generate))
    .route(
      "/api/calendar",
      get(handlers::calendar::list).post(handlers::calendar::create),
    )
    .route(
      "/api/analytics",
      get(handlers::analytics::list).post(handlers::analytics::create),
    )
    .route(
      "/api/revenue",
      get(handlers::revenue::list).post(handlers::revenue::create),
    )
    .route("/api/revenue/calculate", post(handlers::revenue::calculate))
    .route("/api/keywords", get(handlers::keywords::list))
    .route("/api/keywords/research", post(handlers::keywords::research))
    .route(
      "/api/export",
      get(handlers::export::export).post(handlers::export::import),
    )
    .route("/ws", get(handlers::ws::upgrade))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
    .with_state(state)
}
