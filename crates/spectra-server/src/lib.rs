//! Spectra HTTP API
//!
//! This crate exposes the spectra-core scraper as JSON endpoints.
//!
//! # Endpoints
//! - `GET /api/releases` - Latest episode releases
//! - `GET /api/anime?title=` - Detail page with episode list
//! - `GET /api/movies?page=` - Movie catalog
//! - `GET /api/search?keyword=&genre[]=&page=` - Keyword and genre search
//! - `GET /api/popular?page=` - Popular list
//! - `GET /api/episode?episode_url=` - Embedded player URL of an episode

pub mod error;
pub mod handlers;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Router};
use spectra_core::{ClientConfig, SpectraScraper};

pub use error::{AppError, AppResult};

/// Shared state of the API.
///
/// The scraper holds only immutable configuration, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<SpectraScraper>,
}

impl AppState {
    pub fn new(scraper: SpectraScraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }
}

/// Client configuration from the process environment.
///
/// `env_file` is loaded first when it exists. Variables already set in the
/// process are not overridden by the file.
pub fn load_config(env_file: impl AsRef<Path>) -> ClientConfig {
    // a missing file is the common case
    let _ = dotenvy::from_path(env_file.as_ref());
    ClientConfig::from_env()
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/api/releases", get(handlers::get_releases))
        .route("/api/anime", get(handlers::get_anime_info))
        .route("/api/movies", get(handlers::get_movies))
        .route("/api/search", get(handlers::search))
        .route("/api/popular", get(handlers::get_popular))
        .route("/api/episode", get(handlers::get_episode_video_url))
        .with_state(state)
}

pub async fn run_server(
    addr: SocketAddr,
    config: ClientConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Scraping {} (home page {})", config.base_url, config.home_page_url);
    let state = AppState::new(SpectraScraper::with_config(config)?);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server started at {}", listener.local_addr()?);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
