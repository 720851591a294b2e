//! API handlers
//!
//! Each handler validates its query, calls one scraper operation and returns
//! the records as JSON.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use spectra_core::{AnimeDetail, Movie, PopularAnime, Release, SearchResult, VideoLink};

use crate::error::{AppError, AppResult};
use crate::AppState;

const WELCOME: &str = "Welcome to Spectra API";

#[derive(Debug, Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
}

/// Pagination parameter shared by the listing endpoints.
///
/// Kept as text so every endpoint rejects a malformed page the same way.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EpisodeQuery {
    pub episode_url: Option<String>,
}

/// Search parameters; `genre[]` may repeat.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub genres: Vec<String>,
    pub page: Option<String>,
}

impl SearchQuery {
    /// Collect search parameters from raw query pairs, keeping genre order.
    ///
    /// Unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = SearchQuery::default();

        for (key, value) in pairs {
            match key.as_str() {
                "keyword" => query.keyword = value,
                "genre[]" => query.genres.push(value),
                "page" => query.page = Some(value),
                _ => {}
            }
        }

        query
    }
}

fn required(value: Option<String>, name: &str) -> AppResult<String> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::bad_request(format!("Missing {} parameter", name)))
}

/// 1-based page number; absent or empty means the first page.
fn page_number(page: Option<&str>) -> AppResult<u32> {
    match page.map(str::trim).filter(|p| !p.is_empty()) {
        None => Ok(1),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::bad_request(format!("Invalid page parameter: {}", raw))),
    }
}

pub async fn welcome() -> &'static str {
    WELCOME
}

pub async fn get_releases(State(state): State<AppState>) -> AppResult<Json<Vec<Release>>> {
    let releases = state.scraper.releases().await?;
    Ok(Json(releases))
}

pub async fn get_anime_info(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> AppResult<Json<AnimeDetail>> {
    let title = required(query.title, "title")?;
    let detail = state.scraper.anime(&title).await?;
    Ok(Json(detail))
}

pub async fn get_movies(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Vec<Movie>>> {
    let page = page_number(query.page.as_deref())?;
    let movies = state.scraper.movies_page(page).await?;
    Ok(Json(movies))
}

pub async fn search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Json<Vec<SearchResult>>> {
    let query = SearchQuery::from_pairs(pairs);
    let page = page_number(query.page.as_deref())?;
    let results = state
        .scraper
        .search_page(&query.keyword, &query.genres, page)
        .await?;
    Ok(Json(results))
}

pub async fn get_popular(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> AppResult<Json<Vec<PopularAnime>>> {
    let page = page_number(query.page.as_deref())?;
    let popular = state.scraper.popular_page(page).await?;
    Ok(Json(popular))
}

pub async fn get_episode_video_url(
    State(state): State<AppState>,
    Query(query): Query<EpisodeQuery>,
) -> AppResult<Json<VideoLink>> {
    let episode_url = required(query.episode_url, "episode_url")?;
    let link = state.scraper.video_link(&episode_url).await?;
    Ok(Json(link))
}
