//! Main Spectra scraper API
//!
//! This module provides the high-level API for the catalog site.
//! It combines the page fetcher with the parsers: every method builds one
//! URL, performs one retrieval and runs the matching extraction.

use crate::client::{ClientConfig, SpectraClient};
use crate::error::{Result, SpectraError};
use crate::parser::{
    parse_anime_detail, parse_movies, parse_popular, parse_releases, parse_search_results,
    parse_video_link,
};
use crate::types::{AnimeDetail, Movie, PopularAnime, Release, SearchResult, VideoLink};
use crate::url::{
    build_category_url, build_movies_url, build_popular_url, build_search_url, slugify,
};

/// Main scraper API for the catalog site
///
/// Holds an immutable configuration; safe to share between tasks.
///
/// # Example
/// ```no_run
/// use spectra_core::SpectraScraper;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scraper = SpectraScraper::new()?;
///
///     let releases = scraper.releases().await?;
///     println!("Found {} releases", releases.len());
///
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpectraScraper {
    client: SpectraClient,
}

impl SpectraScraper {
    /// Create a new scraper with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        let client = SpectraClient::new()?;
        Ok(Self { client })
    }

    /// Create a new scraper for the given configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = SpectraClient::with_config(config)?;
        Ok(Self { client })
    }

    /// Create a new scraper with a custom client.
    pub fn with_client(client: SpectraClient) -> Self {
        Self { client }
    }

    /// Configuration in use.
    pub fn config(&self) -> &ClientConfig {
        self.client.config()
    }

    fn base_url(&self) -> &str {
        &self.client.config().base_url
    }

    /// Latest episode releases from the home page.
    pub async fn releases(&self) -> Result<Vec<Release>> {
        let html = self.client.fetch(&self.client.config().home_page_url).await?;
        parse_releases(&html, self.base_url())
    }

    /// Detail page of a title, including every episode reference.
    ///
    /// The title is turned into a slug (`"One Piece"` -> `one-piece`).
    ///
    /// # Returns
    /// * `Ok(AnimeDetail)` with the page's fields
    /// * `Err(SpectraError::InvalidInput)` if title is empty or whitespace-only
    /// * `Err(SpectraError::NotFound)` if the page has no title
    ///
    /// # Example
    /// ```no_run
    /// use spectra_core::SpectraScraper;
    ///
    /// # async fn example() -> Result<(), spectra_core::SpectraError> {
    /// let scraper = SpectraScraper::new()?;
    /// let detail = scraper.anime("One Piece").await?;
    /// println!("{} has {} episodes", detail.title, detail.episodes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn anime(&self, title: &str) -> Result<AnimeDetail> {
        if title.trim().is_empty() {
            return Err(SpectraError::InvalidInput("title cannot be empty".to_string()));
        }

        let slug = slugify(title);
        let html = self.client.fetch(&build_category_url(self.base_url(), &slug)).await?;
        parse_anime_detail(&html, &slug, self.base_url())
    }

    /// First page of the movie catalog.
    pub async fn movies(&self) -> Result<Vec<Movie>> {
        self.movies_page(1).await
    }

    /// Movie catalog with pagination (1-based).
    pub async fn movies_page(&self, page: u32) -> Result<Vec<Movie>> {
        let html = self.client.fetch(&build_movies_url(self.base_url(), page)).await?;
        parse_movies(&html, self.base_url())
    }

    /// Search by keyword and genres.
    ///
    /// An empty keyword browses everything matching the genres.
    ///
    /// # Example
    /// ```no_run
    /// use spectra_core::SpectraScraper;
    ///
    /// # async fn example() -> Result<(), spectra_core::SpectraError> {
    /// let scraper = SpectraScraper::new()?;
    /// let results = scraper.search("naruto", &["Action", "Comedy"]).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search<S: AsRef<str>>(
        &self,
        keyword: &str,
        genres: &[S],
    ) -> Result<Vec<SearchResult>> {
        self.search_page(keyword, genres, 1).await
    }

    /// Search with pagination (1-based).
    pub async fn search_page<S: AsRef<str>>(
        &self,
        keyword: &str,
        genres: &[S],
        page: u32,
    ) -> Result<Vec<SearchResult>> {
        let url = build_search_url(self.base_url(), keyword, genres, page);
        let html = self.client.fetch(&url).await?;
        parse_search_results(&html, self.base_url())
    }

    /// First page of the popular list.
    pub async fn popular(&self) -> Result<Vec<PopularAnime>> {
        self.popular_page(1).await
    }

    /// Popular list with pagination (1-based).
    pub async fn popular_page(&self, page: u32) -> Result<Vec<PopularAnime>> {
        let html = self.client.fetch(&build_popular_url(self.base_url(), page)).await?;
        parse_popular(&html, self.base_url())
    }

    /// Embedded player source of an episode page.
    ///
    /// # Arguments
    /// * `episode_url` - Absolute URL of the episode page (e.g., an `EpisodeRef::url`)
    ///
    /// # Returns
    /// * `Ok(VideoLink)` with the player URL
    /// * `Err(SpectraError::InvalidInput)` if episode_url is empty
    /// * `Err(SpectraError::NotFound)` if the page has no player
    pub async fn video_link(&self, episode_url: &str) -> Result<VideoLink> {
        if episode_url.trim().is_empty() {
            return Err(SpectraError::InvalidInput("episode_url cannot be empty".to_string()));
        }

        let html = self.client.fetch(episode_url).await?;
        parse_video_link(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_creation() {
        let scraper = SpectraScraper::new();
        assert!(scraper.is_ok());
    }

    #[test]
    fn test_scraper_keeps_config() {
        let scraper =
            SpectraScraper::with_config(ClientConfig::new("http://localhost:9000/")).unwrap();
        assert_eq!(scraper.config().base_url, "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_anime_empty_title() {
        let scraper = SpectraScraper::new().unwrap();
        let result = scraper.anime("").await;

        match result {
            Err(SpectraError::InvalidInput(msg)) => {
                assert!(msg.contains("title"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[tokio::test]
    async fn test_anime_whitespace_title() {
        let scraper = SpectraScraper::new().unwrap();
        let result = scraper.anime("   ").await;
        assert!(matches!(result, Err(SpectraError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_video_link_empty_url() {
        let scraper = SpectraScraper::new().unwrap();
        let result = scraper.video_link("").await;

        match result {
            Err(SpectraError::InvalidInput(msg)) => {
                assert!(msg.contains("episode_url"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }
}
