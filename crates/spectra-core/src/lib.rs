//! Spectra Core Library
//!
//! This crate provides the scraping functionality for the anitaku.pe
//! anime catalog.
//!
//! # Features
//! - Latest releases, movie catalog and popular list
//! - Keyword and genre search
//! - Detail pages with every episode expanded from the page's pagination
//! - Embedded player source of an episode page

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;
pub mod url;

// Re-export main types for convenience
pub use client::{ClientConfig, SpectraClient, DEFAULT_BASE_URL};
pub use error::{Result, SpectraError};
pub use scraper::SpectraScraper;
pub use types::{
    AnimeDetail, EpisodeRef, Movie, PopularAnime, Release, SearchResult, Translation, VideoLink,
};
