//! Data types for the Spectra scraper
//!
//! This module contains the records produced by the extraction layer.
//! All types implement Serialize and Deserialize with snake_case keys.

use serde::{Deserialize, Serialize};

/// Whether a listed title is the subtitled or the dubbed release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Translation {
    /// Original audio with subtitles
    Sub,
    /// Dubbed audio
    Dub,
}

impl Translation {
    /// Classify a listing title: "Dub" anywhere in the title means dubbed.
    pub fn from_title(title: &str) -> Self {
        if title.contains("Dub") {
            Translation::Dub
        } else {
            Translation::Sub
        }
    }
}

/// Latest episode release from the home page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Title from the item anchor's title attribute
    pub title: String,
    /// Absolute URL of the episode page
    pub link: String,
    /// Cover image URL
    pub image: String,
    /// Episode label (e.g., "Episode 12")
    pub episode: String,
}

/// Movie entry; also the shape of a search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub link: String,
    pub image: String,
    /// Release date text (e.g., "Released: 2021")
    pub release_date: String,
    pub is_subbed: Translation,
}

/// Search and filter results share the movie listing layout.
pub type SearchResult = Movie;

/// Entry of the popular list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularAnime {
    pub title: String,
    pub link: String,
    pub image: String,
    pub release_date: String,
}

/// Full description of one catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeDetail {
    /// Slug the detail page was requested with (e.g., "one-piece")
    pub slug: String,
    /// Display title, never empty
    pub title: String,
    /// Cover image URL
    pub image: String,
    /// Plot summary, empty if the page has none
    pub description: String,
    /// Genres in page order
    pub genres: Vec<String>,
    /// Release year or date, label stripped
    pub release_date: String,
    /// Airing status (e.g., "Ongoing", "Completed"), label stripped
    pub status: String,
    /// Every episode listed by the page's pagination
    pub episodes: Vec<EpisodeRef>,
}

/// Reference to a single episode's playback page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRef {
    /// Episode number, always a positive integer
    pub number: String,
    /// Absolute URL of the episode page
    pub url: String,
}

/// Embedded player source of an episode page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoLink {
    /// Absolute or protocol-relative URL (e.g., "//embed.example/streaming.php?id=1")
    pub video_url: String,
}
