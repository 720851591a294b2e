//! HTML parsers for catalog pages
//!
//! This module contains the extraction layer:
//! - `extract`: field extractors (`find`, `text`, `attr`) over a scope
//! - `rules`: locator tables, one per page type
//! - `listing`: releases, movies, popular and search grids
//! - `detail`: three-pass detail page aggregation
//! - `episodes`: episode-range expansion
//! - `video`: embedded player source of an episode page

pub mod detail;
pub mod episodes;
pub mod extract;
pub mod listing;
pub mod rules;
pub mod video;

// Re-export main parsing functions
pub use detail::{clean_genres, parse_anime_detail};
pub use episodes::{expand_episode_ranges, EpisodeRange};
pub use listing::{
    extract_listing, parse_movies, parse_popular, parse_releases, parse_search_results,
};
pub use video::parse_video_link;
