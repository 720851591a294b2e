//! Listing page parser
//!
//! The home page, the movie catalog, the popular list and the filter page all
//! render the same item grid. One pass extracts the raw fields of every item;
//! the per-page functions shape them into typed records.

use scraper::Html;

use crate::error::Result;
use crate::types::{Movie, PopularAnime, Release, SearchResult, Translation};

use super::extract::{attr, find, text};
use super::rules::{ListingRules, LISTING_RULES};

/// Raw fields of one grid item, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingItem {
    pub title: String,
    /// Absolute link (base URL + relative href)
    pub link: String,
    pub image: String,
    pub episode: String,
    pub released: String,
}

/// Extract every grid item of a listing page.
///
/// Items are returned in document order. Items with an empty title are kept;
/// filtering is left to the caller.
///
/// # Arguments
/// * `html` - Raw HTML content of the page
/// * `rules` - Locator table for the grid
/// * `base_url` - Site root prefixed to each relative link
pub fn extract_listing(
    html: &str,
    rules: &ListingRules,
    base_url: &str,
) -> Result<Vec<ListingItem>> {
    let selectors = rules.compile()?;
    let document = Html::parse_document(html);

    let items = find(&document, &selectors.item)
        .into_iter()
        .map(|item| ListingItem {
            title: attr(item, &selectors.title, "title"),
            link: format!("{}{}", base_url, attr(item, &selectors.link, "href")),
            image: attr(item, &selectors.image, "src"),
            episode: text(item, &selectors.episode),
            released: text(item, &selectors.released),
        })
        .collect();

    Ok(items)
}

/// Parse the latest releases from the home page.
pub fn parse_releases(html: &str, base_url: &str) -> Result<Vec<Release>> {
    let items = extract_listing(html, &LISTING_RULES, base_url)?;
    Ok(items
        .into_iter()
        .map(|item| Release {
            title: item.title,
            link: item.link,
            image: item.image,
            episode: item.episode,
        })
        .collect())
}

/// Parse the movie catalog page.
pub fn parse_movies(html: &str, base_url: &str) -> Result<Vec<Movie>> {
    let items = extract_listing(html, &LISTING_RULES, base_url)?;
    Ok(items.into_iter().map(into_movie).collect())
}

/// Parse the filter (search) results page.
pub fn parse_search_results(html: &str, base_url: &str) -> Result<Vec<SearchResult>> {
    parse_movies(html, base_url)
}

/// Parse the popular list page.
pub fn parse_popular(html: &str, base_url: &str) -> Result<Vec<PopularAnime>> {
    let items = extract_listing(html, &LISTING_RULES, base_url)?;
    Ok(items
        .into_iter()
        .map(|item| PopularAnime {
            title: item.title,
            link: item.link,
            image: item.image,
            release_date: item.released,
        })
        .collect())
}

fn into_movie(item: ListingItem) -> Movie {
    let is_subbed = Translation::from_title(&item.title);
    Movie {
        title: item.title,
        link: item.link,
        image: item.image,
        release_date: item.released,
        is_subbed,
    }
}
