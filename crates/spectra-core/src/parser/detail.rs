//! Detail page parser
//!
//! A detail page is read in three independent passes over disjoint regions:
//! the header (title, cover), the metadata body (description, genres,
//! labeled fields) and the episode listing. Only the header's title is
//! mandatory.

use scraper::Html;

use crate::error::{Result, SpectraError};
use crate::types::{AnimeDetail, EpisodeRef};

use super::episodes::{expand_episode_ranges, EpisodeRange};
use super::extract::{attr, element_text, find, first, labeled_row, labeled_text, text};
use super::rules::{DetailSelectors, DETAIL_RULES};

/// Fields of the header region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderFields {
    pub title: String,
    pub image: String,
}

/// Fields of the metadata region; all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyFields {
    pub description: String,
    pub genres: Vec<String>,
    pub release_date: String,
    pub status: String,
}

/// Parse a detail page.
///
/// # Arguments
/// * `html` - Raw HTML content of the `/category/<slug>` page
/// * `slug` - Slug the page was requested with, used for episode URLs
/// * `base_url` - Site root
///
/// # Returns
/// * `Ok(AnimeDetail)` if the page has a title
/// * `Err(SpectraError::NotFound)` if it has none
pub fn parse_anime_detail(html: &str, slug: &str, base_url: &str) -> Result<AnimeDetail> {
    let selectors = DETAIL_RULES.compile()?;
    let document = Html::parse_document(html);

    let header = parse_header(&document, &selectors);
    let body = parse_body(&document, &selectors);
    let episodes = parse_episode_list(&document, &selectors, slug, base_url);

    if header.title.is_empty() {
        return Err(SpectraError::NotFound(format!("anime '{}'", slug)));
    }

    Ok(AnimeDetail {
        slug: slug.to_string(),
        title: header.title,
        image: header.image,
        description: body.description,
        genres: body.genres,
        release_date: body.release_date,
        status: body.status,
        episodes,
    })
}

/// Header pass: title and cover image.
pub fn parse_header(document: &Html, selectors: &DetailSelectors) -> HeaderFields {
    match first(document, &selectors.header) {
        Some(header) => HeaderFields {
            title: text(header, &selectors.title),
            image: attr(header, &selectors.image, "src"),
        },
        None => HeaderFields::default(),
    }
}

/// Body pass: description, genres, release date and status.
pub fn parse_body(document: &Html, selectors: &DetailSelectors) -> BodyFields {
    let Some(body) = first(document, &selectors.body) else {
        return BodyFields::default();
    };
    let rules = &selectors.rules;

    let genres = labeled_row(body, &selectors.info_row, rules.genre_label)
        .map(|row| {
            let names = find(row, &selectors.genre_anchor)
                .iter()
                .map(element_text)
                .collect::<Vec<_>>();
            clean_genres(names)
        })
        .unwrap_or_default();

    BodyFields {
        description: text(body, &selectors.description),
        genres,
        release_date: labeled_text(body, &selectors.info_row, rules.released_label),
        status: labeled_text(body, &selectors.info_row, rules.status_label),
    }
}

/// Episode pass: expand every pagination anchor of the listing block.
pub fn parse_episode_list(
    document: &Html,
    selectors: &DetailSelectors,
    slug: &str,
    base_url: &str,
) -> Vec<EpisodeRef> {
    let Some(block) = first(document, &selectors.episode_block) else {
        return Vec::new();
    };
    let rules = &selectors.rules;

    let anchors = find(block, &selectors.episode_page);
    let ranges: Vec<EpisodeRange<'_>> = anchors
        .iter()
        .map(|a| {
            EpisodeRange::new(
                a.value().attr(rules.ep_start_attr).unwrap_or_default(),
                a.value().attr(rules.ep_end_attr).unwrap_or_default(),
            )
        })
        .collect();

    expand_episode_ranges(&ranges, slug, base_url)
}

/// Normalize genre anchor texts.
///
/// The site renders genres as `<a>Action</a>, <a>, Comedy</a>`, so stray
/// commas and whitespace are trimmed and entries without a single letter
/// or digit are dropped. Order is kept.
pub fn clean_genres<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            name.as_ref()
                .trim_matches(|c: char| c == ',' || c.is_whitespace())
                .to_string()
        })
        .filter(|name| name.chars().any(char::is_alphanumeric))
        .collect()
}
