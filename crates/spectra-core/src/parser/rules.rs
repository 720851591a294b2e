//! Locator rule tables
//!
//! Every site-specific selector lives here, one table per page type. The
//! extraction code only ever sees the compiled form.

use scraper::Selector;

use crate::error::Result;

use super::extract::compile;

/// Selectors for pages built around the `.last_episodes` item grid
/// (home page releases, movies, popular, filter results).
#[derive(Debug, Clone, Copy)]
pub struct ListingRules {
    /// Repeated list item container
    pub item: &'static str,
    /// Anchor carrying the title in its `title` attribute
    pub title: &'static str,
    /// Anchor carrying the relative link
    pub link: &'static str,
    /// Cover image
    pub image: &'static str,
    /// Episode label on the home page
    pub episode: &'static str,
    /// Release date on the catalog pages
    pub released: &'static str,
}

pub const LISTING_RULES: ListingRules = ListingRules {
    item: ".last_episodes .items li",
    title: "p.name a",
    link: "a",
    image: "img",
    episode: "p.episode",
    released: "p.released",
};

/// Selectors for the `/category/<slug>` detail page.
#[derive(Debug, Clone, Copy)]
pub struct DetailRules {
    /// Header region
    pub header: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    /// Metadata region
    pub body: &'static str,
    pub description: &'static str,
    /// Labeled metadata rows ("Genre:", "Released:", ...)
    pub info_row: &'static str,
    pub genre_anchor: &'static str,
    pub genre_label: &'static str,
    pub released_label: &'static str,
    pub status_label: &'static str,
    /// Episode listing region
    pub episode_block: &'static str,
    /// Pagination anchors carrying `ep_start` / `ep_end`
    pub episode_page: &'static str,
    pub ep_start_attr: &'static str,
    pub ep_end_attr: &'static str,
}

pub const DETAIL_RULES: DetailRules = DetailRules {
    header: "div.anime_info_body_bg",
    title: "h1",
    image: "img",
    body: "div.anime_info_body",
    description: "div.description",
    info_row: "p.type",
    genre_anchor: "a",
    genre_label: "Genre:",
    released_label: "Released:",
    status_label: "Status:",
    episode_block: "div.anime_video_body",
    episode_page: "ul#episode_page li a",
    ep_start_attr: "ep_start",
    ep_end_attr: "ep_end",
};

/// Selectors for an episode playback page.
#[derive(Debug, Clone, Copy)]
pub struct VideoRules {
    pub frame: &'static str,
    pub source_attr: &'static str,
}

pub const VIDEO_RULES: VideoRules = VideoRules {
    frame: "div.play-video iframe",
    source_attr: "src",
};

/// Compiled form of [`ListingRules`].
#[derive(Debug)]
pub struct ListingSelectors {
    pub item: Selector,
    pub title: Selector,
    pub link: Selector,
    pub image: Selector,
    pub episode: Selector,
    pub released: Selector,
}

impl ListingRules {
    pub fn compile(&self) -> Result<ListingSelectors> {
        Ok(ListingSelectors {
            item: compile(self.item)?,
            title: compile(self.title)?,
            link: compile(self.link)?,
            image: compile(self.image)?,
            episode: compile(self.episode)?,
            released: compile(self.released)?,
        })
    }
}

/// Compiled form of [`DetailRules`]; labels and attribute names are kept as text.
#[derive(Debug)]
pub struct DetailSelectors {
    pub header: Selector,
    pub title: Selector,
    pub image: Selector,
    pub body: Selector,
    pub description: Selector,
    pub info_row: Selector,
    pub genre_anchor: Selector,
    pub episode_block: Selector,
    pub episode_page: Selector,
    pub rules: DetailRules,
}

impl DetailRules {
    pub fn compile(&self) -> Result<DetailSelectors> {
        Ok(DetailSelectors {
            header: compile(self.header)?,
            title: compile(self.title)?,
            image: compile(self.image)?,
            body: compile(self.body)?,
            description: compile(self.description)?,
            info_row: compile(self.info_row)?,
            genre_anchor: compile(self.genre_anchor)?,
            episode_block: compile(self.episode_block)?,
            episode_page: compile(self.episode_page)?,
            rules: *self,
        })
    }
}

/// Compiled form of [`VideoRules`].
#[derive(Debug)]
pub struct VideoSelectors {
    pub frame: Selector,
    pub source_attr: &'static str,
}

impl VideoRules {
    pub fn compile(&self) -> Result<VideoSelectors> {
        Ok(VideoSelectors {
            frame: compile(self.frame)?,
            source_attr: self.source_attr,
        })
    }
}
