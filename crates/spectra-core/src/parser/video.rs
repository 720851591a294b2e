//! Episode page parser: the embedded player source.

use scraper::Html;

use crate::error::{Result, SpectraError};
use crate::types::VideoLink;

use super::extract::attr;
use super::rules::VIDEO_RULES;

/// Parse the embedded player URL from an episode page.
///
/// Only the first player frame is considered.
///
/// # Returns
/// * `Ok(VideoLink)` with the frame source, left as found (often protocol-relative)
/// * `Err(SpectraError::NotFound)` if the page has no player frame
pub fn parse_video_link(html: &str) -> Result<VideoLink> {
    let selectors = VIDEO_RULES.compile()?;
    let document = Html::parse_document(html);

    let video_url = attr(&document, &selectors.frame, selectors.source_attr);
    if video_url.is_empty() {
        return Err(SpectraError::NotFound("video url".to_string()));
    }

    Ok(VideoLink { video_url })
}
