//! Episode-range expansion
//!
//! Detail pages do not list episodes one by one. They carry pagination
//! anchors such as `<a ep_start="0" ep_end="100">`, and every episode inside
//! the range is reachable at `<base>/<slug>-episode-<n>`.

use crate::types::EpisodeRef;
use crate::url::build_episode_url;

/// Raw bounds of one pagination anchor, as found in the markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRange<'a> {
    pub start: &'a str,
    pub end: &'a str,
}

impl<'a> EpisodeRange<'a> {
    pub fn new(start: &'a str, end: &'a str) -> Self {
        Self { start, end }
    }

    /// Both bounds as integers, or `None` if either is malformed.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let start = self.start.parse().ok()?;
        let end = self.end.parse().ok()?;
        Some((start, end))
    }
}

/// Expand pagination anchors into individual episode references.
///
/// Anchors are processed in the given order and their episodes concatenated
/// without sorting or de-duplication. Within one anchor, numbers run from
/// `start` to `end` inclusive, skipping anything below 1 (the site uses 0 as
/// the lower bound of the first page). An anchor whose bounds do not parse
/// contributes nothing.
///
/// # Examples
/// ```
/// use spectra_core::parser::{expand_episode_ranges, EpisodeRange};
///
/// let episodes = expand_episode_ranges(
///     &[EpisodeRange::new("0", "2"), EpisodeRange::new("x", "9")],
///     "naruto",
///     "https://anitaku.pe",
/// );
/// assert_eq!(episodes.len(), 2);
/// assert_eq!(episodes[1].url, "https://anitaku.pe/naruto-episode-2");
/// ```
pub fn expand_episode_ranges(
    ranges: &[EpisodeRange<'_>],
    slug: &str,
    base_url: &str,
) -> Vec<EpisodeRef> {
    let mut episodes = Vec::new();

    for range in ranges {
        let Some((start, end)) = range.bounds() else {
            tracing::debug!(
                ep_start = range.start,
                ep_end = range.end,
                "Skipping malformed episode range"
            );
            continue;
        };

        episodes.extend((start.max(1)..=end).map(|number| EpisodeRef {
            number: number.to_string(),
            url: build_episode_url(base_url, slug, number),
        }));
    }

    episodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const BASE: &str = "https://anitaku.pe";

    fn numbers(episodes: &[EpisodeRef]) -> Vec<i64> {
        episodes.iter().map(|e| e.number.parse().unwrap()).collect()
    }

    #[test]
    fn test_expand_single_range() {
        let episodes = expand_episode_ranges(&[EpisodeRange::new("1", "3")], "one-piece", BASE);
        assert_eq!(
            episodes,
            vec![
                EpisodeRef {
                    number: "1".to_string(),
                    url: "https://anitaku.pe/one-piece-episode-1".to_string(),
                },
                EpisodeRef {
                    number: "2".to_string(),
                    url: "https://anitaku.pe/one-piece-episode-2".to_string(),
                },
                EpisodeRef {
                    number: "3".to_string(),
                    url: "https://anitaku.pe/one-piece-episode-3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_expand_skips_zero_sentinel() {
        let episodes = expand_episode_ranges(&[EpisodeRange::new("0", "3")], "x", BASE);
        assert_eq!(numbers(&episodes), vec![1, 2, 3]);
    }

    #[test]
    fn test_expand_zero_zero_is_empty() {
        assert!(expand_episode_ranges(&[EpisodeRange::new("0", "0")], "x", BASE).is_empty());
    }

    #[test]
    fn test_expand_inverted_range_is_empty() {
        assert!(expand_episode_ranges(&[EpisodeRange::new("5", "2")], "x", BASE).is_empty());
    }

    #[test]
    fn test_expand_skips_malformed_anchor_only() {
        let ranges = [
            EpisodeRange::new("1", "2"),
            EpisodeRange::new("", "10"),
            EpisodeRange::new("3", "end"),
            EpisodeRange::new("3", "4"),
        ];
        let episodes = expand_episode_ranges(&ranges, "x", BASE);
        assert_eq!(numbers(&episodes), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_expand_concatenates_without_dedup() {
        let ranges = [EpisodeRange::new("100", "101"), EpisodeRange::new("0", "100")];
        let episodes = expand_episode_ranges(&ranges, "x", BASE);
        assert_eq!(episodes.len(), 102);
        assert_eq!(numbers(&episodes)[..3], [100, 101, 1]);
        assert_eq!(episodes.last().unwrap().number, "100");
    }

    #[test]
    fn test_bounds_parsing() {
        assert_eq!(EpisodeRange::new("0", "100").bounds(), Some((0, 100)));
        assert_eq!(EpisodeRange::new(" 1", "2").bounds(), None);
        assert_eq!(EpisodeRange::new("1.5", "2").bounds(), None);
    }

    proptest! {
        #[test]
        fn prop_expands_to_exact_count(start in 1i64..500, len in 0i64..300) {
            let end = start + len;
            let (s, e) = (start.to_string(), end.to_string());
            let episodes = expand_episode_ranges(&[EpisodeRange::new(&s, &e)], "slug", BASE);

            prop_assert_eq!(episodes.len() as i64, end - start + 1);
            let nums = numbers(&episodes);
            prop_assert_eq!(nums.first().copied(), Some(start));
            prop_assert_eq!(nums.last().copied(), Some(end));
            prop_assert!(nums.windows(2).all(|w| w[1] == w[0] + 1));
        }

        #[test]
        fn prop_malformed_anchor_contributes_nothing(
            bad in "[a-z]{1,5}",
            start in 1i64..50,
            len in 0i64..50,
        ) {
            let end = (start + len).to_string();
            let start = start.to_string();
            let with_bad = [
                EpisodeRange::new(&start, &end),
                EpisodeRange::new(&bad, &end),
                EpisodeRange::new(&start, &bad),
            ];
            let alone = [EpisodeRange::new(&start, &end)];

            prop_assert_eq!(
                expand_episode_ranges(&with_bad, "slug", BASE),
                expand_episode_ranges(&alone, "slug", BASE)
            );
        }

        #[test]
        fn prop_numbers_always_positive(start in -20i64..20, end in -20i64..40) {
            let (s, e) = (start.to_string(), end.to_string());
            let episodes = expand_episode_ranges(&[EpisodeRange::new(&s, &e)], "slug", BASE);
            prop_assert!(numbers(&episodes).iter().all(|n| *n >= 1));
        }
    }
}
