//! URL construction for every page the scraper visits.

/// Derive the catalog slug from a title: lowercase, spaces become dashes.
///
/// # Examples
/// ```
/// use spectra_core::url::slugify;
///
/// assert_eq!(slugify("Naruto Shippuden"), "naruto-shippuden");
/// ```
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Detail page of a catalog entry.
pub fn build_category_url(base_url: &str, slug: &str) -> String {
    format!("{}/category/{}", base_url, slug)
}

/// Playback page of one episode.
pub fn build_episode_url(base_url: &str, slug: &str, number: i64) -> String {
    format!("{}/{}-episode-{}", base_url, slug, number)
}

/// Movie catalog page.
pub fn build_movies_url(base_url: &str, page: u32) -> String {
    with_page(format!("{}/anime-movies.html", base_url), page, '?')
}

/// Popular list page.
pub fn build_popular_url(base_url: &str, page: u32) -> String {
    with_page(format!("{}/popular.html", base_url), page, '?')
}

/// Filter page for a keyword and a set of genres.
///
/// The keyword is always present (empty means "browse all"). Each genre
/// becomes one `genre[]` parameter, in the order given. Page 1 adds no
/// `page` parameter.
///
/// # Examples
/// ```
/// use spectra_core::url::build_search_url;
///
/// let url = build_search_url("https://anitaku.pe", "naruto", &["Action", "Comedy"], 1);
/// assert_eq!(
///     url,
///     "https://anitaku.pe/filter.html?keyword=naruto&genre%5B%5D=Action&genre%5B%5D=Comedy"
/// );
/// ```
pub fn build_search_url<S: AsRef<str>>(
    base_url: &str,
    keyword: &str,
    genres: &[S],
    page: u32,
) -> String {
    let mut url = format!(
        "{}/filter.html?keyword={}",
        base_url,
        urlencoding::encode(keyword)
    );

    for genre in genres {
        url.push_str("&genre%5B%5D=");
        url.push_str(&urlencoding::encode(genre.as_ref()));
    }

    with_page(url, page, '&')
}

fn with_page(url: String, page: u32, separator: char) -> String {
    if page > 1 {
        format!("{}{}page={}", url, separator, page)
    } else {
        url
    }
}
