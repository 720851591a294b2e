//! Field extractors
//!
//! Small synchronous queries over a document or element scope. They never
//! fail: anything missing comes back empty and the caller decides whether
//! that is fatal.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, SpectraError};

/// Something a selector can be run against: a whole document or one element.
pub trait Scope<'a> {
    /// All matches of `selector` inside this scope, in document order.
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>>;
}

impl<'a> Scope<'a> for &'a Html {
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        (*self).select(selector).collect()
    }
}

impl<'a> Scope<'a> for ElementRef<'a> {
    fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'a>> {
        self.select(selector).collect()
    }
}

/// Compile a locator into a selector.
///
/// # Errors
/// `SpectraError::Parse` if the locator is not valid CSS.
pub fn compile(locator: &str) -> Result<Selector> {
    Selector::parse(locator)
        .map_err(|e| SpectraError::Parse(format!("Invalid selector '{}': {:?}", locator, e)))
}

/// All elements matching `locator` inside `scope`.
pub fn find<'a>(scope: impl Scope<'a>, locator: &Selector) -> Vec<ElementRef<'a>> {
    scope.select_all(locator)
}

/// First element matching `locator` inside `scope`.
pub fn first<'a>(scope: impl Scope<'a>, locator: &Selector) -> Option<ElementRef<'a>> {
    scope.select_all(locator).into_iter().next()
}

/// Trimmed text of the first match, or an empty string.
pub fn text<'a>(scope: impl Scope<'a>, locator: &Selector) -> String {
    first(scope, locator)
        .map(|el| element_text(&el))
        .unwrap_or_default()
}

/// Attribute of the first match, or an empty string.
pub fn attr<'a>(scope: impl Scope<'a>, locator: &Selector, name: &str) -> String {
    first(scope, locator)
        .and_then(|el| el.value().attr(name))
        .map(str::to_string)
        .unwrap_or_default()
}

/// Trimmed text content of a single element.
pub fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// First row matching `rows` whose text contains `label`.
pub fn labeled_row<'a>(
    scope: impl Scope<'a>,
    rows: &Selector,
    label: &str,
) -> Option<ElementRef<'a>> {
    find(scope, rows)
        .into_iter()
        .find(|row| row.text().collect::<String>().contains(label))
}

/// Text of the row carrying `label`, with the label removed.
///
/// `<p class="type"><span>Status: </span>Ongoing</p>` with label `"Status:"`
/// yields `"Ongoing"`. Returns an empty string when no row has the label.
pub fn labeled_text<'a>(scope: impl Scope<'a>, rows: &Selector, label: &str) -> String {
    labeled_row(scope, rows, label)
        .map(|row| {
            row.text()
                .collect::<String>()
                .replacen(label, "", 1)
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}
