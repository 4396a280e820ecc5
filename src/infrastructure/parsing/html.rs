//! Failure-explicit accessors over parsed HTML documents.
//!
//! Pure reads over an immutable document; the `raw_selector` parameter is the
//! selector's source text, carried along for diagnostics.

use scraper::{ElementRef, Html, Selector};

use super::error::MarkupError;

/// Compiles a CSS selector string.
pub fn compile(raw_selector: &str) -> Result<Selector, MarkupError> {
    Selector::parse(raw_selector).map_err(|_| MarkupError::invalid_selector(raw_selector))
}

/// All elements matching the selector; a document without any match is a
/// structural failure.
pub fn select_all<'a>(
    document: &'a Html,
    selector: &Selector,
    raw_selector: &str,
) -> Result<Vec<ElementRef<'a>>, MarkupError> {
    let elements: Vec<ElementRef<'a>> = document.select(selector).collect();
    if elements.is_empty() {
        return Err(MarkupError::selector_not_found(raw_selector));
    }
    Ok(elements)
}

/// First element matching the selector.
pub fn select_first<'a>(
    document: &'a Html,
    selector: &Selector,
    raw_selector: &str,
) -> Result<ElementRef<'a>, MarkupError> {
    document
        .select(selector)
        .next()
        .ok_or_else(|| MarkupError::selector_not_found(raw_selector))
}

/// An attribute's value on the element.
pub fn attr(
    element: ElementRef<'_>,
    attribute: &str,
    raw_selector: &str,
) -> Result<String, MarkupError> {
    element
        .value()
        .attr(attribute)
        .map(str::to_string)
        .ok_or_else(|| MarkupError::attribute_missing(raw_selector, attribute))
}

/// The element's child element at `index`, counting element nodes only.
pub fn child_at(element: ElementRef<'_>, index: usize) -> Result<ElementRef<'_>, MarkupError> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .nth(index)
        .ok_or_else(|| MarkupError::child_missing(index))
}

/// The element's trimmed text content; an empty result is a failure.
pub fn text(element: ElementRef<'_>) -> Result<String, MarkupError> {
    let text = element.text().collect::<String>().trim().to_string();
    if text.is_empty() {
        return Err(MarkupError::TextMissing);
    }
    Ok(text)
}
