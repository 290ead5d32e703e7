//! Heading extraction from article markup.

use crate::constants::{CONTENT_CONTAINER_SELECTOR, HEADING_SELECTOR};
use crate::{OutlineError, OutlineResult};
use outline_types::{Heading, HeadingLevel, NonEmptyText};
use scraper::{ElementRef, Html, Selector};

fn selector(css: &str) -> OutlineResult<Selector> {
    Selector::parse(css).map_err(|e| OutlineError::InvalidSelector {
        selector: css.to_owned(),
        reason: format!("{e:?}"),
    })
}

/// Visible text of an element: each descendant text node trimmed, blank nodes dropped, the rest
/// joined with single spaces.
fn heading_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extracts `h1`..`h6` headings from the article body container, in document order.
///
/// Headings outside the container are ignored, as are headings with no visible text. An article
/// without headings yields an empty list.
///
/// # Errors
/// Returns `OutlineError::ContentNotFound` if the markup has no article body container.
pub fn extract_headings(html: &str) -> OutlineResult<Vec<Heading>> {
    let document = Html::parse_document(html);
    let container_selector = selector(CONTENT_CONTAINER_SELECTOR)?;
    let heading_selector = selector(HEADING_SELECTOR)?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or(OutlineError::ContentNotFound)?;

    let mut headings = Vec::new();
    for element in container.select(&heading_selector) {
        let Ok(level) = HeadingLevel::from_tag_name(element.value().name()) else {
            continue;
        };
        // Headings holding only edit links or empty spans have no visible text.
        let Ok(text) = NonEmptyText::new(heading_text(&element)) else {
            continue;
        };
        headings.push(Heading::new(level, text));
    }

    tracing::debug!(count = headings.len(), "extracted headings");
    Ok(headings)
}
