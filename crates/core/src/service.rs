//! The fetch → extract → render pipeline.

use crate::config::CoreConfig;
use crate::extractor::extract_headings;
use crate::fetcher::PageFetcher;
use crate::renderer::render_outline;
use crate::{OutlineError, OutlineResult};
use outline_types::NonEmptyText;
use std::sync::Arc;

/// A rendered outline for one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline {
    /// The topic exactly as requested.
    pub topic: String,
    pub markdown: String,
}

/// Produces markdown outlines for topics. Holds no per-request state.
#[derive(Clone, Debug)]
pub struct OutlineService {
    fetcher: PageFetcher,
}

impl OutlineService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            fetcher: PageFetcher::new(cfg),
        }
    }

    /// Fetches the page for `topic`, extracts its headings and renders the outline.
    ///
    /// `topic` is only checked for non-emptiness; it is otherwise used and echoed as given.
    ///
    /// # Errors
    /// - `OutlineError::InvalidInput` if `topic` is empty or whitespace.
    /// - `OutlineError::NotFound` / `OutlineError::Fetch` from the fetch step.
    /// - `OutlineError::ContentNotFound` if the page has no article body.
    pub async fn outline(&self, topic: &str) -> OutlineResult<Outline> {
        NonEmptyText::new(topic)
            .map_err(|_| OutlineError::InvalidInput("country must not be empty".into()))?;

        let html = self.fetcher.fetch(topic).await?;
        let headings = extract_headings(&html)?;
        let markdown = render_outline(topic, &headings);

        Ok(Outline {
            topic: topic.to_owned(),
            markdown,
        })
    }
}
