//! # Outline Core
//!
//! Core logic for turning an encyclopedia article into a markdown outline of its headings.
//!
//! The pipeline runs once per request and keeps nothing between calls:
//! - [`fetcher`] retrieves the article markup for a topic
//! - [`extractor`] pulls `h1`..`h6` headings out of the article body
//! - [`renderer`] writes the headings as a nested markdown outline
//!
//! **No API concerns**: HTTP routing, CORS and response shapes belong in `api-rest` and
//! `api-shared`.

pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod renderer;
pub mod service;

pub use config::CoreConfig;
pub use error::{OutlineError, OutlineResult};
pub use extractor::extract_headings;
pub use fetcher::{topic_url, PageFetcher};
pub use outline_types::{Heading, HeadingLevel, NonEmptyText};
pub use renderer::render_outline;
pub use service::{Outline, OutlineService};
