//! Constants used throughout the outline core crate.

/// Base address that topic names are appended to when fetching a page.
pub const DEFAULT_WIKI_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Timeout applied to the single outbound page request.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Selector for the container holding the article body.
pub const CONTENT_CONTAINER_SELECTOR: &str = "div#mw-content-text";

/// Selector for every heading level.
pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// First line of every rendered outline.
pub const CONTENTS_HEADER: &str = "## Contents";
