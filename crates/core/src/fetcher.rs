//! Page retrieval from the remote encyclopedia.
//!
//! One GET per call, bounded by the configured timeout and never retried. The HTTP client is
//! built for the call and dropped when the call returns, whichever way it returns.

use crate::config::CoreConfig;
use crate::{OutlineError, OutlineResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::sync::Arc;

/// Characters escaped in a topic before it is appended to the base URL.
///
/// Non-ASCII bytes are always escaped by `utf8_percent_encode`.
const TOPIC_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Builds the retrieval address for `topic`: spaces become underscores, then the remainder is
/// percent-encoded and appended to `base_url`.
pub fn topic_url(base_url: &str, topic: &str) -> String {
    let title = topic.replace(' ', "_");
    format!("{}{}", base_url, utf8_percent_encode(&title, TOPIC_ENCODE_SET))
}

#[derive(Clone, Debug)]
pub struct PageFetcher {
    cfg: Arc<CoreConfig>,
}

impl PageFetcher {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Fetches the raw markup for `topic`.
    ///
    /// # Errors
    /// - `OutlineError::NotFound` if the source answers with anything other than `200 OK`.
    ///   Redirects are not followed, so a `3xx` answer is also `NotFound`.
    /// - `OutlineError::Fetch` on transport failures (timeout, DNS, refused connection) or if
    ///   the body cannot be read.
    pub async fn fetch(&self, topic: &str) -> OutlineResult<String> {
        let url = topic_url(self.cfg.wiki_base_url(), topic);
        tracing::debug!(%url, "fetching page");

        let client = reqwest::Client::builder()
            .timeout(self.cfg.fetch_timeout())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| OutlineError::Fetch(e.to_string()))?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| OutlineError::Fetch(e.to_string()))?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::debug!(%url, status = %response.status(), "page not found");
            return Err(OutlineError::NotFound(topic.to_owned()));
        }

        response
            .text()
            .await
            .map_err(|e| OutlineError::Fetch(e.to_string()))
    }
}
