#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("Wikipedia page not found for '{0}'")]
    NotFound(String),
    #[error("Error fetching Wikipedia page: {0}")]
    Fetch(String),
    #[error("Wikipedia page content not found")]
    ContentNotFound,
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },
}

pub type OutlineResult<T> = std::result::Result<T, OutlineError>;
