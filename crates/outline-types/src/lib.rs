//! Validated value types shared across the outline crates.
//!
//! Headings are only ever built from a [`HeadingLevel`] and a [`NonEmptyText`], so a heading
//! with level 0, level 7, or blank text cannot be represented.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// Errors that can occur when creating a heading level.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("heading level must be between 1 and 6, got {0}")]
    OutOfRange(u8),
    #[error("not a heading tag: {0}")]
    NotHeadingTag(String),
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// HTML heading level, `1` (most prominent) through `6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Result<Self, LevelError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(LevelError::OutOfRange(level))
        }
    }

    /// Derives the level from a tag name such as `h2` or `H4`.
    pub fn from_tag_name(tag: &str) -> Result<Self, LevelError> {
        let mut chars = tag.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('h' | 'H'), Some(digit), None) => digit
                .to_digit(10)
                .ok_or_else(|| LevelError::NotHeadingTag(tag.to_owned()))
                .and_then(|d| Self::new(d as u8)),
            _ => Err(LevelError::NotHeadingTag(tag.to_owned())),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The markdown marker for this level, e.g. `###` for level 3.
    pub fn marker(self) -> String {
        "#".repeat(usize::from(self.0))
    }
}

impl std::fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "h{}", self.0)
    }
}

/// A section heading taken from a document, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: NonEmptyText,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: NonEmptyText) -> Self {
        Self { level, text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  History \n").unwrap();
        assert_eq!(text.as_str(), "History");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert!(matches!(NonEmptyText::new(" \t\n"), Err(TextError::Empty)));
        assert!(matches!(NonEmptyText::new(""), Err(TextError::Empty)));
    }

    #[test]
    fn non_empty_text_deserialize_rejects_blank() {
        let err = serde_json::from_str::<NonEmptyText>("\"   \"");
        assert!(err.is_err());
        let ok: NonEmptyText = serde_json::from_str("\" France \"").unwrap();
        assert_eq!(ok.as_str(), "France");
    }

    #[test]
    fn heading_level_bounds() {
        assert!(HeadingLevel::new(0).is_err());
        assert!(HeadingLevel::new(7).is_err());
        for level in 1..=6 {
            assert_eq!(HeadingLevel::new(level).unwrap().get(), level);
        }
    }

    #[test]
    fn heading_level_from_tag_name() {
        assert_eq!(HeadingLevel::from_tag_name("h1").unwrap().get(), 1);
        assert_eq!(HeadingLevel::from_tag_name("H6").unwrap().get(), 6);
        assert!(matches!(
            HeadingLevel::from_tag_name("h7"),
            Err(LevelError::OutOfRange(7))
        ));
        assert!(matches!(
            HeadingLevel::from_tag_name("hr"),
            Err(LevelError::NotHeadingTag(_))
        ));
        assert!(HeadingLevel::from_tag_name("h10").is_err());
        assert!(HeadingLevel::from_tag_name("div").is_err());
    }

    #[test]
    fn heading_level_marker() {
        assert_eq!(HeadingLevel::new(1).unwrap().marker(), "#");
        assert_eq!(HeadingLevel::new(4).unwrap().marker(), "####");
    }
}
