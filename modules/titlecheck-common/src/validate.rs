use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::TitleCheckError;

/// Shortest title accepted, in characters, after trimming.
pub const MIN_TITLE_LEN: usize = 3;

/// Inline message shown when a submission fails validation.
pub const INVALID_TITLE_MESSAGE: &str =
    "Please enter a valid title (no special characters except spaces/hyphens).";

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9 \-]+$").unwrap());

/// Check a raw title. Leading and trailing whitespace is ignored.
pub fn validate(raw: &str) -> bool {
    let title = raw.trim();
    title.chars().count() >= MIN_TITLE_LEN && TITLE_RE.is_match(title)
}

/// A title that passed validation. The only way into the verdict generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSubmission(String);

impl TitleSubmission {
    pub fn parse(raw: &str) -> Result<Self, TitleCheckError> {
        if !validate(raw) {
            return Err(TitleCheckError::InvalidInput(INVALID_TITLE_MESSAGE.to_string()));
        }
        Ok(Self(raw.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for TitleSubmission {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TitleSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_letters_digits_spaces_hyphens() {
        assert!(validate("City Post"));
        assert!(validate("The Morning-Star 24"));
        assert!(validate("abc"));
    }

    #[test]
    fn rejects_short_or_empty() {
        assert!(!validate(""));
        assert!(!validate("ab"));
        assert!(!validate("   "));
        assert!(!validate("  ab  "));
    }

    #[test]
    fn rejects_special_characters() {
        for raw in ["News!", "Times & Co", "Daily_Post", "Café Life", "Tab\tbed", "a.b.c"] {
            assert!(!validate(raw), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert!(validate("  City Post  "));
    }

    #[test]
    fn parse_trims() {
        let title = TitleSubmission::parse("  City Post ").unwrap();
        assert_eq!(title.as_str(), "City Post");
        assert_eq!(title.len(), 9);
    }

    #[test]
    fn parse_rejects_with_user_message() {
        match TitleSubmission::parse("x!") {
            Err(TitleCheckError::InvalidInput(msg)) => assert_eq!(msg, INVALID_TITLE_MESSAGE),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }
}
