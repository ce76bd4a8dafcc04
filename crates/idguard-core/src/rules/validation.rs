use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const NUMERIC_ID_PATTERN: &str = "^[0-9]+$";
pub const USERNAME_PATTERN: &str = "^[A-Za-z0-9.]+$";

static NUMERIC_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(NUMERIC_ID_PATTERN)
        .unwrap_or_else(|e| unreachable!("invalid numeric id regex: {e}"))
});

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(USERNAME_PATTERN)
        .unwrap_or_else(|e| unreachable!("invalid username regex: {e}"))
});

/// The two identifier forms accepted in the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentifierShape {
    NumericId,
    Username,
}

impl IdentifierShape {
    pub const ALL: [IdentifierShape; 2] = [IdentifierShape::NumericId, IdentifierShape::Username];

    /// Tests the whole of `normalized` against this shape. No trimming.
    pub fn matches(self, normalized: &str) -> bool {
        match self {
            IdentifierShape::NumericId => NUMERIC_ID_RE.is_match(normalized),
            IdentifierShape::Username => USERNAME_RE.is_match(normalized),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierShape::NumericId => "numeric-id",
            IdentifierShape::Username => "username",
        }
    }
}

impl fmt::Display for IdentifierShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the shape an already-normalized value has, if any.
///
/// Every numeric id is also a valid username; the narrower shape wins.
pub fn classify(normalized: &str) -> Option<IdentifierShape> {
    IdentifierShape::ALL
        .into_iter()
        .find(|shape| shape.matches(normalized))
}

#[cfg(test)]
mod tests {
    use super::{classify, IdentifierShape};

    #[test]
    fn classify_prefers_numeric_id() {
        assert_eq!(classify("00042"), Some(IdentifierShape::NumericId));
        assert!(IdentifierShape::Username.matches("00042"));
    }

    #[test]
    fn classify_username_with_dots() {
        assert_eq!(classify("john.doe123"), Some(IdentifierShape::Username));
        assert_eq!(classify("..."), Some(IdentifierShape::Username));
    }

    #[test]
    fn classify_empty_is_none() {
        assert_eq!(classify(""), None);
    }

    #[test]
    fn shapes_are_anchored() {
        assert!(!IdentifierShape::NumericId.matches("123a"));
        assert!(!IdentifierShape::Username.matches("john doe"));
        assert!(!IdentifierShape::Username.matches("john\n"));
    }

    #[test]
    fn username_shape_is_ascii_only() {
        assert_eq!(classify("jöhn"), None);
        assert_eq!(classify("١٢٣"), None);
    }

    #[test]
    fn classify_rejects_disallowed_characters() {
        for value in ["user@name", "john doe", "user_name", "#hash", "a-b", "-abc", " 42"] {
            assert_eq!(classify(value), None, "{value:?}");
        }
    }
}
