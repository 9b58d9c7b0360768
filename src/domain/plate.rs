//! License plate input model.
//!
//! Brazilian plates are always seven characters, in either the legacy layout
//! (`ABC1234`) or the Mercosul layout (`ABC1D23`). The input is normalized on
//! every keystroke; only the length decides whether a search may be submitted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Required length of a normalized plate.
pub const PLATE_LENGTH: usize = 7;

/// Layout of a complete plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateFormat {
    /// Three letters followed by four digits (`ABC1234`).
    Legacy,
    /// Three letters, a digit, a letter, two digits (`ABC1D23`).
    Mercosul,
}

impl fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => f.write_str("legacy"),
            Self::Mercosul => f.write_str("Mercosul"),
        }
    }
}

/// Normalized plate input.
///
/// Always trimmed, upper-cased and at most [`PLATE_LENGTH`] characters long.
/// Longer input is truncated rather than rejected. Deserialized plates are
/// normalized the same way.
///
/// # Examples
///
/// ```
/// use ancora::domain::Plate;
///
/// let plate = Plate::normalize("  abc1d234 ");
/// assert_eq!(plate.as_str(), "ABC1D23");
/// assert!(plate.is_complete());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct Plate(String);

impl Plate {
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        Self(
            raw.trim()
                .chars()
                .flat_map(char::to_uppercase)
                .take(PLATE_LENGTH)
                .collect(),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters (not bytes) in the normalized input.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when the plate has exactly [`PLATE_LENGTH`] characters.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == PLATE_LENGTH
    }

    /// Detects the plate layout of a complete plate.
    ///
    /// Returns `None` for incomplete input or for seven characters matching
    /// neither layout. This is informational and never affects validation.
    #[must_use]
    pub fn format(&self) -> Option<PlateFormat> {
        if !self.is_complete() {
            return None;
        }

        let chars: Vec<char> = self.0.chars().collect();
        let letters = chars[..3].iter().all(char::is_ascii_uppercase);
        let digit_at = |i: usize| chars[i].is_ascii_digit();

        if !letters || !digit_at(3) || !digit_at(5) || !digit_at(6) {
            return None;
        }

        if digit_at(4) {
            Some(PlateFormat::Legacy)
        } else if chars[4].is_ascii_uppercase() {
            Some(PlateFormat::Mercosul)
        } else {
            None
        }
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Plate {
    fn from(raw: String) -> Self {
        Self::normalize(&raw)
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_uppercases() {
        assert_eq!(Plate::normalize("  abc1234  ").as_str(), "ABC1234");
    }

    #[test]
    fn normalize_truncates_long_input() {
        let plate = Plate::normalize("abc1234567");
        assert_eq!(plate.as_str(), "ABC1234");
        assert!(plate.is_complete());
    }

    #[test]
    fn short_input_is_incomplete() {
        for raw in ["", "a", "abc12", "abc123"] {
            assert!(!Plate::normalize(raw).is_complete(), "{raw}");
        }
    }

    #[test]
    fn format_detects_both_layouts() {
        assert_eq!(Plate::normalize("abc1234").format(), Some(PlateFormat::Legacy));
        assert_eq!(Plate::normalize("abc1d23").format(), Some(PlateFormat::Mercosul));
        assert_eq!(Plate::normalize("1234567").format(), None);
        assert_eq!(Plate::normalize("abc12").format(), None);
    }

    #[test]
    fn length_counts_characters() {
        let plate = Plate::normalize("çãoábcd");
        assert_eq!(plate.len(), 7);
        assert!(plate.is_complete());
    }

    #[test]
    fn deserialized_plates_are_normalized() {
        let plate: Plate = serde_json::from_str(r#"" abc1d234 ""#).unwrap();
        assert_eq!(plate.as_str(), "ABC1D23");
        assert_eq!(serde_json::to_string(&plate).unwrap(), r#""ABC1D23""#);
    }
}
