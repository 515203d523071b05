//! Roll number value object.

use crate::domain::foundation::ValidationError;
use serde::Serialize;
use std::fmt;

/// Maximum length for a roll number.
pub const MAX_ROLL_NO_LENGTH: usize = 20;

/// A student's roll number, validated at construction.
///
/// Trimmed, 1-20 characters, letters, digits, and hyphens only. Identity
/// is case-insensitive: `A-101` and `a-101` name the same student, though
/// the original casing is preserved for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RollNumber(String);

impl RollNumber {
    /// Creates a roll number from raw input, trimming it first.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if empty after trimming
    /// - `TooLong` if longer than 20 characters
    /// - `InvalidFormat` if it contains anything but letters, digits, hyphens
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("roll_no"));
        }
        let len = trimmed.chars().count();
        if len > MAX_ROLL_NO_LENGTH {
            return Err(ValidationError::too_long("roll_no", MAX_ROLL_NO_LENGTH, len));
        }
        if !trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(ValidationError::invalid_format(
                "roll_no",
                "only letters, numbers, and hyphens are allowed",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the roll number as entered (post-trim).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive identity comparison.
    pub fn matches(&self, other: &RollNumber) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_alphanumeric_with_hyphens() {
        let roll = RollNumber::new("A-101").unwrap();
        assert_eq!(roll.as_str(), "A-101");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let roll = RollNumber::new("  A-101  ").unwrap();
        assert_eq!(roll.as_str(), "A-101");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(RollNumber::new("").is_err());
        assert!(RollNumber::new("   ").is_err());
    }

    #[test]
    fn rejects_too_long_input() {
        let long = "a".repeat(MAX_ROLL_NO_LENGTH + 1);
        assert!(RollNumber::new(long).is_err());
    }

    #[test]
    fn accepts_input_at_max_length() {
        let max = "a".repeat(MAX_ROLL_NO_LENGTH);
        assert!(RollNumber::new(max).is_ok());
    }

    #[test]
    fn rejects_embedded_space() {
        assert!(RollNumber::new("A 101").is_err());
    }

    #[test]
    fn rejects_special_characters() {
        assert!(RollNumber::new("A@101").is_err());
        assert!(RollNumber::new("A_101").is_err());
        assert!(RollNumber::new("A.101").is_err());
    }

    #[test]
    fn matches_is_case_insensitive() {
        let upper = RollNumber::new("A-101").unwrap();
        let lower = RollNumber::new("a-101").unwrap();
        assert!(upper.matches(&lower));
        assert!(lower.matches(&upper));
    }

    #[test]
    fn matches_distinguishes_different_numbers() {
        let a = RollNumber::new("A-101").unwrap();
        let b = RollNumber::new("A-102").unwrap();
        assert!(!a.matches(&b));
    }

    #[test]
    fn preserves_original_casing() {
        let roll = RollNumber::new("aB-9").unwrap();
        assert_eq!(roll.as_str(), "aB-9");
    }

    #[test]
    fn serializes_as_plain_string() {
        let roll = RollNumber::new("A-101").unwrap();
        assert_eq!(serde_json::to_string(&roll).unwrap(), "\"A-101\"");
    }

    proptest! {
        #[test]
        fn accepts_any_valid_pattern(s in "[A-Za-z0-9-]{1,20}") {
            prop_assert!(RollNumber::new(s).is_ok());
        }

        #[test]
        fn rejects_anything_with_an_invalid_interior_character(
            prefix in "[A-Za-z0-9-]{1,8}",
            bad in "[ @_.!#$%^&*()+=]",
            suffix in "[A-Za-z0-9-]{1,8}",
        ) {
            let candidate = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(RollNumber::new(candidate).is_err());
        }
    }
}
