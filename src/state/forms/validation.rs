//! Per-field validation rules for the order form
//!
//! Each rule is a pure function from a raw value to a typed result; the
//! error variant carries the message shown inline under the field. The
//! whole-form validity check composes the per-field rules.

use thiserror::Error;

/// A violated validation rule, displayed inline under the offending field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name must be at least 3 characters")]
    FullNameTooShort,
    #[error("Full name must be at most 20 characters")]
    FullNameTooLong,
    #[error("Size must be S, M, or L")]
    SizeIncorrect,
}

/// Per-field error state. `None` means the field currently passes its rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub full_name: Option<ValidationError>,
    pub size: Option<ValidationError>,
}

/// Validate the full name: trimmed length must be within [3, 20].
///
/// Trimming applies to validation only; the stored value keeps its
/// surrounding whitespace.
pub fn validate_full_name(raw: &str) -> Result<(), ValidationError> {
    let len = raw.trim().chars().count();
    if len < 3 {
        Err(ValidationError::FullNameTooShort)
    } else if len > 20 {
        Err(ValidationError::FullNameTooLong)
    } else {
        Ok(())
    }
}

/// Validate the size: must be exactly one of S, M, L.
pub fn validate_size(raw: &str) -> Result<(), ValidationError> {
    match raw {
        "S" | "M" | "L" => Ok(()),
        _ => Err(ValidationError::SizeIncorrect),
    }
}

/// Whole-form validity: toppings carry no rule, so only the two validated
/// fields matter.
pub fn form_is_valid(full_name: &str, size: &str) -> bool {
    validate_full_name(full_name).is_ok() && validate_size(size).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod full_name {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_too_short_rejected() {
            assert_eq!(
                validate_full_name("Jo"),
                Err(ValidationError::FullNameTooShort)
            );
        }

        #[test]
        fn test_empty_rejected() {
            assert_eq!(
                validate_full_name(""),
                Err(ValidationError::FullNameTooShort)
            );
        }

        #[test]
        fn test_whitespace_only_rejected() {
            assert_eq!(
                validate_full_name("     "),
                Err(ValidationError::FullNameTooShort)
            );
        }

        #[test]
        fn test_minimum_length_accepted() {
            assert!(validate_full_name("Jan").is_ok());
        }

        #[test]
        fn test_maximum_length_accepted() {
            assert!(validate_full_name("a".repeat(20).as_str()).is_ok());
        }

        #[test]
        fn test_too_long_rejected() {
            assert_eq!(
                validate_full_name("a".repeat(21).as_str()),
                Err(ValidationError::FullNameTooLong)
            );
        }

        #[test]
        fn test_trims_before_measuring() {
            // 2 visible chars padded to 6 with whitespace
            assert_eq!(
                validate_full_name("  Jo  "),
                Err(ValidationError::FullNameTooShort)
            );
            // 20 visible chars plus padding still passes
            let padded = format!("  {}  ", "a".repeat(20));
            assert!(validate_full_name(&padded).is_ok());
        }

        #[test]
        fn test_jane_doe_accepted() {
            assert!(validate_full_name("Jane Doe").is_ok());
        }

        #[test]
        fn test_messages_match_display() {
            assert_eq!(
                ValidationError::FullNameTooShort.to_string(),
                "Full name must be at least 3 characters"
            );
            assert_eq!(
                ValidationError::FullNameTooLong.to_string(),
                "Full name must be at most 20 characters"
            );
        }
    }

    mod size {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_sizes_accepted() {
            for s in ["S", "M", "L"] {
                assert!(validate_size(s).is_ok(), "size {s} should be valid");
            }
        }

        #[test]
        fn test_empty_rejected() {
            assert_eq!(validate_size(""), Err(ValidationError::SizeIncorrect));
        }

        #[test]
        fn test_lowercase_rejected() {
            assert_eq!(validate_size("m"), Err(ValidationError::SizeIncorrect));
        }

        #[test]
        fn test_unknown_value_rejected() {
            assert_eq!(validate_size("XL"), Err(ValidationError::SizeIncorrect));
        }

        #[test]
        fn test_message_matches_display() {
            assert_eq!(
                ValidationError::SizeIncorrect.to_string(),
                "Size must be S, M, or L"
            );
        }
    }

    mod whole_form {
        use super::*;

        #[test]
        fn test_valid_when_both_rules_pass() {
            assert!(form_is_valid("Jane Doe", "M"));
        }

        #[test]
        fn test_invalid_when_name_fails() {
            assert!(!form_is_valid("Jo", "M"));
        }

        #[test]
        fn test_invalid_when_size_fails() {
            assert!(!form_is_valid("Jane Doe", ""));
        }

        #[test]
        fn test_invalid_when_both_fail() {
            assert!(!form_is_valid("", ""));
        }
    }
}
