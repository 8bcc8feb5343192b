//! Field validation rules

use crate::state::{FieldKind, FieldSpec};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s+()-]+$").expect("phone pattern is valid"));

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationFailure {
    Required,
    TooShort,
    Format,
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub field_name: String,
    pub is_valid: bool,
    /// Empty when valid
    pub message: String,
    pub failure: Option<ValidationFailure>,
}

impl ValidationResult {
    fn valid(field_name: &str) -> Self {
        Self {
            field_name: field_name.to_string(),
            is_valid: true,
            message: String::new(),
            failure: None,
        }
    }

    fn invalid(field_name: &str, failure: ValidationFailure, message: String) -> Self {
        Self {
            field_name: field_name.to_string(),
            is_valid: false,
            message,
            failure: Some(failure),
        }
    }
}

/// Minimum length of a name, in characters
pub const MIN_NAME_LENGTH: usize = 2;

/// Loose `local@domain.tld` shape check
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Digits, whitespace, `-`, `+`, `(` and `)` only
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_PATTERN.is_match(value)
}

/// Validate a value against the rules of `kind`. The value is trimmed first.
pub fn validate(kind: FieldKind, value: &str, required: bool) -> ValidationResult {
    let defaults = match kind {
        FieldKind::Text => FieldSpec::name(),
        FieldKind::Email => FieldSpec::email(),
        FieldKind::Phone => FieldSpec::phone(),
        FieldKind::FreeText => FieldSpec::message(),
    };
    validate_field(
        &FieldSpec {
            required,
            ..defaults
        },
        value,
    )
}

/// Validate a value against a registered field
pub fn validate_field(field: &FieldSpec, value: &str) -> ValidationResult {
    let value = value.trim();
    let name = field.name.as_str();

    if value.is_empty() {
        return if field.required {
            ValidationResult::invalid(
                name,
                ValidationFailure::Required,
                format!("{} is required", field.label),
            )
        } else {
            ValidationResult::valid(name)
        };
    }

    match field.kind {
        FieldKind::Text if value.chars().count() < MIN_NAME_LENGTH => ValidationResult::invalid(
            name,
            ValidationFailure::TooShort,
            format!(
                "{} must be at least {MIN_NAME_LENGTH} characters",
                field.label
            ),
        ),
        FieldKind::Email if !is_valid_email(value) => ValidationResult::invalid(
            name,
            ValidationFailure::Format,
            "Please enter a valid email address".to_string(),
        ),
        FieldKind::Phone if !is_valid_phone(value) => ValidationResult::invalid(
            name,
            ValidationFailure::Format,
            "Please enter a valid phone number".to_string(),
        ),
        _ => ValidationResult::valid(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod name {
        use super::*;

        #[test]
        fn test_required_empty_fails() {
            let result = validate(FieldKind::Text, "", true);
            assert!(!result.is_valid);
            assert_eq!(result.failure, Some(ValidationFailure::Required));
            assert_eq!(result.message, "Name is required");
        }

        #[test]
        fn test_whitespace_only_counts_as_empty() {
            let result = validate(FieldKind::Text, "   \t", true);
            assert_eq!(result.failure, Some(ValidationFailure::Required));
        }

        #[test]
        fn test_single_character_is_too_short() {
            let result = validate(FieldKind::Text, " A ", true);
            assert_eq!(result.failure, Some(ValidationFailure::TooShort));
            assert_eq!(result.message, "Name must be at least 2 characters");
        }

        #[test]
        fn test_too_short_applies_when_optional() {
            let result = validate(FieldKind::Text, "A", false);
            assert_eq!(result.failure, Some(ValidationFailure::TooShort));
        }

        #[test]
        fn test_optional_empty_is_valid() {
            assert!(validate(FieldKind::Text, "", false).is_valid);
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            assert!(!validate(FieldKind::Text, "é", true).is_valid);
            assert!(validate(FieldKind::Text, "Zoë", true).is_valid);
        }

        #[test]
        fn test_any_trimmed_value_of_two_or_more_passes() {
            for value in ["Jo", "  Li  ", "Jane Doe", "O'Neil", "12", "a b c"] {
                let result = validate(FieldKind::Text, value, true);
                assert!(result.is_valid, "{value:?} should be valid");
                assert!(result.message.is_empty());
            }
        }
    }

    mod email {
        use super::*;

        #[test]
        fn test_required_empty_fails() {
            let result = validate(FieldKind::Email, "", true);
            assert_eq!(result.failure, Some(ValidationFailure::Required));
            assert_eq!(result.message, "Email is required");
        }

        #[test]
        fn test_valid_addresses() {
            for value in ["jane@example.com", "a@b.co", "first.last@sub.domain.com.au"] {
                assert!(is_valid_email(value), "{value:?} should be valid");
                assert!(validate(FieldKind::Email, value, true).is_valid);
            }
        }

        #[test]
        fn test_malformed_addresses_fail_with_format_message() {
            for value in [
                "bad",
                "jane@",
                "@example.com",
                "jane@example",
                "jane example@x.com",
                "jane@@example.com",
                "jane@example.",
            ] {
                let result = validate(FieldKind::Email, value, true);
                assert_eq!(
                    result.failure,
                    Some(ValidationFailure::Format),
                    "{value:?} should fail"
                );
                assert_eq!(result.message, "Please enter a valid email address");
            }
        }

        #[test]
        fn test_surrounding_whitespace_is_trimmed() {
            assert!(validate(FieldKind::Email, "  jane@example.com ", true).is_valid);
        }
    }

    mod phone {
        use super::*;

        #[test]
        fn test_empty_optional_is_valid() {
            assert!(validate(FieldKind::Phone, "", false).is_valid);
        }

        #[test]
        fn test_required_empty_fails() {
            let result = validate(FieldKind::Phone, "", true);
            assert_eq!(result.message, "Phone number is required");
        }

        #[test]
        fn test_allowed_characters_pass() {
            for value in ["0412 345 678", "+61 3 4162 7766", "(03) 4162-7766", "000"] {
                assert!(
                    validate(FieldKind::Phone, value, false).is_valid,
                    "{value:?} should be valid"
                );
            }
        }

        #[test]
        fn test_any_other_character_fails() {
            for value in ["0412 345 67x", "call me", "03.4162.7766", "#123", "12/34"] {
                let result = validate(FieldKind::Phone, value, false);
                assert_eq!(result.failure, Some(ValidationFailure::Format));
                assert_eq!(result.message, "Please enter a valid phone number");
            }
        }
    }

    mod free_text {
        use super::*;

        #[test]
        fn test_anything_goes_when_optional() {
            assert!(validate(FieldKind::FreeText, "", false).is_valid);
            assert!(validate(FieldKind::FreeText, "x", false).is_valid);
        }

        #[test]
        fn test_required_empty_fails() {
            let result = validate(FieldKind::FreeText, " ", true);
            assert_eq!(result.message, "Message is required");
        }
    }

    #[test]
    fn test_validate_field_uses_registered_name_and_label() {
        let field = FieldSpec::new("mobile", "Mobile", FieldKind::Phone, true);
        let result = validate_field(&field, "");
        assert_eq!(result.field_name, "mobile");
        assert_eq!(result.message, "Mobile is required");
    }
}
