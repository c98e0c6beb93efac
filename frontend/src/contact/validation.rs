use once_cell::sync::Lazy;
use regex::Regex;

use super::field::{FieldKind, FieldName};

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const PHONE_MESSAGE: &str = "Please enter a valid Indian phone number.";
pub const NAME_MESSAGE: &str = "Name must be at least 2 characters long.";
pub const PROJECT_MESSAGE: &str = "Please provide more details about your project.";

const MIN_NAME_CHARS: usize = 2;
const MIN_PROJECT_CHARS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

// Optional +91 / 91 / 0 prefix, then a 10 digit mobile number starting 6-9.
// ASCII digits only; `\d` would also match other scripts' numerals.
static INDIAN_MOBILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\+91|91|0)?[6-9][0-9]{9}$").unwrap());

static PHONE_SEPARATORS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-()]").unwrap());

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<&'static str>,
}

impl ValidationResult {
    pub const VALID: ValidationResult = ValidationResult { valid: true, message: None };

    fn invalid(message: &'static str) -> Self {
        Self { valid: false, message: Some(message) }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

pub fn is_valid_indian_phone(value: &str) -> bool {
    let digits = PHONE_SEPARATORS_RE.replace_all(value.trim(), "");
    INDIAN_MOBILE_RE.is_match(&digits)
}

/// Runs the field rules in order. The first failing rule decides the message.
pub fn validate_value(name: FieldName, kind: FieldKind, required: bool, value: &str) -> ValidationResult {
    let value = value.trim();

    if value.is_empty() {
        return if required {
            ValidationResult::invalid(REQUIRED_MESSAGE)
        } else {
            ValidationResult::VALID
        };
    }

    if kind == FieldKind::Email && !is_valid_email(value) {
        return ValidationResult::invalid(EMAIL_MESSAGE);
    }

    if kind == FieldKind::Tel && !is_valid_indian_phone(value) {
        return ValidationResult::invalid(PHONE_MESSAGE);
    }

    let chars = value.chars().count();
    match name {
        FieldName::FirstName | FieldName::LastName if chars < MIN_NAME_CHARS => {
            ValidationResult::invalid(NAME_MESSAGE)
        }
        FieldName::Project if chars < MIN_PROJECT_CHARS => ValidationResult::invalid(PROJECT_MESSAGE),
        _ => ValidationResult::VALID,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(value: &str) -> ValidationResult {
        validate_value(FieldName::Email, FieldKind::Email, true, value)
    }

    fn phone(value: &str) -> ValidationResult {
        validate_value(FieldName::Phone, FieldKind::Tel, true, value)
    }

    #[test]
    fn test_required_rule_wins_over_everything() {
        for name in FieldName::ALL {
            let result = validate_value(name, FieldKind::Text, true, "   ");
            assert_eq!(result.message, Some(REQUIRED_MESSAGE));
        }
    }

    #[test]
    fn test_optional_empty_field_is_valid() {
        let result = validate_value(FieldName::Phone, FieldKind::Tel, false, "");
        assert_eq!(result, ValidationResult::VALID);
    }

    #[test]
    fn test_rejects_malformed_emails() {
        for value in ["bad-email", "a@b", "@x.com", "jo@.com", "jo @x.com", "jo@x.", "jo@@x.com"] {
            let result = email(value);
            assert!(!result.valid, "{value} should be rejected");
            assert_eq!(result.message, Some(EMAIL_MESSAGE));
        }
    }

    #[test]
    fn test_accepts_plain_emails() {
        for value in ["jo@x.com", "first.last+tag@studio.co.in", " jo@x.com "] {
            assert!(email(value).valid, "{value} should be accepted");
        }
    }

    #[test]
    fn test_every_mobile_leading_digit_is_accepted() {
        for lead in '6'..='9' {
            let number = format!("{lead}123456789");
            assert!(phone(&number).valid, "{number} should be accepted");
        }
    }

    #[test]
    fn test_phone_prefixes_and_separators() {
        for value in ["+91 98765 43210", "91-9876543210", "09876543210", "(987) 654-3210"] {
            assert!(phone(value).valid, "{value} should be accepted");
        }
    }

    #[test]
    fn test_rejects_landlines_and_short_numbers() {
        for value in ["5876543210", "987654321", "98765432100", "+1 9876543210", "98765abcde"] {
            let result = phone(value);
            assert!(!result.valid, "{value} should be rejected");
            assert_eq!(result.message, Some(PHONE_MESSAGE));
        }
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        for value in ["9१२३४५६७८९", "९८७६५४३२१०", "9٨٧٦٥٤٣٢١٠", "+91 ９８７６５４３２１０"] {
            let result = phone(value);
            assert!(!result.valid, "{value} should be rejected");
            assert_eq!(result.message, Some(PHONE_MESSAGE));
        }
    }

    #[test]
    fn test_name_length_counts_characters() {
        let short = validate_value(FieldName::FirstName, FieldKind::Text, true, "J");
        assert_eq!(short.message, Some(NAME_MESSAGE));

        assert!(validate_value(FieldName::LastName, FieldKind::Text, true, "Jo").valid);
        assert!(validate_value(FieldName::FirstName, FieldKind::Text, true, "Ñá").valid);
    }

    #[test]
    fn test_project_needs_ten_characters() {
        let short = validate_value(FieldName::Project, FieldKind::Textarea, true, "Kitchen");
        assert_eq!(short.message, Some(PROJECT_MESSAGE));

        let long = validate_value(FieldName::Project, FieldKind::Textarea, true, "Need a 3-bedroom renovation");
        assert!(long.valid);
    }

    #[test]
    fn test_type_rule_precedes_name_rule() {
        // An email-typed field named firstName fails on the email rule first.
        let result = validate_value(FieldName::FirstName, FieldKind::Email, true, "x");
        assert_eq!(result.message, Some(EMAIL_MESSAGE));
    }
}
