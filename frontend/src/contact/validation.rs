use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::fields::{Field, FormFields};

// Deliberately lenient: something@something.something, no whitespace.
// U+FEFF counts as whitespace in browsers but not in `\s`.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Blank,
    MalformedEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .field.error_text())]
pub struct FieldValidationError {
    pub field: Field,
    pub rule: Rule,
}

impl FieldValidationError {
    fn new(field: Field, rule: Rule) -> Self {
        Self { field, rule }
    }
}

fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every field and returns all failures together, in form order.
pub fn validate(fields: &FormFields) -> Result<(), Vec<FieldValidationError>> {
    let mut errors = Vec::new();

    for field in Field::ALL {
        let value = fields.get(field);
        if is_blank(value) {
            errors.push(FieldValidationError::new(field, Rule::Blank));
        } else if field == Field::Email && !is_valid_email(value) {
            errors.push(FieldValidationError::new(field, Rule::MalformedEmail));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormFields {
        FormFields {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            phone: "47999999999".to_string(),
            message: "Oi".to_string(),
        }
    }

    #[test]
    fn complete_form_passes() {
        assert_eq!(validate(&filled()), Ok(()));
    }

    #[test]
    fn each_blank_field_yields_exactly_one_error() {
        for field in Field::ALL {
            for blank in ["", "   ", "\t\n"] {
                let mut fields = filled();
                fields.set(field, blank);
                let errors = validate(&fields).unwrap_err();
                assert_eq!(errors, vec![FieldValidationError::new(field, Rule::Blank)]);
            }
        }
    }

    #[test]
    fn all_errors_are_collected() {
        let errors = validate(&FormFields::default()).unwrap_err();
        let failed: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(failed, Field::ALL.to_vec());
    }

    #[test]
    fn email_pattern_is_minimal_structure_check() {
        assert!(!is_valid_email("not-an-email"));
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(is_valid_email("first.last@sub.example.com.br"));
    }

    #[test]
    fn byte_order_mark_counts_as_whitespace() {
        let mut fields = filled();
        fields.name = "\u{FEFF}".to_string();
        assert_eq!(
            validate(&fields).unwrap_err(),
            vec![FieldValidationError::new(Field::Name, Rule::Blank)]
        );
        assert!(!is_valid_email("a\u{FEFF}b@c.d"));
    }

    #[test]
    fn malformed_email_reports_once() {
        let mut fields = filled();
        fields.email = "a@b".to_string();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors, vec![FieldValidationError::new(Field::Email, Rule::MalformedEmail)]);
        assert_eq!(errors[0].to_string(), "Por favor, informe um email válido");
    }

    #[test]
    fn padded_email_is_rejected_like_the_live_form() {
        let mut fields = filled();
        fields.email = " ana@x.com ".to_string();
        assert!(validate(&fields).is_err());
    }
}
