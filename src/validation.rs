use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::model::Phone;

/// Textual birthday format, both for parsing and rendering.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

const PHONE_DIGITS: usize = 10;

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ValidationResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ValidationError::BlankName {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// True when `value` is exactly ten ASCII digits.
pub fn is_phone_number(value: &str) -> bool {
    value.len() == PHONE_DIGITS && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a phone number and wraps it.
pub fn validate_phone(value: &str) -> ValidationResult<Phone> {
    Phone::new(value)
}

/// Parses a `DD.MM.YYYY` birthday.
///
/// The shape is checked before chrono sees the input: chrono's numeric
/// fields accept unpadded or signed values (`1.1.2024`, `+2024`), which
/// would not render back to the same text.
pub fn parse_birthday(value: &str) -> ValidationResult<NaiveDate> {
    let invalid = || ValidationError::InvalidBirthday {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    if bytes.len() != 10 {
        return Err(invalid());
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'.',
        _ => b.is_ascii_digit(),
    });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT).map_err(|_| invalid())
}
