use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ValidationError, ValidationResult};
use crate::validation;

/// A ten-digit phone number. Construction is the only way in, so every
/// `Phone` in the book has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> ValidationResult<Self> {
        if validation::is_phone_number(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::InvalidPhone {
                value: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Phone {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Phone {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_digit_string() {
        let phone = Phone::new("5551234567").unwrap();
        assert_eq!(phone.to_string(), "5551234567");
    }

    #[test]
    fn compares_with_str() {
        let phone = Phone::new("5551234567").unwrap();
        assert_eq!(phone, "5551234567");
    }

    #[test]
    fn serializes_as_string() {
        let phone = Phone::new("5551234567").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"5551234567\"");
    }

    #[test]
    fn deserialization_validates() {
        let result: Result<Phone, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
