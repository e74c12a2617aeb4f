use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Birthday, Name, Phone};
use crate::error::{ValidationError, ValidationResult};
use crate::validation;

/// One contact: a name, its phones in the order they were added, and an
/// optional birthday that can be set once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> ValidationResult<Self> {
        Ok(Self::with_name(Name::new(name)?))
    }

    pub fn with_name(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validates and appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> ValidationResult<&Phone> {
        let phone = validation::validate_phone(number)?;
        Ok(self.push_phone(phone))
    }

    pub fn push_phone(&mut self, phone: Phone) -> &Phone {
        self.phones.push(phone);
        &self.phones[self.phones.len() - 1]
    }

    /// Drops every phone equal to `number` and returns how many went.
    pub fn remove_phone(&mut self, number: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != number);
        before - self.phones.len()
    }

    /// Replaces the first phone equal to `old` with `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<&Phone> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| ValidationError::OldPhoneNotFound {
                number: old.to_string(),
            })?;

        let replacement = Phone::new(new).map_err(|_| ValidationError::NewPhoneInvalid {
            number: new.to_string(),
        })?;

        self.phones[idx] = replacement;
        Ok(&self.phones[idx])
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Sets the birthday. A record carries at most one, so a second call
    /// fails even when the new value would not parse.
    pub fn add_birthday(&mut self, value: &str) -> ValidationResult<&Birthday> {
        if self.birthday.is_some() {
            return Err(ValidationError::BirthdayAlreadySet);
        }
        let birthday: &Birthday = self.birthday.insert(Birthday::parse(value)?);
        Ok(birthday)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
