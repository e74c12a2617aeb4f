use tracing::debug;

use crate::error::ValidationResult;
use crate::model::{AddressBook, Name, Record};
use crate::validation;

/// Whether `add_contact` created a record or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Updated,
}

/// Adds a phone to the named contact, creating the contact if needed.
///
/// The phone is validated first; an invalid number never creates a record.
pub fn add_contact(book: &mut AddressBook, name: &str, phone: &str) -> ValidationResult<AddOutcome> {
    let name = Name::new(name)?;
    let phone = validation::validate_phone(phone)?;

    if let Some(record) = book.find_mut(name.as_str()) {
        record.push_phone(phone);
        return Ok(AddOutcome::Updated);
    }

    let mut record = Record::with_name(name);
    record.push_phone(phone);
    book.add_record(record);
    Ok(AddOutcome::Added)
}

/// Replaces `old` with `new` on the named contact. `Ok(None)` means there
/// is no such contact.
pub fn change_phone<'a>(
    book: &'a mut AddressBook,
    name: &str,
    old: &str,
    new: &str,
) -> ValidationResult<Option<&'a Record>> {
    let record = match book.find_mut(name) {
        Some(r) => r,
        None => return Ok(None),
    };
    record.edit_phone(old, new)?;
    debug!(name, "phone changed");
    Ok(Some(&*record))
}

/// Removes every copy of `number` from the named contact and returns how
/// many were removed, or `None` if the contact does not exist.
pub fn remove_phone(book: &mut AddressBook, name: &str, number: &str) -> Option<usize> {
    book.find_mut(name).map(|r| r.remove_phone(number))
}

pub fn delete_contact(book: &mut AddressBook, name: &str) -> Option<Record> {
    book.delete(name)
}
