use crate::error::ValidationResult;
use crate::model::{AddressBook, Record};

/// Sets the birthday of the named contact. `Ok(None)` means there is no
/// such contact.
pub fn add_birthday<'a>(
    book: &'a mut AddressBook,
    name: &str,
    value: &str,
) -> ValidationResult<Option<&'a Record>> {
    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(value)?;
            Ok(Some(&*record))
        }
        None => Ok(None),
    }
}
