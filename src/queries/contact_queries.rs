use crate::model::{AddressBook, Birthday, Phone};

pub fn phones_of<'a>(book: &'a AddressBook, name: &str) -> Option<&'a [Phone]> {
    book.find(name).map(|r| r.phones())
}

/// `None` when the contact is missing, `Some(None)` when it has no birthday.
pub fn birthday_of<'a>(book: &'a AddressBook, name: &str) -> Option<Option<&'a Birthday>> {
    book.find(name).map(|r| r.birthday())
}
