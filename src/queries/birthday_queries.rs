use chrono::{Days, NaiveDate};

use crate::model::{AddressBook, Birthday, Name};

/// Horizon used by the `birthdays` command unless configured otherwise.
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// A contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: Name,
    pub birthday: Birthday,
}

/// Contacts whose stored birthday lies in `today..=today + horizon_days`.
///
/// The comparison is on the stored calendar date, year included. Results
/// follow the book's name order. When the end of the window falls past the
/// last representable date the window has no upper bound.
pub fn birthdays_in_window(
    book: &AddressBook,
    today: NaiveDate,
    horizon_days: u32,
) -> Vec<UpcomingBirthday> {
    let end = today
        .checked_add_days(Days::new(u64::from(horizon_days)))
        .unwrap_or(NaiveDate::MAX);

    book.records()
        .filter_map(|r| r.birthday().map(|b| (r, *b)))
        .filter(|(_, b)| (today..=end).contains(&b.date()))
        .map(|(r, birthday)| UpcomingBirthday {
            name: r.name().clone(),
            birthday,
        })
        .collect()
}
