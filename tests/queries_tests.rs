use chrono::NaiveDate;
use contacts::model::*;
use contacts::queries::birthday_queries::{birthdays_in_window, DEFAULT_HORIZON_DAYS};
use contacts::queries::contact_queries;

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut r = Record::new(name).unwrap();
    r.add_birthday(birthday).unwrap();
    r
}

fn names(book: &AddressBook, today: NaiveDate, horizon: u32) -> Vec<String> {
    birthdays_in_window(book, today, horizon)
        .into_iter()
        .map(|u| u.name.to_string())
        .collect()
}

// ==========================================================================
// BIRTHDAY WINDOW TESTS
// ==========================================================================

#[test]
fn window_includes_within_and_excludes_beyond() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Alice", "05.01.2024"));
    book.add_record(record_with_birthday("Bob", "10.01.2024"));

    assert_eq!(names(&book, date(1, 1, 2024), 7), vec!["Alice"]);
}

#[test]
fn window_is_inclusive_at_both_ends() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Start", "01.01.2024"));
    book.add_record(record_with_birthday("End", "08.01.2024"));
    book.add_record(record_with_birthday("Before", "31.12.2023"));
    book.add_record(record_with_birthday("After", "09.01.2024"));

    assert_eq!(names(&book, date(1, 1, 2024), 7), vec!["End", "Start"]);
}

#[test]
fn window_skips_records_without_birthday() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice").unwrap());
    assert!(birthdays_in_window(&book, date(1, 1, 2024), 7).is_empty());
}

#[test]
fn window_compares_full_dates() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Alice", "05.01.1990"));
    assert!(birthdays_in_window(&book, date(1, 1, 2024), 7).is_empty());
}

#[test]
fn zero_horizon_is_today_only() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Today", "01.01.2024"));
    book.add_record(record_with_birthday("Tomorrow", "02.01.2024"));
    assert_eq!(names(&book, date(1, 1, 2024), 0), vec!["Today"]);
}

#[test]
fn window_crosses_year_boundary() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Alice", "02.01.2025"));
    assert_eq!(names(&book, date(28, 12, 2024), 7), vec!["Alice"]);
}

#[test]
fn default_horizon_is_seven() {
    assert_eq!(DEFAULT_HORIZON_DAYS, 7);
}

#[test]
fn result_carries_birthday() {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday("Alice", "05.01.2024"));
    let found = birthdays_in_window(&book, date(1, 1, 2024), 7);
    assert_eq!(found[0].birthday.to_string(), "05.01.2024");
}

// ==========================================================================
// CONTACT QUERY TESTS
// ==========================================================================

#[test]
fn phones_of_missing_contact_is_none() {
    let book = AddressBook::new();
    assert!(contact_queries::phones_of(&book, "Alice").is_none());
}

#[test]
fn birthday_of_distinguishes_missing_and_unset() {
    let mut book = AddressBook::new();
    book.add_record(Record::new("Alice").unwrap());
    assert_eq!(contact_queries::birthday_of(&book, "Alice"), Some(None));
    assert_eq!(contact_queries::birthday_of(&book, "Bob"), None);
}
