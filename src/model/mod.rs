pub mod name;
pub mod phone;
pub mod birthday;
pub mod record;
pub mod address_book;

// Re-exports for convenience
pub use name::Name;
pub use phone::Phone;
pub use birthday::Birthday;
pub use record::Record;
pub use address_book::AddressBook;
