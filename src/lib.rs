pub mod error;
pub mod validation;
pub mod model;
pub mod ops;
pub mod queries;
pub mod config;
pub mod cli;

pub use config::Config;
pub use error::{ContactsError, ContactsResult, ValidationError, ValidationResult};
