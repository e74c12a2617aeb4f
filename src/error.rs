use thiserror::Error;

/// Rejections raised by the field validators and record mutations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be blank")]
    BlankName { field: String },

    #[error("phone must be exactly 10 digits")]
    InvalidPhone { value: String },

    #[error("invalid date format, expected DD.MM.YYYY")]
    InvalidBirthday { value: String },

    #[error("birthday already set")]
    BirthdayAlreadySet,

    #[error("old number not found")]
    OldPhoneNotFound { number: String },

    #[error("new number invalid")]
    NewPhoneInvalid { number: String },
}

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ContactsResult<T> = Result<T, ContactsError>;
