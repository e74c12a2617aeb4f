use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::Config;
use crate::error::ValidationError;
use crate::model::AddressBook;

/// State shared by every command for the length of one session.
pub struct CliContext {
    pub book: AddressBook,
    pub horizon_days: u32,
    today: Option<NaiveDate>,
}

impl CliContext {
    pub fn new(config: &Config) -> Self {
        Self {
            book: AddressBook::new(),
            horizon_days: config.birthday_horizon_days,
            today: None,
        }
    }

    /// Pins "today" to a fixed date instead of the local clock.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Render a rejected command.
    pub fn error_message(&self, e: &ValidationError) -> String {
        debug!(error = ?e, "command rejected");
        format!("Error: {}", e)
    }
}

/// `Usage: ...` line for a command invoked with too few arguments.
pub fn usage(synopsis: &str) -> String {
    format!("Usage: {}", synopsis)
}
