//! Runtime settings.
//!
//! Values come from the environment (optionally seeded from a `.env` file)
//! and can be overridden by command-line flags in `main`.

use std::env;

use crate::error::ConfigError;
use crate::queries::birthday_queries::DEFAULT_HORIZON_DAYS;

pub const HORIZON_VAR: &str = "CONTACTS_BIRTHDAY_HORIZON_DAYS";
pub const LOG_LEVEL_VAR: &str = "CONTACTS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Days after today covered by the `birthdays` command (default: 7)
    pub birthday_horizon_days: u32,

    /// Tracing filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_BIRTHDAY_HORIZON_DAYS`: birthday window in days (default: 7)
    /// - `CONTACTS_LOG_LEVEL`: logging level (default: "warn")
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();

        let birthday_horizon_days = Self::parse_env_u32(HORIZON_VAR, DEFAULT_HORIZON_DAYS)?;
        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            birthday_horizon_days,
            log_level,
        })
    }

    fn parse_env_u32(var_name: &str, default: u32) -> Result<u32, ConfigError> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn default_horizon_is_a_week() {
        let config = Config::default();
        assert_eq!(config.birthday_horizon_days, 7);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn from_env_uses_defaults_when_unset() {
        let mut guard = EnvGuard::new();
        guard.unset(HORIZON_VAR);
        guard.unset(LOG_LEVEL_VAR);

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn from_env_reads_overrides() {
        let mut guard = EnvGuard::new();
        guard.set(HORIZON_VAR, "30");
        guard.set(LOG_LEVEL_VAR, "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_horizon_days, 30);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn from_env_rejects_negative_horizon() {
        let mut guard = EnvGuard::new();
        guard.set(HORIZON_VAR, "-1");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, HORIZON_VAR),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }
}
