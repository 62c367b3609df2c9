//! Configuration management for the resume core.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the resume core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,

    /// Page size for list queries that do not specify a limit (default: 15)
    pub default_page_size: usize,

    /// Upper bound applied to every requested limit (default: 100)
    pub max_page_size: usize,

    /// Whether domain events are written to the audit log (default: true)
    pub audit_log_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "info")
    /// - `RESUME_DEFAULT_PAGE_SIZE`: Default list limit (default: 15)
    /// - `RESUME_MAX_PAGE_SIZE`: Maximum list limit (default: 100)
    /// - `RESUME_AUDIT_LOG`: Enable the audit log subscriber (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let default_page_size =
            Self::parse_env_usize("RESUME_DEFAULT_PAGE_SIZE", defaults.default_page_size)?;
        let max_page_size = Self::parse_env_usize("RESUME_MAX_PAGE_SIZE", defaults.max_page_size)?;
        let audit_log_enabled = Self::parse_env_bool("RESUME_AUDIT_LOG", defaults.audit_log_enabled)?;

        let config = Config {
            log_level,
            default_page_size,
            max_page_size,
            audit_log_enabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.default_page_size == 0 {
            return Err(ConfigError::InvalidValue {
                var: "RESUME_DEFAULT_PAGE_SIZE".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        if self.max_page_size < self.default_page_size {
            return Err(ConfigError::InvalidValue {
                var: "RESUME_MAX_PAGE_SIZE".to_string(),
                reason: format!(
                    "Must be at least the default page size ({})",
                    self.default_page_size
                ),
            });
        }

        Ok(())
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            default_page_size: 15,
            max_page_size: 100,
            audit_log_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 4] = [
        "LOG_LEVEL",
        "RESUME_DEFAULT_PAGE_SIZE",
        "RESUME_MAX_PAGE_SIZE",
        "RESUME_AUDIT_LOG",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard;

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard
        }

        fn set(&self, key: &str, value: &str) {
            env::set_var(key, value);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.default_page_size, 15);
        assert_eq!(config.max_page_size, 100);
        assert!(config.audit_log_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "debug");
        guard.set("RESUME_DEFAULT_PAGE_SIZE", "25");
        guard.set("RESUME_MAX_PAGE_SIZE", "50");
        guard.set("RESUME_AUDIT_LOG", "off");

        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.default_page_size, 25);
        assert_eq!(config.max_page_size, 50);
        assert!(!config.audit_log_enabled);
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_page_size() {
        let guard = EnvGuard::new();
        guard.set("RESUME_DEFAULT_PAGE_SIZE", "lots");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "RESUME_DEFAULT_PAGE_SIZE")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_max_below_default() {
        let guard = EnvGuard::new();
        guard.set("RESUME_DEFAULT_PAGE_SIZE", "20");
        guard.set("RESUME_MAX_PAGE_SIZE", "10");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "RESUME_MAX_PAGE_SIZE"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_default_page_size() {
        let guard = EnvGuard::new();
        guard.set("RESUME_DEFAULT_PAGE_SIZE", "0");
        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let guard = EnvGuard::new();
        guard.set("RESUME_AUDIT_LOG", "maybe");
        assert!(Config::parse_env_bool("RESUME_AUDIT_LOG", true).is_err());

        guard.set("RESUME_AUDIT_LOG", " YES ");
        assert_eq!(Config::parse_env_bool("RESUME_AUDIT_LOG", false).unwrap(), true);

        assert_eq!(Config::parse_env_bool("RESUME_NONEXISTENT", true).unwrap(), true);
    }
}
