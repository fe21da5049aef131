//! Process configuration loaded from the environment
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{anyhow, Result};

pub const ACCOUNT_VAR: &str = "ROBOMINDER_ACCOUNT";
pub const PASSWORD_VAR: &str = "ROBOMINDER_PASSWORD";
pub const LOG_LEVEL_VAR: &str = "ROBOMINDER_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    /// Discord application id the bot logs in as
    pub account: u64,
    /// Discord bot token
    pub password: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from process environment variables
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (account, password) = match (non_empty(ACCOUNT_VAR), non_empty(PASSWORD_VAR)) {
            (Some(account), Some(password)) => (account, password),
            _ => {
                return Err(anyhow!(
                    "{ACCOUNT_VAR} and {PASSWORD_VAR} environment variables must be set"
                ))
            }
        };

        let account = account
            .parse::<u64>()
            .map_err(|_| anyhow!("{ACCOUNT_VAR} must be a numeric application id"))?;

        Ok(Config {
            account,
            password,
            log_level: non_empty(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_loads_required_values() {
        let config =
            Config::from_vars(lookup(&[(ACCOUNT_VAR, "123456"), (PASSWORD_VAR, "secret")]))
                .unwrap();

        assert_eq!(config.account, 123456);
        assert_eq!(config.password, "secret");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_log_level_override() {
        let config = Config::from_vars(lookup(&[
            (ACCOUNT_VAR, "1"),
            (PASSWORD_VAR, "secret"),
            (LOG_LEVEL_VAR, "debug"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_missing_password_is_fatal() {
        let err = Config::from_vars(lookup(&[(ACCOUNT_VAR, "1")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ROBOMINDER_ACCOUNT and ROBOMINDER_PASSWORD environment variables must be set"
        );
    }

    #[test]
    fn test_missing_account_is_fatal() {
        assert!(Config::from_vars(lookup(&[(PASSWORD_VAR, "secret")])).is_err());
        assert!(Config::from_vars(lookup(&[])).is_err());
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let result = Config::from_vars(lookup(&[(ACCOUNT_VAR, "  "), (PASSWORD_VAR, "secret")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_account_rejected() {
        let vars = lookup(&[(ACCOUNT_VAR, "bot@example.org"), (PASSWORD_VAR, "x")]);
        let err = Config::from_vars(vars).unwrap_err();
        assert!(err.to_string().contains("numeric application id"));
    }
}
