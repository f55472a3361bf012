//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `ACCOUNTS_FILE` (optional): JSON file holding the account table, defaults to `data/accounts.json`
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `CREDIT_ACCOUNT` (optional): key of the account the payment routes act on, defaults to `credit`
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_accounts_file")]
    pub accounts_file: PathBuf,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_credit_account")]
    pub credit_account: String,
}

fn default_accounts_file() -> PathBuf {
    PathBuf::from("data/accounts.json")
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

fn default_credit_account() -> String {
    "credit".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first when one exists.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g. a non-numeric `SERVER_PORT`).
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        // Field names are converted: accounts_file -> ACCOUNTS_FILE
        envy::from_env::<Config>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = envy::from_iter::<_, Config>(Vec::<(String, String)>::new()).unwrap();

        assert_eq!(config.accounts_file, PathBuf::from("data/accounts.json"));
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.credit_account, "credit");
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = vec![
            ("ACCOUNTS_FILE".to_string(), "/tmp/bank.json".to_string()),
            ("SERVER_PORT".to_string(), "8080".to_string()),
            ("CREDIT_ACCOUNT".to_string(), "visa".to_string()),
        ];
        let config = envy::from_iter::<_, Config>(vars).unwrap();

        assert_eq!(config.accounts_file, PathBuf::from("/tmp/bank.json"));
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.credit_account, "visa");
    }

    #[test]
    fn test_rejects_non_numeric_port() {
        let vars = vec![("SERVER_PORT".to_string(), "eighty".to_string())];

        assert!(envy::from_iter::<_, Config>(vars).is_err());
    }
}
