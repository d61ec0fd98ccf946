//! Configuration loading and representation.

use std::path::PathBuf;

use thiserror::Error;

use cashbox_accounts::ValidationMode;

use crate::bank::{Bank, BankError};
use crate::store::{FileAccountStore, DEFAULT_ACCOUNTS_FILE};

/// Path of the accounts file.
pub const ACCOUNTS_FILE_ENV: &str = "CASHBOX_ACCOUNTS_FILE";
/// Boolean switch for strict fraction validation.
pub const STRICT_FRACTIONS_ENV: &str = "CASHBOX_STRICT_FRACTIONS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub accounts_path: PathBuf,
    pub validation: ValidationMode,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            accounts_path: PathBuf::from(DEFAULT_ACCOUNTS_FILE),
            validation: ValidationMode::Permissive,
        }
    }
}

impl BankConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(ACCOUNTS_FILE_ENV) {
            config = config.with_accounts_path(path);
        }
        if let Some(raw) = lookup(STRICT_FRACTIONS_ENV) {
            if parse_flag(STRICT_FRACTIONS_ENV, &raw)? {
                config = config.strict();
            }
        }

        Ok(config)
    }

    /// Point at another accounts file. A blank path keeps the current one.
    pub fn with_accounts_path(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.as_os_str().to_string_lossy().trim().is_empty() {
            self.accounts_path = path;
        }
        self
    }

    pub fn strict(mut self) -> Self {
        self.validation = ValidationMode::Strict;
        self
    }

    pub fn store(&self) -> FileAccountStore {
        FileAccountStore::new(&self.accounts_path)
    }

    /// Load the configured accounts file into a bank.
    pub fn open_bank(&self) -> Result<Bank<FileAccountStore>, BankError> {
        tracing::debug!(path = %self.accounts_path.display(), validation = ?self.validation, "opening bank");
        Bank::open(self.store(), self.validation)
    }
}

pub fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = BankConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(config, BankConfig::default());
        assert_eq!(config.accounts_path, PathBuf::from("accounts.txt"));
        assert_eq!(config.validation, ValidationMode::Permissive);
    }

    #[test]
    fn overrides_are_applied() {
        let config = BankConfig::from_lookup(env(&[
            (ACCOUNTS_FILE_ENV, "/tmp/bank.json"),
            (STRICT_FRACTIONS_ENV, "yes"),
        ]))
        .unwrap();
        assert_eq!(config.accounts_path, PathBuf::from("/tmp/bank.json"));
        assert_eq!(config.validation, ValidationMode::Strict);
    }

    #[test]
    fn blank_path_keeps_default() {
        let config = BankConfig::from_lookup(env(&[(ACCOUNTS_FILE_ENV, "  ")])).unwrap();
        assert_eq!(config.accounts_path, PathBuf::from(DEFAULT_ACCOUNTS_FILE));
    }

    #[test]
    fn blank_explicit_path_keeps_current() {
        let config = BankConfig::default()
            .with_accounts_path("/tmp/a.json")
            .with_accounts_path("");
        assert_eq!(config.accounts_path, PathBuf::from("/tmp/a.json"));
    }

    #[test]
    fn bad_flag_is_reported() {
        let err = BankConfig::from_lookup(env(&[(STRICT_FRACTIONS_ENV, "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: STRICT_FRACTIONS_ENV,
                value: "maybe".into()
            }
        );
    }

    #[test]
    fn open_bank_on_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = BankConfig {
            accounts_path: dir.path().join("accounts.txt"),
            ..BankConfig::default()
        };
        assert!(config.open_bank().unwrap().is_empty());
    }
}
