//! Account key in the store.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Username identifying one account (unique key of the store).
///
/// Deserialization is transparent and does not validate, so a store written by
/// an older tool still loads. New accounts go through [`Username::parse`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Parse a username for a new account; rejects empty or blank names.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::invalid_username("username cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Username {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Username {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::borrow::Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_usernames_are_rejected() {
        assert!(matches!(Username::parse(""), Err(DomainError::InvalidUsername(_))));
        assert!(matches!("   ".parse::<Username>(), Err(DomainError::InvalidUsername(_))));
    }

    #[test]
    fn usernames_are_case_sensitive_keys() {
        let a = Username::parse("Alice").unwrap();
        let b = Username::parse("alice").unwrap();
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "Alice");
    }

    #[test]
    fn serializes_as_plain_string() {
        let u = Username::parse("user1").unwrap();
        assert_eq!(serde_json::to_string(&u).unwrap(), "\"user1\"");
        let back: Username = serde_json::from_str("\"user1\"").unwrap();
        assert_eq!(back, u);
    }
}
