//! Infrastructure layer: account persistence, configuration, and the
//! session-level bank that drives account operations.

pub mod bank;
pub mod config;
pub mod store;


pub use bank::{Bank, BankError, Session};
pub use config::{BankConfig, ConfigError};
pub use store::{AccountMap, AccountStore, FileAccountStore, InMemoryAccountStore, StoreError};
