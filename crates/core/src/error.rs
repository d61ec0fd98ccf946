//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic business failures only (validation, funds, lookups). Storage
/// failures live in the infrastructure crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A negative (or, in strict mode, out-of-range) amount was supplied.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The requested withdrawal exceeds the current balance.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// A withdrawal would leave a negative component after borrowing.
    #[error("withdrawal results in negative balance")]
    NegativeBalance,

    /// A deposit would overflow the balance representation.
    #[error("balance overflow")]
    BalanceOverflow,

    #[error("account not found: {0}")]
    AccountNotFound(String),

    #[error("username already exists: {0}")]
    DuplicateUsername(String),

    #[error("invalid username: {0}")]
    InvalidUsername(String),

    /// Credential did not match. Carries no detail on purpose.
    #[error("invalid credential")]
    InvalidCredential,

    #[error("cannot transfer to the same account")]
    SelfTransfer,
}

impl DomainError {
    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn account_not_found(username: impl Into<String>) -> Self {
        Self::AccountNotFound(username.into())
    }

    pub fn duplicate_username(username: impl Into<String>) -> Self {
        Self::DuplicateUsername(username.into())
    }

    pub fn invalid_username(msg: impl Into<String>) -> Self {
        Self::InvalidUsername(msg.into())
    }

    /// Errors a caller can report to the end user and keep the session going.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NegativeBalance | Self::BalanceOverflow)
    }
}
