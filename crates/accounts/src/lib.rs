//! Accounts module (balance arithmetic, credentials, transfers).
//!
//! Pure domain logic only: no IO, no persistence concerns.

pub mod account;
pub mod amount;
pub mod credential;
pub mod transfer;

pub use account::{Account, AccountRecord, ValidationMode, FRACTION_PER_WHOLE};
pub use amount::Amount;
pub use credential::Credential;
pub use transfer::transfer;
