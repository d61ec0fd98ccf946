//! `cashbox-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no persistence).

pub mod error;
pub mod username;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use username::Username;
pub use value_object::ValueObject;
