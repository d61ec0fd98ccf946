//! Account store boundary.
//!
//! Persistence of the username → account record mapping, behind a trait so the
//! bank can run against a real file or an in-memory fake.

pub mod codec;
pub mod file;
pub mod in_memory;
pub mod r#trait;

pub use file::{FileAccountStore, DEFAULT_ACCOUNTS_FILE};
pub use in_memory::InMemoryAccountStore;
pub use r#trait::{AccountMap, AccountStore, StoreError};
