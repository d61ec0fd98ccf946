use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use cashbox_accounts::AccountRecord;
use cashbox_core::Username;

/// The persisted mapping, ordered by username so encoding is deterministic.
pub type AccountMap = BTreeMap<Username, AccountRecord>;

/// Account store operation error.
///
/// These are infrastructure errors, as opposed to the domain errors raised by
/// account operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The source exists but is not a well-formed account mapping.
    #[error("corrupt account store: {0}")]
    Corrupt(String),

    #[error("account store io error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend failure unrelated to the data itself (encoding, poisoned lock).
    #[error("account store backend error: {0}")]
    Backend(String),
}

/// Whole-mapping load/save.
///
/// - `load` returns an empty mapping when nothing has been saved yet.
/// - `save` replaces whatever was stored before. No merge, no locking: the
///   last writer wins.
/// - Saving the same mapping twice must produce identical stored bytes.
pub trait AccountStore: Send + Sync {
    fn load(&self) -> Result<AccountMap, StoreError>;

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError>;
}

impl<S> AccountStore for Arc<S>
where
    S: AccountStore + ?Sized,
{
    fn load(&self) -> Result<AccountMap, StoreError> {
        (**self).load()
    }

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError> {
        (**self).save(accounts)
    }
}

impl<S> AccountStore for &S
where
    S: AccountStore + ?Sized,
{
    fn load(&self) -> Result<AccountMap, StoreError> {
        (**self).load()
    }

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError> {
        (**self).save(accounts)
    }
}
