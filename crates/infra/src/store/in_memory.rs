use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use super::codec;
use super::r#trait::{AccountMap, AccountStore, StoreError};

/// In-memory account store.
///
/// Keeps the encoded bytes, so it goes through the same codec as the file
/// store. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    contents: RwLock<Option<Vec<u8>>>,
    saves: AtomicUsize,
}

impl InMemoryAccountStore {
    /// A store with nothing persisted yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// A store pre-seeded with raw bytes (which need not be valid).
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RwLock::new(Some(bytes.into())),
            saves: AtomicUsize::new(0),
        }
    }

    /// Raw persisted bytes, if anything has been stored.
    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.read().ok().and_then(|c| c.clone())
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl AccountStore for InMemoryAccountStore {
    fn load(&self) -> Result<AccountMap, StoreError> {
        let guard = self
            .contents
            .read()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".into()))?;

        match guard.as_deref() {
            Some(bytes) => codec::decode(bytes),
            None => Ok(AccountMap::new()),
        }
    }

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError> {
        let bytes = codec::encode(accounts)?;
        let mut guard = self
            .contents
            .write()
            .map_err(|_| StoreError::Backend("in-memory store lock poisoned".into()))?;
        *guard = Some(bytes);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
