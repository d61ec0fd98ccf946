use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::codec;
use super::r#trait::{AccountMap, AccountStore, StoreError};

/// File name used when no path is configured.
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.txt";

/// Flat-file account store.
///
/// `save` truncates and rewrites the file in place. It is not atomic: a crash
/// mid-write can leave a truncated file, which the next `load` reports as
/// corrupt.
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for FileAccountStore {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNTS_FILE)
    }
}

impl AccountStore for FileAccountStore {
    fn load(&self) -> Result<AccountMap, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no account store yet; starting empty");
                return Ok(AccountMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let accounts = codec::decode(&bytes)?;
        tracing::debug!(path = %self.path.display(), accounts = accounts.len(), "account store read");
        Ok(accounts)
    }

    fn save(&self, accounts: &AccountMap) -> Result<(), StoreError> {
        let bytes = codec::encode(accounts)?;
        fs::write(&self.path, &bytes)?;
        tracing::debug!(
            path = %self.path.display(),
            accounts = accounts.len(),
            bytes = bytes.len(),
            "account store written"
        );
        Ok(())
    }
}
