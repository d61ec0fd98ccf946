//! Session-level orchestration over an account store.
//!
//! The `Bank` loads the store once, keeps every account in memory, and writes
//! the whole mapping back when an account is opened or a session logs out:
//!
//! ```text
//! Bank::open ──► login ──► Session { deposit | withdraw | transfer }* ──► logout (save)
//! ```
//!
//! Mutations are only reachable through a `Session`, which exists only after
//! the credential check passed.

use std::collections::BTreeMap;

use thiserror::Error;

use cashbox_accounts::{transfer, Account, Amount, ValidationMode};
use cashbox_core::{DomainError, Username};

use crate::store::{AccountMap, AccountStore, StoreError};

#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BankError {
    /// Whether a caller can report the error and carry on with the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            BankError::Domain(e) => e.is_recoverable(),
            BankError::Store(_) => false,
        }
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            BankError::Domain(e) => Some(e),
            BankError::Store(_) => None,
        }
    }
}

/// In-memory accounts backed by an injected store.
#[derive(Debug)]
pub struct Bank<S> {
    store: S,
    mode: ValidationMode,
    accounts: BTreeMap<Username, Account>,
}

impl<S> Bank<S>
where
    S: AccountStore,
{
    /// Load every account from `store`.
    ///
    /// A record that fails account validation (negative components, or an
    /// out-of-range fraction in strict mode) makes the whole store corrupt.
    pub fn open(store: S, mode: ValidationMode) -> Result<Self, BankError> {
        let records = store.load()?;

        let mut accounts = BTreeMap::new();
        for (username, record) in records {
            let account = Account::from_record_with(record, mode)
                .map_err(|e| StoreError::Corrupt(format!("account {username}: {e}")))?;
            accounts.insert(username, account);
        }

        tracing::info!(accounts = accounts.len(), ?mode, "accounts loaded");
        Ok(Self {
            store,
            mode,
            accounts,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn account(&self, username: &str) -> Option<&Account> {
        self.accounts.get(username)
    }

    /// Open a new account and persist the store.
    ///
    /// If the save fails the account is dropped again, so memory and storage
    /// agree.
    pub fn create_account(
        &mut self,
        username: &str,
        credential: &str,
        initial: Amount,
    ) -> Result<&Account, BankError> {
        let username = Username::parse(username)?;
        if self.accounts.contains_key(&username) {
            tracing::warn!(%username, "account creation rejected: username taken");
            return Err(DomainError::duplicate_username(username.as_str()).into());
        }

        let account = Account::with_mode(initial.whole, initial.fraction, credential, self.mode)?;
        self.accounts.insert(username.clone(), account);

        if let Err(e) = self.save() {
            self.accounts.remove(&username);
            return Err(e);
        }

        tracing::info!(%username, "account created");
        let account = lookup(&mut self.accounts, &username)?;
        Ok(&*account)
    }

    /// Authenticate and start a session on one account.
    pub fn login(&mut self, username: &str, credential: &str) -> Result<Session<'_, S>, BankError> {
        let (key, account) = self
            .accounts
            .get_key_value(username)
            .ok_or_else(|| DomainError::account_not_found(username))?;

        if !account.authenticate(credential) {
            tracing::warn!(username, "login rejected: invalid credential");
            return Err(DomainError::InvalidCredential.into());
        }

        let username = key.clone();
        tracing::info!(%username, "logged in");
        Ok(Session { bank: self, username })
    }

    /// Serialized form of every account.
    pub fn records(&self) -> AccountMap {
        self.accounts
            .iter()
            .map(|(username, account)| (username.clone(), account.to_record()))
            .collect()
    }

    /// Overwrite the store with the in-memory accounts.
    pub fn save(&self) -> Result<(), BankError> {
        self.store.save(&self.records())?;
        tracing::debug!(accounts = self.accounts.len(), "accounts saved");
        Ok(())
    }
}

/// Authenticated handle on one account.
///
/// Changes stay in memory until [`Session::logout`] (or [`Bank::save`]).
#[derive(Debug)]
pub struct Session<'a, S> {
    bank: &'a mut Bank<S>,
    username: Username,
}

impl<S> Session<'_, S>
where
    S: AccountStore,
{
    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn balance(&self) -> Result<&Account, BankError> {
        self.bank
            .accounts
            .get(&self.username)
            .ok_or_else(|| DomainError::account_not_found(self.username.as_str()).into())
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<&Account, BankError> {
        let account = lookup(&mut self.bank.accounts, &self.username)?;
        account.deposit(amount.whole, amount.fraction).inspect_err(|e| {
            tracing::warn!(username = %self.username, error = %e, "deposit rejected");
        })?;

        tracing::info!(username = %self.username, %amount, "deposit");
        Ok(&*account)
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<&Account, BankError> {
        let account = lookup(&mut self.bank.accounts, &self.username)?;
        account.withdraw(amount.whole, amount.fraction).inspect_err(|e| {
            tracing::warn!(username = %self.username, error = %e, "withdrawal rejected");
        })?;

        tracing::info!(username = %self.username, %amount, "withdrawal");
        Ok(&*account)
    }

    /// Move funds to another account. Both change, or neither does.
    pub fn transfer(&mut self, recipient: &str, amount: Amount) -> Result<&Account, BankError> {
        if recipient == self.username.as_str() {
            return Err(DomainError::SelfTransfer.into());
        }
        if !self.bank.accounts.contains_key(recipient) {
            tracing::warn!(username = %self.username, recipient, "transfer rejected: unknown recipient");
            return Err(DomainError::account_not_found(recipient).into());
        }

        // Take the sender out so both accounts can be borrowed mutably.
        let mut sender = self
            .bank
            .accounts
            .remove(&self.username)
            .ok_or_else(|| DomainError::account_not_found(self.username.as_str()))?;
        let result = match self.bank.accounts.get_mut(recipient) {
            Some(to) => transfer(&mut sender, to, amount),
            None => Err(DomainError::account_not_found(recipient)),
        };
        self.bank.accounts.insert(self.username.clone(), sender);

        result.inspect_err(|e| {
            tracing::warn!(username = %self.username, recipient, error = %e, "transfer rejected");
        })?;

        tracing::info!(username = %self.username, recipient, %amount, "transfer completed");
        self.balance()
    }

    /// Persist every account and end the session.
    pub fn logout(self) -> Result<(), BankError> {
        self.bank.save()?;
        tracing::info!(username = %self.username, "logged out");
        Ok(())
    }
}

fn lookup<'m>(
    accounts: &'m mut BTreeMap<Username, Account>,
    username: &Username,
) -> Result<&'m mut Account, BankError> {
    accounts
        .get_mut(username)
        .ok_or_else(|| DomainError::account_not_found(username.as_str()).into())
}
