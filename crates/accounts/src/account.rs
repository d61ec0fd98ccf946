use serde::{Deserialize, Serialize};

use cashbox_core::{DomainError, DomainResult};

use crate::credential::Credential;

/// Fraction units per whole unit (cents per dollar).
pub const FRACTION_PER_WHOLE: i64 = 100;

/// How strictly `fraction` is checked on construction/deserialization.
///
/// `Permissive` accepts `fraction > 99` (it is only normalized by a later
/// deposit). `Strict` rejects it with `InvalidAmount`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ValidationMode {
    #[default]
    Permissive,
    Strict,
}

/// Persisted form of an account.
///
/// Reads also accept the `dollars` / `cents` / `password` field names used by
/// older account files; writes always use the canonical names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(alias = "dollars")]
    pub whole: i64,
    #[serde(alias = "cents")]
    pub fraction: i64,
    #[serde(alias = "password")]
    pub credential: Credential,
}

/// A balance (whole units + fraction units) guarded by a credential.
///
/// Invariant after every successful deposit/withdraw:
/// `whole >= 0 && 0 <= fraction <= 99`. Construction only enforces
/// non-negativity unless built in [`ValidationMode::Strict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    whole: i64,
    fraction: i64,
    credential: Credential,
}

impl Account {
    /// Open an account (permissive fraction handling).
    pub fn new(whole: i64, fraction: i64, credential: impl Into<Credential>) -> DomainResult<Self> {
        Self::with_mode(whole, fraction, credential, ValidationMode::Permissive)
    }

    pub fn with_mode(
        whole: i64,
        fraction: i64,
        credential: impl Into<Credential>,
        mode: ValidationMode,
    ) -> DomainResult<Self> {
        if whole < 0 || fraction < 0 {
            return Err(DomainError::invalid_amount(
                "dollars and cents must be non-negative",
            ));
        }
        if mode == ValidationMode::Strict && fraction >= FRACTION_PER_WHOLE {
            return Err(DomainError::invalid_amount(format!(
                "cents must be below {FRACTION_PER_WHOLE}, got {fraction}"
            )));
        }

        Ok(Self {
            whole,
            fraction,
            credential: credential.into(),
        })
    }

    pub fn whole(&self) -> i64 {
        self.whole
    }

    pub fn fraction(&self) -> i64 {
        self.fraction
    }

    pub fn authenticate(&self, candidate: &str) -> bool {
        self.credential.verify(candidate)
    }

    /// True when `fraction` is within `[0, 99]`.
    pub fn is_normalized(&self) -> bool {
        (0..FRACTION_PER_WHOLE).contains(&self.fraction)
    }

    /// Add funds, carrying whole units out of the fraction.
    pub fn deposit(&mut self, whole_amount: i64, fraction_amount: i64) -> DomainResult<()> {
        ensure_non_negative(whole_amount, fraction_amount, "deposit")?;

        let fraction = self
            .fraction
            .checked_add(fraction_amount)
            .ok_or(DomainError::BalanceOverflow)?;
        let whole = self
            .whole
            .checked_add(whole_amount)
            .and_then(|w| w.checked_add(fraction / FRACTION_PER_WHOLE))
            .ok_or(DomainError::BalanceOverflow)?;

        self.whole = whole;
        self.fraction = fraction % FRACTION_PER_WHOLE;
        Ok(())
    }

    /// Remove funds, borrowing one whole unit when the fraction runs short.
    ///
    /// The funds check compares `(whole, fraction)` lexicographically. It does
    /// not cover every borrow outcome (e.g. a fraction amount above 100 plus
    /// the held fraction), so the result is re-checked and rejected with
    /// `NegativeBalance`. The account is left untouched on any error.
    pub fn withdraw(&mut self, whole_amount: i64, fraction_amount: i64) -> DomainResult<()> {
        ensure_non_negative(whole_amount, fraction_amount, "withdrawal")?;

        if whole_amount > self.whole
            || (whole_amount == self.whole && fraction_amount > self.fraction)
        {
            return Err(DomainError::InsufficientFunds);
        }

        let (whole, fraction) = if fraction_amount > self.fraction {
            (
                self.whole - whole_amount - 1,
                self.fraction - fraction_amount + FRACTION_PER_WHOLE,
            )
        } else {
            (self.whole - whole_amount, self.fraction - fraction_amount)
        };

        if whole < 0 || fraction < 0 {
            return Err(DomainError::NegativeBalance);
        }

        self.whole = whole;
        self.fraction = fraction;
        Ok(())
    }

    pub fn to_record(&self) -> AccountRecord {
        AccountRecord {
            whole: self.whole,
            fraction: self.fraction,
            credential: self.credential.clone(),
        }
    }

    pub fn from_record(record: AccountRecord) -> DomainResult<Self> {
        Self::from_record_with(record, ValidationMode::Permissive)
    }

    pub fn from_record_with(record: AccountRecord, mode: ValidationMode) -> DomainResult<Self> {
        Self::with_mode(record.whole, record.fraction, record.credential, mode)
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Balance: {} dollars, {} cents", self.whole, self.fraction)
    }
}

fn ensure_non_negative(whole: i64, fraction: i64, op: &str) -> DomainResult<()> {
    if whole < 0 || fraction < 0 {
        return Err(DomainError::invalid_amount(format!(
            "{op} amounts must be non-negative"
        )));
    }
    Ok(())
}
