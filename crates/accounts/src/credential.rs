//! Account credential.
//!
//! Comparison is plain exact equality. Keeping it behind this type means a
//! hashed scheme only has to change `verify` and the serialized form.

use serde::{Deserialize, Serialize};

use cashbox_core::ValueObject;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exact, case-sensitive match against a candidate secret.
    pub fn verify(&self, candidate: &str) -> bool {
        self.0 == candidate
    }

    /// Raw secret, for persistence only.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Credential {}

impl core::fmt::Debug for Credential {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Credential {
    fn from(value: String) -> Self {
        Self(value)
    }
}
