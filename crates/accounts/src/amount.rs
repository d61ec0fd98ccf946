use serde::{Deserialize, Serialize};

use cashbox_core::ValueObject;

/// A `(whole, fraction)` pair as supplied by a caller.
///
/// Not validated on construction: each account operation checks its own
/// preconditions, so a negative amount surfaces as `InvalidAmount` there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    pub whole: i64,
    pub fraction: i64,
}

impl Amount {
    pub const fn new(whole: i64, fraction: i64) -> Self {
        Self { whole, fraction }
    }
}

impl ValueObject for Amount {}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} dollars, {} cents", self.whole, self.fraction)
    }
}
