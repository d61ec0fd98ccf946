use cashbox_core::DomainResult;

use crate::account::Account;
use crate::amount::Amount;

/// Move `amount` from `from` into `to` as one unit.
///
/// Withdraws first, then deposits. If the deposit fails the sender is restored,
/// so on error neither account has changed.
pub fn transfer(from: &mut Account, to: &mut Account, amount: Amount) -> DomainResult<()> {
    let snapshot = from.clone();
    from.withdraw(amount.whole, amount.fraction)?;

    if let Err(err) = to.deposit(amount.whole, amount.fraction) {
        *from = snapshot;
        return Err(err);
    }

    Ok(())
}
