//! Banking service - the transfer and payment mutations.
//!
//! Both operations run inside [`AccountStore::update`], so each successful
//! call mutates the table and persists it exactly once.
//!
//! # No Validation
//!
//! Amounts are coerced, never checked. Negative amounts, overdrafts and
//! unreadable input (which becomes `NaN`) are applied as-is. The only
//! failure is an unknown account key, detected before anything changes.

use crate::{
    error::AppError,
    models::account::Account,
    services::coerce::{parse_int, to_number},
    store::AccountStore,
};

/// Move `amount` from one account to another.
///
/// # Process
///
/// 1. Resolve both account keys
/// 2. Debit the source by the whole-string coercion of `amount`
/// 3. Credit the destination by the leading-integer coercion of `amount`
/// 4. Persist
///
/// Because the two sides use different coercions, `"12.5"` debits 12.5 and
/// credits 12. When `from == to` both steps apply to the same account.
///
/// # Errors
///
/// - `AccountNotFound`: either key is missing (nothing is changed)
/// - `Store`: persisting failed (the in-memory change stays)
pub fn execute_transfer(
    store: &AccountStore,
    from: &str,
    to: &str,
    amount: Option<&str>,
) -> Result<(), AppError> {
    store.update(|accounts| {
        for key in [from, to] {
            if !accounts.contains_key(key) {
                return Err(AppError::AccountNotFound(key.to_string()));
            }
        }

        let debit = to_number(amount);
        let credit = parse_int(amount);

        if let Some(source) = accounts.get_mut(from) {
            source.balance -= debit;
        }
        if let Some(destination) = accounts.get_mut(to) {
            destination.balance += credit;
        }

        tracing::info!(from, to, debit, credit, "Transfer completed");
        Ok(())
    })
}

/// Pay `amount` off the credit account: the balance goes down and the
/// available credit goes up by the leading-integer coercion of `amount`.
///
/// # Returns
///
/// The credit account after the payment.
///
/// # Errors
///
/// - `AccountNotFound`: `credit_key` is not in the table
/// - `Store`: persisting failed
pub fn execute_payment(
    store: &AccountStore,
    credit_key: &str,
    amount: Option<&str>,
) -> Result<Account, AppError> {
    store.update(|accounts| {
        let credit = accounts
            .get_mut(credit_key)
            .ok_or_else(|| AppError::AccountNotFound(credit_key.to_string()))?;

        let paid = parse_int(amount);
        credit.balance -= paid;
        credit.credit_available(paid);

        tracing::info!(account = credit_key, amount = paid, "Payment completed");
        Ok(credit.clone())
    })
}
