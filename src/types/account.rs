//! Account-related types for the Payment Instruction Engine
//!
//! This module defines the account snapshot supplied by the caller and the
//! account records returned in the settlement outcome.

use serde::{Deserialize, Serialize};

/// A single account as supplied in the caller's snapshot
///
/// Accounts are provided fresh on every call; the engine never retains them
/// between calls. The `currency` field is compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    /// Account identifier, matched exactly (case-sensitive) against the
    /// account ids extracted from the instruction
    pub id: String,

    /// Current balance in whole currency units
    ///
    /// The domain only ever debits and credits whole units, so balances
    /// are integers rather than decimals.
    pub balance: i64,

    /// Currency code (e.g. "USD"); case-insensitive on input
    pub currency: String,
}

/// An account as it appears in the settlement outcome
///
/// Carries both the balance as it stood before this instruction and the
/// balance after it. The two are equal whenever settlement is pending or the
/// transaction failed before mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettledAccount {
    /// Account identifier, original casing preserved
    pub id: String,

    /// Balance before this instruction was processed
    pub balance_before: i64,

    /// Balance after this instruction was processed
    ///
    /// Equal to `balance_before` unless the transaction settled immediately.
    pub balance: i64,

    /// Currency code, normalized to uppercase on output
    pub currency: String,
}

impl SettledAccount {
    /// Build an untouched output record from a snapshot account
    ///
    /// Used for pending settlements and for every failure class that attaches
    /// the involved accounts: `balance` equals `balance_before` and only the
    /// currency is normalized.
    pub fn unchanged(account: &Account) -> Self {
        SettledAccount {
            id: account.id.clone(),
            balance_before: account.balance,
            balance: account.balance,
            currency: account.currency.to_uppercase(),
        }
    }
}
