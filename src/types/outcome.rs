//! Settlement outcome types for the Payment Instruction Engine
//!
//! This module defines the uniform result shape every call produces, the
//! closed set of status codes, and the status classes derived from them.
//!
//! The outcome schema is stable across all paths: fields that could not be
//! determined at the point of failure are explicit `null`s rather than being
//! omitted, so consumers always see the same shape.

use serde::Serialize;

use super::account::SettledAccount;
use super::instruction::InstructionType;

/// Overall settlement status
///
/// Fully determined by [`StatusCode`]: `AP00` is successful, `AP01` is
/// pending, every other code is failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Transaction validated and balances mutated within this call
    Successful,

    /// Transaction validated but deferred to a future execution date;
    /// balances untouched
    Pending,

    /// Transaction rejected; balances untouched
    Failed,
}

/// Stable status codes forming the externally visible contract
///
/// Consumers should treat these as a closed enum, not free text. The
/// `status_reason` string accompanying a code is human-readable and may
/// change; the code never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusCode {
    /// Missing required keyword / sentence too short
    Sy01,

    /// Correct length but a fixed-position keyword is wrong, or malformed
    /// date-clause marker
    Sy02,

    /// Unrecognized or structurally invalid instruction / bad input shape
    Sy03,

    /// Amount not a positive whole-number string
    Am01,

    /// Amount is a syntactically valid positive decimal (whole units only)
    Am02,

    /// Currency code not in the supported set
    Cu02,

    /// Account id contains disallowed characters
    Ac04,

    /// Debit or credit account not found in the snapshot
    Ac03,

    /// Currency mismatch between accounts and/or instruction
    Cu01,

    /// Debit and credit account ids identical
    Ac02,

    /// Insufficient funds in the debit account
    Ac01,

    /// Date clause present but not a valid calendar date
    Dt01,

    /// Valid, future-dated, settlement pending (not a failure)
    Ap01,

    /// Valid, settled immediately (not a failure)
    Ap00,
}

impl StatusCode {
    /// The status class this code belongs to
    pub fn status(self) -> Status {
        match self {
            StatusCode::Ap00 => Status::Successful,
            StatusCode::Ap01 => Status::Pending,
            _ => Status::Failed,
        }
    }
}

/// The uniform result of processing one payment instruction
///
/// Every call returns this shape, whether the instruction succeeded, was
/// deferred, or failed at any stage. Undetermined fields are `None` and
/// serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementOutcome {
    /// The instruction form, once the grammar has recognized it
    #[serde(rename = "type")]
    pub instruction_type: Option<InstructionType>,

    /// The validated amount in whole currency units
    pub amount: Option<i64>,

    /// The validated currency code, uppercased
    pub currency: Option<String>,

    /// The account to debit, as extracted from the sentence
    pub debit_account: Option<String>,

    /// The account to credit, as extracted from the sentence
    pub credit_account: Option<String>,

    /// The execution-date string, when a date clause was present
    pub execute_by: Option<String>,

    /// Settlement status class
    pub status: Status,

    /// Stable status code (see the variants for the full taxonomy)
    pub status_code: StatusCode,

    /// Human-readable explanation of the status
    pub status_reason: String,

    /// The involved accounts in snapshot order
    ///
    /// Empty when no account could be resolved, or when processing failed
    /// before account lookup.
    pub accounts: Vec<SettledAccount>,
}
