//! Instruction-related types for the Payment Instruction Engine
//!
//! This module defines the two instruction forms recognized by the grammar
//! and the intermediate representation produced by a successful match.

use serde::{Deserialize, Serialize};

/// The two sentence forms the grammar recognizes
///
/// Each variant corresponds to one fixed positional template; the opening
/// keyword of the sentence selects the form. Both forms describe the same
/// transfer (funds move from the debit account to the credit account), they
/// only differ in which account the sentence leads with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InstructionType {
    /// `DEBIT <amt> <cur> FROM ACCOUNT <debitId> FOR CREDIT TO ACCOUNT <creditId> [ON <date>]`
    Debit,

    /// `CREDIT <amt> <cur> TO ACCOUNT <creditId> FOR DEBIT FROM ACCOUNT <debitId> [ON <date>]`
    Credit,
}

/// Raw fields extracted by the grammar matcher, prior to validation
///
/// All fields are unvalidated substrings of the original sentence. Account-id
/// and date tokens have had a single trailing punctuation mark (`.`, `,`,
/// `!`, `?`) stripped; everything else retains its original spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction {
    /// Which of the two templates matched
    pub instruction_type: InstructionType,

    /// The amount substring (token 1), not yet checked for being a
    /// positive whole number
    pub amount_token: String,

    /// The currency substring (token 2), not yet checked against the
    /// supported set
    pub currency_token: String,

    /// The account to debit, original casing preserved
    pub debit_account_id: String,

    /// The account to credit, original casing preserved
    pub credit_account_id: String,

    /// The execution-date substring (token 12), present only in the
    /// 13-token form
    pub date_token: Option<String>,
}
