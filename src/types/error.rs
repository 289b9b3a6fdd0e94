//! Error types for the Payment Instruction Engine
//!
//! This module defines the two error layers of the system:
//!
//! - [`Rejection`] - the closed set of business failure classes. A rejection
//!   is not an error in the `Result::Err`-propagation sense at the public
//!   boundary: the engine folds every rejection into a fully-formed
//!   [`SettlementOutcome`](super::SettlementOutcome) carrying the matching
//!   status code. Internally the pipeline stages return
//!   `Result<_, Rejection>` and short-circuit with `?`.
//! - [`InputError`] - outer-layer failures (file not found, I/O, JSON
//!   syntax) raised by the CLI and io helpers before the engine runs.
//!
//! The `Display` text of a `Rejection` is the `status_reason` surfaced to
//! consumers; [`Rejection::code`] yields the stable `status_code`.

use thiserror::Error;

use super::outcome::StatusCode;

/// A business rejection, one variant per failure status code
///
/// Each variant carries the context its human-readable reason needs. The
/// engine never panics for any reachable input; every rejection becomes a
/// uniform outcome with `status = "failed"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The opening keyword was not recognized at all, or the sentence has
    /// no tokens (`SY03`)
    #[error("Instruction is malformed or could not be recognized")]
    UnrecognizedInstruction,

    /// The transport payload did not have the `{accounts, instruction}`
    /// shape (`SY03`)
    ///
    /// The request layer normally screens for this, but the engine defends
    /// against malformed input independently.
    #[error("Request shape is invalid: {detail}")]
    InvalidRequestShape {
        /// What was wrong with the shape
        detail: String,
    },

    /// A recognized transfer attempt that is too short or missing a
    /// required positional token (`SY01`)
    #[error("Instruction is missing one or more required keywords")]
    MissingKeyword,

    /// Correct token count but a fixed-position keyword does not match,
    /// or the date-clause marker is malformed (`SY02`)
    #[error("Instruction keywords are present but in an invalid order")]
    InvalidKeywordOrder,

    /// Amount is a syntactically valid positive decimal; only whole units
    /// are accepted (`AM02`)
    #[error("Amount '{amount}' must be a whole number")]
    DecimalAmount {
        /// The offending amount substring
        amount: String,
    },

    /// Amount is not a positive whole-number string (`AM01`)
    #[error("Amount '{amount}' must be a positive integer")]
    InvalidAmount {
        /// The offending amount substring
        amount: String,
    },

    /// Currency is not in the supported set (`CU02`)
    #[error("Currency '{currency}' is not supported; valid currencies are NGN, USD, GBP, GHS")]
    UnsupportedCurrency {
        /// The offending currency substring
        currency: String,
    },

    /// One of the account ids contains disallowed characters (`AC04`)
    ///
    /// Both ids are rejected together under one code.
    #[error("Account ids '{debit}' and '{credit}' may only contain letters, digits, '-', '.' or '@'")]
    InvalidAccountId {
        /// The debit account id as extracted
        debit: String,
        /// The credit account id as extracted
        credit: String,
    },

    /// The debit or credit account is absent from the snapshot (`AC03`)
    #[error("Account '{id}' was not found in the provided snapshot")]
    AccountNotFound {
        /// The first missing id, debit checked before credit
        id: String,
    },

    /// The two accounts and the instruction do not agree on currency (`CU01`)
    #[error("Currency mismatch: instruction is {instruction}, debit account is {debit}, credit account is {credit}")]
    CurrencyMismatch {
        /// Currency stated in the instruction, uppercased
        instruction: String,
        /// Debit account currency, uppercased
        debit: String,
        /// Credit account currency, uppercased
        credit: String,
    },

    /// Debit and credit account ids are identical (`AC02`)
    #[error("Debit and credit account must differ; both are '{id}'")]
    SameAccount {
        /// The shared account id
        id: String,
    },

    /// The debit account's current balance does not cover the amount (`AC01`)
    #[error("Insufficient funds in account '{id}': balance {balance}, required {amount} (short by {})", amount.saturating_sub(*balance))]
    InsufficientFunds {
        /// The debit account id
        id: String,
        /// Current balance of the debit account
        balance: i64,
        /// Amount the instruction requires
        amount: i64,
    },

    /// The date clause is present but not a valid `YYYY-MM-DD` calendar
    /// date (`DT01`)
    #[error("Execution date '{date}' is not a valid calendar date (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The offending date substring
        date: String,
    },
}

impl Rejection {
    /// The stable status code this rejection surfaces as
    pub fn code(&self) -> StatusCode {
        match self {
            Rejection::UnrecognizedInstruction | Rejection::InvalidRequestShape { .. } => {
                StatusCode::Sy03
            }
            Rejection::MissingKeyword => StatusCode::Sy01,
            Rejection::InvalidKeywordOrder => StatusCode::Sy02,
            Rejection::DecimalAmount { .. } => StatusCode::Am02,
            Rejection::InvalidAmount { .. } => StatusCode::Am01,
            Rejection::UnsupportedCurrency { .. } => StatusCode::Cu02,
            Rejection::InvalidAccountId { .. } => StatusCode::Ac04,
            Rejection::AccountNotFound { .. } => StatusCode::Ac03,
            Rejection::CurrencyMismatch { .. } => StatusCode::Cu01,
            Rejection::SameAccount { .. } => StatusCode::Ac02,
            Rejection::InsufficientFunds { .. } => StatusCode::Ac01,
            Rejection::InvalidDate { .. } => StatusCode::Dt01,
        }
    }

    /// Create an InvalidRequestShape rejection
    pub fn invalid_request_shape(detail: &str) -> Self {
        Rejection::InvalidRequestShape {
            detail: detail.to_string(),
        }
    }

    /// Create a DecimalAmount rejection
    pub fn decimal_amount(amount: &str) -> Self {
        Rejection::DecimalAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InvalidAmount rejection
    pub fn invalid_amount(amount: &str) -> Self {
        Rejection::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an UnsupportedCurrency rejection
    pub fn unsupported_currency(currency: &str) -> Self {
        Rejection::UnsupportedCurrency {
            currency: currency.to_string(),
        }
    }

    /// Create an InvalidAccountId rejection
    pub fn invalid_account_id(debit: &str, credit: &str) -> Self {
        Rejection::InvalidAccountId {
            debit: debit.to_string(),
            credit: credit.to_string(),
        }
    }

    /// Create an AccountNotFound rejection
    pub fn account_not_found(id: &str) -> Self {
        Rejection::AccountNotFound { id: id.to_string() }
    }

    /// Create a CurrencyMismatch rejection
    pub fn currency_mismatch(instruction: &str, debit: &str, credit: &str) -> Self {
        Rejection::CurrencyMismatch {
            instruction: instruction.to_string(),
            debit: debit.to_string(),
            credit: credit.to_string(),
        }
    }

    /// Create a SameAccount rejection
    pub fn same_account(id: &str) -> Self {
        Rejection::SameAccount { id: id.to_string() }
    }

    /// Create an InsufficientFunds rejection
    pub fn insufficient_funds(id: &str, balance: i64, amount: i64) -> Self {
        Rejection::InsufficientFunds {
            id: id.to_string(),
            balance,
            amount,
        }
    }

    /// Create an InvalidDate rejection
    pub fn invalid_date(date: &str) -> Self {
        Rejection::InvalidDate {
            date: date.to_string(),
        }
    }
}

/// Outer-layer input failure
///
/// Raised only by the CLI and io helpers, never by the engine itself; the
/// engine maps every reachable input to an outcome instead. The CLI reports
/// these on stderr and exits with code 1.
#[derive(Debug, Error)]
pub enum InputError {
    /// Request file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading the request or writing the outcome
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Request payload is not syntactically valid JSON
    ///
    /// Structurally valid JSON with the wrong shape is not an input error;
    /// the engine turns it into an `SY03` outcome.
    #[error("Request is not valid JSON: {message}")]
    Json {
        /// Description of the JSON syntax error
        message: String,
    },
}

impl From<std::io::Error> for InputError {
    fn from(error: std::io::Error) -> Self {
        InputError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for InputError {
    fn from(error: serde_json::Error) -> Self {
        InputError::Json {
            message: error.to_string(),
        }
    }
}
