//! Payment Instruction Engine Library
//! # Overview
//!
//! This library converts a free-text "payment instruction" sentence plus a
//! snapshot of account balances into either a validated, applied ledger
//! transaction or a precise rejection with a stable status code.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, SettlementOutcome, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components, forming a strict left-to-right
//!   pipeline where each stage short-circuits on failure:
//!   - [`core::tokenizer`] - whitespace normalization and token splitting
//!   - [`core::grammar`] - the two-form positional sentence matcher
//!   - [`core::validate`] - ordered field validators
//!   - [`core::resolver`] - account lookup, invariants, settlement timing
//!   - [`core::settlement`] - balance application and outcome assembly
//!   - [`core::engine`] - pipeline orchestration
//! - [`io`] - JSON request decoding and outcome encoding
//!
//! # Instruction Grammar
//!
//! Two rigid sentence templates are recognized (keywords case-insensitive,
//! the date clause optional):
//!
//! ```text
//! DEBIT  <amt> <cur> FROM ACCOUNT <debitId>  FOR CREDIT TO   ACCOUNT <creditId> [ON <date>]
//! CREDIT <amt> <cur> TO   ACCOUNT <creditId> FOR DEBIT  FROM ACCOUNT <debitId>  [ON <date>]
//! ```
//!
//! Anything outside these templates is a syntax error, not a best-effort
//! interpretation.
//!
//! # Outcomes
//!
//! Every call produces the same uniform result shape. `AP00` marks an
//! immediate settlement (balances moved), `AP01` a validated but
//! future-dated one (balances untouched), and the remaining codes classify
//! the failure: syntax (`SY01`-`SY03`), amount (`AM01`, `AM02`), currency
//! (`CU01`, `CU02`), accounts (`AC01`-`AC04`) and date (`DT01`).
//!
//! The engine is a pure, synchronous function of its inputs plus an
//! injected clock; it retains no state between calls and never panics for
//! any reachable input.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use core::{Clock, FixedClock, SettlementEngine, SystemClock};
pub use io::write_outcome_json;
pub use types::{
    Account, InputError, InstructionType, Rejection, SettledAccount, SettlementOutcome, Status,
    StatusCode,
};
