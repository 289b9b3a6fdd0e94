//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: snapshot accounts and settled account records
//! - `instruction`: instruction forms and the parsed intermediate shape
//! - `outcome`: the uniform result shape, statuses and status codes
//! - `error`: business rejections and outer-layer input errors

pub mod account;
pub mod error;
pub mod instruction;
pub mod outcome;

pub use account::{Account, SettledAccount};
pub use error::{InputError, Rejection};
pub use instruction::{InstructionType, ParsedInstruction};
pub use outcome::{SettlementOutcome, Status, StatusCode};
