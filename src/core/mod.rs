//! Core business logic module
//!
//! This module contains the instruction processing pipeline, strictly
//! left-to-right with each stage short-circuiting on failure:
//!
//! - `tokenizer` - whitespace normalization and token splitting
//! - `grammar` - the two-form positional sentence matcher
//! - `validate` - field validators with their fixed precedence order
//! - `resolver` - account lookup, invariant checks, settlement timing
//! - `settlement` - balance application and outcome assembly
//! - `engine` - pipeline orchestration
//! - `clock` - the injected "today" reference

pub mod clock;
pub mod engine;
pub mod grammar;
pub mod resolver;
pub mod settlement;
pub mod tokenizer;
pub mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::SettlementEngine;
