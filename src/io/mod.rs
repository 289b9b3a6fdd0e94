//! I/O module
//!
//! JSON decoding of the request document and encoding of the settlement
//! outcome, plus the file/stream readers the CLI uses.

pub mod json_format;

pub use json_format::{decode_request, read_request_from, read_request_value, write_outcome_json};
