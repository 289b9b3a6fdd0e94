//! JSON request decoding and outcome encoding
//!
//! The wire format is a single JSON document per call:
//!
//! ```json
//! {
//!   "accounts": [{"id": "N90394", "balance": 1000, "currency": "USD"}],
//!   "instruction": "DEBIT 500 USD FROM ACCOUNT N90394 FOR CREDIT TO ACCOUNT N9122"
//! }
//! ```
//!
//! Decoding is split across two layers. Syntactically invalid JSON is an
//! [`InputError`] raised before the engine runs. Structurally valid JSON
//! with the wrong shape is decoded here via [`decode_request`] and becomes
//! an `SY03` rejection, because the engine defends against malformed input
//! independently of any upstream screening.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::types::{Account, InputError, Rejection, SettlementOutcome};

/// Decode the `{accounts, instruction}` shape from a parsed JSON value
///
/// Shape violations map to `SY03` via [`Rejection::InvalidRequestShape`]:
/// a non-object root, a missing or non-array `accounts`, a missing or
/// non-string `instruction`, or any account element that is not
/// `{id: string, balance: integer, currency: string}`.
pub fn decode_request(request: &Value) -> Result<(Vec<Account>, String), Rejection> {
    let object = request
        .as_object()
        .ok_or_else(|| Rejection::invalid_request_shape("request body must be a JSON object"))?;

    let accounts_value = object
        .get("accounts")
        .and_then(Value::as_array)
        .ok_or_else(|| Rejection::invalid_request_shape("'accounts' must be an array"))?;

    let instruction = object
        .get("instruction")
        .and_then(Value::as_str)
        .ok_or_else(|| Rejection::invalid_request_shape("'instruction' must be a string"))?;

    let accounts = accounts_value
        .iter()
        .map(decode_account)
        .collect::<Result<Vec<Account>, Rejection>>()?;

    Ok((accounts, instruction.to_string()))
}

fn decode_account(value: &Value) -> Result<Account, Rejection> {
    let bad_shape = || {
        Rejection::invalid_request_shape(
            "each account must have a string 'id', an integer-valued 'balance' and a string 'currency'",
        )
    };

    let object = value.as_object().ok_or_else(bad_shape)?;
    let id = object.get("id").and_then(Value::as_str).ok_or_else(bad_shape)?;
    let currency = object
        .get("currency")
        .and_then(Value::as_str)
        .ok_or_else(bad_shape)?;
    let balance = object
        .get("balance")
        .and_then(decode_balance)
        .ok_or_else(bad_shape)?;

    Ok(Account {
        id: id.to_string(),
        balance,
        currency: currency.to_string(),
    })
}

/// Decode an integer-valued balance
///
/// The domain holds whole units, but JSON serializers commonly emit whole
/// numbers with a float spelling, so an integral float like `1000.0` is
/// accepted alongside a plain integer. Fractional or out-of-range values
/// are shape violations.
fn decode_balance(value: &Value) -> Option<i64> {
    if let Some(balance) = value.as_i64() {
        return Some(balance);
    }
    let float = value.as_f64()?;
    if float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}

/// Read and parse a request document from a file
pub fn read_request_value(path: &Path) -> Result<Value, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Read and parse a request document from an arbitrary reader (e.g. stdin)
pub fn read_request_from<R: Read>(mut reader: R) -> Result<Value, InputError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize an outcome as JSON followed by a newline
///
/// With `pretty` the document is indented for human consumption; otherwise
/// it is a single compact line.
pub fn write_outcome_json<W: Write>(
    writer: &mut W,
    outcome: &SettlementOutcome,
    pretty: bool,
) -> Result<(), InputError> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, outcome)?;
    } else {
        serde_json::to_writer(&mut *writer, outcome)?;
    }
    writeln!(writer)?;
    Ok(())
}
