//! Field validators
//!
//! Independent validation of the raw substrings extracted by the grammar
//! matcher. The checks run in a fixed precedence order and the first failure
//! wins:
//!
//! 1. decimal amount (`AM02`)
//! 2. non-positive-integer amount (`AM01`)
//! 3. unsupported currency (`CU02`)
//! 4. account-id character set (`AC04`)
//!
//! Date syntax (`DT01`) is validated later, inside the resolver, because it
//! runs after the account checks.
//!
//! Character classes are written out as explicit predicates in keeping with
//! the tokenizer; the accepted sets are exact, not approximations.

use chrono::NaiveDate;

use crate::types::Rejection;

/// The closed set of supported currency codes
pub const SUPPORTED_CURRENCIES: [&str; 4] = ["NGN", "USD", "GBP", "GHS"];

/// Characters permitted in an account id
fn is_account_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '@')
}

/// A non-empty run of ASCII digits, nothing else (no sign, no separators)
fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// Validate the amount substring into a positive whole number
///
/// The decimal check deliberately precedes the integer check, but only for
/// amounts that parse to a finite value greater than zero: `"100.50"` is
/// `AM02` while `"-100.50"` falls through to `AM01` because negativity
/// disqualifies the decimal-amount path.
pub fn validate_amount(token: &str) -> Result<i64, Rejection> {
    if token.contains('.') {
        if let Ok(value) = token.parse::<f64>() {
            if value.is_finite() && value > 0.0 {
                return Err(Rejection::decimal_amount(token));
            }
        }
    }

    if !is_digit_string(token) {
        return Err(Rejection::invalid_amount(token));
    }
    let amount: i64 = token
        .parse()
        .map_err(|_| Rejection::invalid_amount(token))?;
    if amount <= 0 {
        return Err(Rejection::invalid_amount(token));
    }

    Ok(amount)
}

/// Validate the currency substring against the supported set
///
/// Comparison is case-insensitive; the returned code is uppercased.
pub fn validate_currency(token: &str) -> Result<String, Rejection> {
    let upper = token.to_uppercase();
    if SUPPORTED_CURRENCIES.contains(&upper.as_str()) {
        Ok(upper)
    } else {
        Err(Rejection::unsupported_currency(token))
    }
}

/// Validate both account-id substrings
///
/// Ids may only contain ASCII letters, ASCII digits, `-`, `.` or `@` and
/// must be non-empty. Any violation rejects both ids together under one
/// code.
pub fn validate_account_ids(debit: &str, credit: &str) -> Result<(), Rejection> {
    let well_formed = |id: &str| !id.is_empty() && id.chars().all(is_account_id_char);
    if well_formed(debit) && well_formed(credit) {
        Ok(())
    } else {
        Err(Rejection::invalid_account_id(debit, credit))
    }
}

/// Gregorian leap-year rule
fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Validate strict `YYYY-MM-DD` calendar-date syntax
///
/// Exactly 4 digits, `-`, 2 digits, `-`, 2 digits; month 1-12; day within
/// the month's length under the Gregorian leap-year rule. The syntax check
/// is hand-rolled; chrono is only used to carry the validated date to the
/// pending/immediate comparison.
pub fn validate_date(token: &str) -> Result<NaiveDate, Rejection> {
    let bytes = token.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes[0..4].iter().all(u8::is_ascii_digit)
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[8..10].iter().all(u8::is_ascii_digit);
    if !shape_ok {
        return Err(Rejection::invalid_date(token));
    }

    // The digit checks above make these slices pure ASCII digits.
    let year: i32 = token[0..4].parse().map_err(|_| Rejection::invalid_date(token))?;
    let month: u32 = token[5..7].parse().map_err(|_| Rejection::invalid_date(token))?;
    let day: u32 = token[8..10].parse().map_err(|_| Rejection::invalid_date(token))?;

    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return Err(Rejection::invalid_date(token));
    }

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| Rejection::invalid_date(token))
}
