//! Positional grammar matcher
//!
//! Classifies a token sequence as one of the two fixed sentence templates
//! and extracts the raw field substrings, or rejects with one of the three
//! syntax classes:
//!
//! - `SY03` - the opening keyword is unrecognized (or the sentence is empty);
//! - `SY01` - a recognized transfer attempt that is too short;
//! - `SY02` - correct length but a fixed-position keyword is wrong, or the
//!   date-clause marker is not `ON`.
//!
//! Keyword comparison is case-insensitive via the tokens' uppercased view;
//! extracted account ids and dates keep their original spelling apart from
//! one stripped trailing punctuation mark.

use crate::types::{InstructionType, ParsedInstruction, Rejection};

use super::tokenizer::Token;

/// Token count of the form without a date clause
const BARE_LEN: usize = 11;

/// Token count of the form with an `ON <date>` clause
const DATED_LEN: usize = 13;

/// Openers that signal an intentional transfer attempt outside the grammar
///
/// These are classified as missing-keyword (`SY01`) rather than fully
/// malformed (`SY03`).
const INCOMPLETE_OPENERS: [&str; 2] = ["SEND", "TRANSFER"];

/// Fixed keywords of the DEBIT form at their 0-indexed positions
///
/// `DEBIT <amt> <cur> FROM ACCOUNT <debitId> FOR CREDIT TO ACCOUNT <creditId> [ON <date>]`
const DEBIT_KEYWORDS: [(usize, &str); 6] = [
    (3, "FROM"),
    (4, "ACCOUNT"),
    (6, "FOR"),
    (7, "CREDIT"),
    (8, "TO"),
    (9, "ACCOUNT"),
];

/// Fixed keywords of the CREDIT form at their 0-indexed positions
///
/// `CREDIT <amt> <cur> TO ACCOUNT <creditId> FOR DEBIT FROM ACCOUNT <debitId> [ON <date>]`
const CREDIT_KEYWORDS: [(usize, &str); 6] = [
    (3, "TO"),
    (4, "ACCOUNT"),
    (6, "FOR"),
    (7, "DEBIT"),
    (8, "FROM"),
    (9, "ACCOUNT"),
];

/// Strip a single trailing sentence punctuation mark, if present
///
/// Applied to account-id and date tokens only; at most one of `.`, `,`,
/// `!`, `?` is removed.
fn strip_trailing_punctuation(token: &str) -> String {
    match token.strip_suffix(&['.', ',', '!', '?'][..]) {
        Some(stripped) => stripped.to_string(),
        None => token.to_string(),
    }
}

/// Match a token sequence against the two sentence templates
///
/// On success every raw field substring is extracted into a
/// [`ParsedInstruction`]; validation of those substrings happens later in
/// the pipeline.
pub fn match_instruction(tokens: &[Token]) -> Result<ParsedInstruction, Rejection> {
    let opener = match tokens.first() {
        Some(token) => token.upper.as_str(),
        None => return Err(Rejection::UnrecognizedInstruction),
    };

    let instruction_type = match opener {
        "DEBIT" => InstructionType::Debit,
        "CREDIT" => InstructionType::Credit,
        other if INCOMPLETE_OPENERS.contains(&other) => return Err(Rejection::MissingKeyword),
        _ => return Err(Rejection::UnrecognizedInstruction),
    };

    if tokens.len() < BARE_LEN {
        return Err(Rejection::MissingKeyword);
    }
    if tokens.len() != BARE_LEN && tokens.len() != DATED_LEN {
        return Err(Rejection::InvalidKeywordOrder);
    }
    if tokens.len() == DATED_LEN && tokens[11].upper != "ON" {
        return Err(Rejection::InvalidKeywordOrder);
    }

    let keywords = match instruction_type {
        InstructionType::Debit => &DEBIT_KEYWORDS,
        InstructionType::Credit => &CREDIT_KEYWORDS,
    };
    for &(position, expected) in keywords {
        // The count checks above guarantee these positions exist; the
        // lookup is kept fallible as a safety net.
        let token = tokens.get(position).ok_or(Rejection::MissingKeyword)?;
        if token.upper != expected {
            return Err(Rejection::InvalidKeywordOrder);
        }
    }

    // Positions 5 and 10 swap roles between the two forms.
    let (debit_position, credit_position) = match instruction_type {
        InstructionType::Debit => (5, 10),
        InstructionType::Credit => (10, 5),
    };

    let date_token = if tokens.len() == DATED_LEN {
        Some(strip_trailing_punctuation(&tokens[12].text))
    } else {
        None
    };

    Ok(ParsedInstruction {
        instruction_type,
        amount_token: tokens[1].text.clone(),
        currency_token: tokens[2].text.clone(),
        debit_account_id: strip_trailing_punctuation(&tokens[debit_position].text),
        credit_account_id: strip_trailing_punctuation(&tokens[credit_position].text),
        date_token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::tokenize;
    use rstest::rstest;

    fn parse(sentence: &str) -> Result<ParsedInstruction, Rejection> {
        match_instruction(&tokenize(sentence))
    }

    #[test]
    fn test_debit_form_extracts_all_fields() {
        let parsed =
            parse("DEBIT 500 USD FROM ACCOUNT N90394 FOR CREDIT TO ACCOUNT N9122").unwrap();

        assert_eq!(parsed.instruction_type, InstructionType::Debit);
        assert_eq!(parsed.amount_token, "500");
        assert_eq!(parsed.currency_token, "USD");
        assert_eq!(parsed.debit_account_id, "N90394");
        assert_eq!(parsed.credit_account_id, "N9122");
        assert_eq!(parsed.date_token, None);
    }

    #[test]
    fn test_credit_form_swaps_account_positions() {
        let parsed =
            parse("CREDIT 500 USD TO ACCOUNT N9122 FOR DEBIT FROM ACCOUNT N90394").unwrap();

        assert_eq!(parsed.instruction_type, InstructionType::Credit);
        assert_eq!(parsed.debit_account_id, "N90394");
        assert_eq!(parsed.credit_account_id, "N9122");
    }

    #[test]
    fn test_dated_form_extracts_date_token() {
        let parsed =
            parse("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b ON 2027-01-15").unwrap();

        assert_eq!(parsed.date_token.as_deref(), Some("2027-01-15"));
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        let parsed =
            parse("debit 500 usd from account N90394 for credit to account N9122").unwrap();

        assert_eq!(parsed.instruction_type, InstructionType::Debit);
        // Account ids keep original casing.
        assert_eq!(parsed.debit_account_id, "N90394");
    }

    #[rstest]
    #[case::account_period("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b.", "b")]
    #[case::account_comma("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b,", "b")]
    #[case::account_bang("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b!", "b")]
    #[case::account_question("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b?", "b")]
    #[case::only_one_stripped("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b..", "b.")]
    fn test_trailing_punctuation_stripped_from_account_id(
        #[case] sentence: &str,
        #[case] expected_credit: &str,
    ) {
        let parsed = parse(sentence).unwrap();
        assert_eq!(parsed.credit_account_id, expected_credit);
    }

    #[test]
    fn test_trailing_punctuation_stripped_from_date() {
        let parsed =
            parse("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b ON 2027-01-15.").unwrap();
        assert_eq!(parsed.date_token.as_deref(), Some("2027-01-15"));
    }

    #[test]
    fn test_amount_token_keeps_punctuation() {
        // Punctuation stripping applies to account ids and dates only; a
        // trailing mark on the amount is left for the amount validator.
        let parsed = parse("DEBIT 500, USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b").unwrap();
        assert_eq!(parsed.amount_token, "500,");
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    #[case::unknown_opener("PAY 100 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b")]
    #[case::greeting("hello world")]
    fn test_unrecognized_instruction(#[case] sentence: &str) {
        assert_eq!(parse(sentence), Err(Rejection::UnrecognizedInstruction));
    }

    #[rstest]
    #[case::send_opener("SEND 100 USD TO ACCOUNT b")]
    #[case::transfer_opener("TRANSFER 100 USD TO ACCOUNT b")]
    #[case::send_lowercase("send 100 usd to account b")]
    #[case::too_short_debit("DEBIT 500 USD FROM ACCOUNT a")]
    #[case::ten_tokens("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT")]
    fn test_missing_keyword(#[case] sentence: &str) {
        assert_eq!(parse(sentence), Err(Rejection::MissingKeyword));
    }

    #[rstest]
    #[case::twelve_tokens("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b ON")]
    #[case::fourteen_tokens(
        "DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b ON 2027-01-15 extra"
    )]
    #[case::wrong_date_marker("DEBIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b AT 2027-01-15")]
    #[case::debit_with_credit_keywords("DEBIT 500 USD TO ACCOUNT a FOR DEBIT FROM ACCOUNT b")]
    #[case::credit_with_debit_keywords("CREDIT 500 USD FROM ACCOUNT a FOR CREDIT TO ACCOUNT b")]
    #[case::misspelled_keyword("DEBIT 500 USD FROM ACCUONT a FOR CREDIT TO ACCOUNT b")]
    fn test_invalid_keyword_order(#[case] sentence: &str) {
        assert_eq!(parse(sentence), Err(Rejection::InvalidKeywordOrder));
    }
}
