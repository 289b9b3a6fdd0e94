//! Instruction normalizer and tokenizer
//!
//! Splits the free-text instruction sentence into whitespace-delimited
//! tokens. Leading/trailing whitespace is dropped and any internal run of
//! whitespace collapses to a single separator. No other transformation
//! (case, punctuation) happens here.
//!
//! The whitespace classification is written out by hand rather than going
//! through a pattern-matching library; the accepted set is exactly space,
//! tab, newline, carriage return, form feed and vertical tab.

/// A whitespace-delimited unit of the instruction sentence
///
/// Carries the original spelling plus a parallel uppercased view. The
/// uppercased view is used only for keyword, type and currency comparison,
/// never for account ids, which are matched with their original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Original spelling, casing preserved
    pub text: String,

    /// Uppercased view for case-insensitive keyword comparison
    pub upper: String,
}

impl Token {
    fn new(text: String) -> Self {
        let upper = text.to_uppercase();
        Token { text, upper }
    }
}

/// Whitespace set recognized by the normalizer
fn is_instruction_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\u{000C}' | '\u{000B}')
}

/// Split an instruction sentence into tokens
///
/// Empty or whitespace-only input yields an empty sequence. Tokens are
/// maximal runs of non-whitespace characters and are never empty.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if is_instruction_whitespace(c) {
            if !current.is_empty() {
                tokens.push(Token::new(std::mem::take(&mut current)));
            }
        } else {
            current.push(c);
        }
    }
    if !current.is_empty() {
        tokens.push(Token::new(current));
    }

    tokens
}
