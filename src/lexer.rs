//! Tokenization for revpo
//!
//! A line is split into whitespace-delimited runs. A run that is a
//! single non-alphanumeric character is an operator token; every other
//! run is an operand candidate whose text the parser validates as a
//! number. Tokens carry their character position in the original line
//! so a malformed operand can be reported exactly where the user sees
//! it, even past multibyte input.
//!
//! The lexer itself never fails: stray text becomes an operand
//! candidate and is judged later, or dropped by the splitter if no
//! operator ever claims it.

use nom::{
    bytes::complete::take_while1, character::complete::multispace0, sequence::preceded, IResult,
    Offset,
};

/// Kinds of token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric candidate, validated by the parser.
    Operand(String),
    /// A single character terminating an expression (`+`, `/`, `%`, ...).
    Operator(char),
}

/// A token plus the zero-based character position of its first
/// character in the input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Parse one whitespace-delimited run.
fn run(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace())(input)
}

/// Classify a run. A lone character that is neither alphanumeric nor a
/// dot is an operator; everything else is an operand candidate. The
/// split keeps `%` an (unknown) operator while `a` stays a malformed
/// operand, and leaves `-3`, `.5` and `1e3` as numbers.
fn classify(text: &str) -> TokenKind {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_alphanumeric() && c != '.' => TokenKind::Operator(c),
        _ => TokenKind::Operand(text.to_string()),
    }
}

/// Tokenize a complete input line. Any string is accepted, including
/// the empty one.
pub fn lex(input: &str) -> Vec<Token> {
    let mut token = preceded(multispace0, run);
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Ok((next, text)) = token(rest) {
        // Positions count characters, not bytes.
        let position = input[..input.offset(text)].chars().count();
        tokens.push(Token {
            kind: classify(text),
            position,
        });
        rest = next;
    }

    tokens
}
