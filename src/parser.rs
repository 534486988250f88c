//! Statement splitter for revpo
//!
//! Walks the token stream left to right, gathering operand candidates
//! until an operator token closes them off as one expression. The
//! splitter is purely syntactic: which operators exist and how many
//! operands they need is the evaluator's business.

use crate::ast::{Expression, Statement};
use crate::lexer::{Token, TokenKind};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Operand at position {position} is not a valid number")]
    BadOperand { position: usize },
}

/// Split tokens into a statement.
///
/// Operand tokens accumulate until an operator token turns them into an
/// `Expression`; each operand text must then parse as an `f64` or the
/// whole statement aborts with the failing token's position. Trailing
/// operands never claimed by an operator are dropped silently, and a
/// token stream with no operator at all yields an empty statement.
pub fn parse(tokens: Vec<Token>) -> Result<Statement, ParseError> {
    let mut expressions = Vec::new();
    let mut pending: Vec<(String, usize)> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Operand(text) => pending.push((text, token.position)),
            TokenKind::Operator(operator) => {
                let mut operands = Vec::with_capacity(pending.len());
                for (text, position) in pending.drain(..) {
                    let value: f64 = text
                        .parse()
                        .map_err(|_| ParseError::BadOperand { position })?;
                    operands.push(value);
                }
                expressions.push(Expression::new(operator, operands));
            }
        }
    }

    Ok(Statement::new(expressions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;

    fn parse_str(input: &str) -> Result<Statement, ParseError> {
        parse(lex(input))
    }

    #[test]
    fn parse_single_expression() {
        let statement = parse_str("5 7 +").unwrap();
        assert_eq!(
            statement.expressions,
            vec![Expression::new('+', vec![5.0, 7.0])]
        );
    }

    #[test]
    fn parse_chained_expressions() {
        let statement = parse_str("5 7 + 3 -").unwrap();
        assert_eq!(
            statement.expressions,
            vec![
                Expression::new('+', vec![5.0, 7.0]),
                Expression::new('-', vec![3.0]),
            ]
        );
    }

    #[test]
    fn parse_operator_without_operands() {
        let statement = parse_str("+").unwrap();
        assert_eq!(statement.expressions, vec![Expression::new('+', vec![])]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse_str("").unwrap().is_empty());
    }

    #[test]
    fn parse_scientific_notation() {
        let statement = parse_str("1e3 2.5e-1 +").unwrap();
        assert_eq!(
            statement.expressions,
            vec![Expression::new('+', vec![1000.0, 0.25])]
        );
    }

    #[test]
    fn bad_operand_reports_position() {
        let err = parse_str("3 a +").unwrap_err();
        assert_eq!(err, ParseError::BadOperand { position: 2 });
    }

    #[test]
    fn bad_operand_aborts_later_expressions_too() {
        // The malformed token sits in the second expression, but the
        // whole statement is rejected.
        let err = parse_str("5 7 + 3 x -").unwrap_err();
        assert_eq!(err, ParseError::BadOperand { position: 8 });
    }

    #[test]
    fn bad_operand_position_counts_characters() {
        // '°' is two bytes; the reported position still matches what
        // the user sees.
        let err = parse_str("3 ° a +").unwrap_err();
        assert_eq!(err, ParseError::BadOperand { position: 4 });
    }

    #[test]
    fn trailing_operands_are_dropped() {
        let statement = parse_str("5 7 + 3").unwrap();
        assert_eq!(
            statement.expressions,
            vec![Expression::new('+', vec![5.0, 7.0])]
        );
    }

    #[test]
    fn trailing_junk_is_dropped() {
        // Unclaimed malformed tokens are never even validated.
        let statement = parse_str("5 7 + junk").unwrap();
        assert_eq!(statement.expressions.len(), 1);
    }

    #[test]
    fn reparsing_is_idempotent() {
        let first = parse_str("5 7 + 3 -").unwrap();
        let second = parse_str("5 7 + 3 -").unwrap();
        assert_eq!(first, second);
    }
}
