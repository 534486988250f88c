//! revpo - a Reverse Polish notation calculator
//!
//! # Overview
//!
//! revpo evaluates arithmetic written in Reverse Polish notation, where
//! operators follow their operands:
//!
//! ```text
//! 5 7 +        # 12: add 5 and 7
//! 5 7 + 3 -    # 9: the running answer seeds the next operator
//! 10 5 2 /     # 1: division folds left to right (10 / 5 / 2)
//! ```
//!
//! A line is tokenized into expressions (operands terminated by one
//! operator character) and the expressions fold left to right through a
//! [`Registry`] of operator evaluators. Each expression's answer
//! becomes the seed of the next, so a statement reads as a chain of
//! adjustments to a running result.
//!
//! # Example
//!
//! ```rust
//! use revpo::{evaluate, Registry};
//!
//! let registry = Registry::new();
//! let answer = evaluate("5 7 + 3 -", &registry).unwrap();
//! assert_eq!(answer, Some(9.0));
//! ```

pub mod ast;
pub mod eval;
pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use ast::{Expression, Statement};
pub use eval::{EvalError, Registry};
pub use lexer::{lex, Token, TokenKind};
pub use parser::{parse, ParseError};

use thiserror::Error;

/// Any error a single statement can produce. Errors are local to the
/// statement: the registry is untouched and the next line starts fresh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Convenience function to parse and evaluate one line against a
/// registry. Returns `Ok(None)` when the line holds no expression.
pub fn evaluate(input: &str, registry: &Registry) -> Result<Option<f64>, CalcError> {
    let statement = parse(lex(input))?;
    Ok(registry.eval(&statement)?)
}
