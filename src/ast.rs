//! Data model for revpo statements
//!
//! A statement is one line of input broken into expressions. Each
//! expression is a run of operands terminated by a single operator
//! character: `5 7 +` is one expression, `5 7 + 3 -` is two.

/// One parsed expression: operands in input order plus the operator
/// character that terminated them.
///
/// Operands are fixed at construction. Their order matters for the
/// non-commutative operators (`-`, `/`).
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    operator: char,
    operands: Vec<f64>,
}

impl Expression {
    pub fn new(operator: char, operands: Vec<f64>) -> Self {
        Expression { operator, operands }
    }

    /// The single character naming the operation.
    pub fn operator(&self) -> char {
        self.operator
    }

    /// Operands in the order they appeared in the input. May be empty;
    /// whether that is acceptable is the evaluator's call.
    pub fn operands(&self) -> &[f64] {
        &self.operands
    }
}

/// A full input line's worth of expressions, in left-to-right textual
/// order. May be empty when the line held no expression at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub expressions: Vec<Expression>,
}

impl Statement {
    pub fn new(expressions: Vec<Expression>) -> Self {
        Statement { expressions }
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}
