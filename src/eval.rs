//! Operator evaluators and the fold loop
//!
//! A statement evaluates by folding its expressions left to right. The
//! running answer ("seed") of one expression feeds the next, so
//! `5 7 + 3 -` computes `(5 + 7) - 3`. Operators are looked up in a
//! [`Registry`], a keyed table of evaluator functions that callers can
//! extend or replace wholesale.

use crate::ast::{Expression, Statement};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(char),
    #[error("Operator '{operator}' requires at least one operand")]
    MissingOperand { operator: char },
}

/// An operator evaluator: combines an expression's operands with the
/// seed carried over from earlier expressions in the statement. A seed
/// of `None` marks the first expression of a statement.
pub type Evaluator = Box<dyn Fn(&Expression, Option<f64>) -> Result<f64, EvalError>>;

/// Keyed table of operator evaluators, plus the fold loop that drives
/// them over a statement.
pub struct Registry {
    evaluators: HashMap<char, Evaluator>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// The built-in operator set: `+`, `-`, `*` and `/`.
    ///
    /// All arithmetic is IEEE-754 `f64`; division by zero yields
    /// infinity or NaN rather than an error. `-` and `/` reject an
    /// empty operand list, while `+` and `*` fall back to their
    /// identities.
    pub fn new() -> Self {
        let mut registry = Registry::empty();

        registry.register('+', |expr, seed| {
            Ok(seed.unwrap_or(0.0) + expr.operands().iter().sum::<f64>())
        });

        registry.register('-', |expr, seed| {
            let (first, rest) = expr
                .operands()
                .split_first()
                .ok_or(EvalError::MissingOperand { operator: '-' })?;
            Ok(seed.unwrap_or(0.0) - first - rest.iter().sum::<f64>())
        });

        registry.register('*', |expr, seed| {
            Ok(seed.unwrap_or(1.0) * expr.operands().iter().product::<f64>())
        });

        registry.register('/', |expr, seed| {
            let folded = expr
                .operands()
                .iter()
                .copied()
                .reduce(|quotient, next| quotient / next)
                .ok_or(EvalError::MissingOperand { operator: '/' })?;
            Ok(match seed {
                Some(seed) => seed / folded,
                None => folded,
            })
        });

        registry
    }

    /// A registry with no operators at all.
    pub fn empty() -> Self {
        Registry {
            evaluators: HashMap::new(),
        }
    }

    /// Register an evaluator for an operator character, replacing any
    /// existing one.
    pub fn register<F>(&mut self, operator: char, evaluator: F)
    where
        F: Fn(&Expression, Option<f64>) -> Result<f64, EvalError> + 'static,
    {
        self.evaluators.insert(operator, Box::new(evaluator));
    }

    /// Registered operator characters, sorted for stable help output.
    pub fn operators(&self) -> Vec<char> {
        let mut operators: Vec<char> = self.evaluators.keys().copied().collect();
        operators.sort_unstable();
        operators
    }

    /// Fold a statement's expressions into one result.
    ///
    /// The seed starts absent and each expression's answer becomes the
    /// next expression's seed. An unknown operator or an evaluator
    /// failure aborts the statement, discarding any partial seed. A
    /// statement with no expressions yields `Ok(None)`.
    pub fn eval(&self, statement: &Statement) -> Result<Option<f64>, EvalError> {
        let mut seed = None;

        for expression in &statement.expressions {
            let evaluator = self
                .evaluators
                .get(&expression.operator())
                .ok_or(EvalError::UnknownOperator(expression.operator()))?;
            seed = Some(evaluator(expression, seed)?);
        }

        Ok(seed)
    }
}
