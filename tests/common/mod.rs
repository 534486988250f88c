//! Common test utilities for revpo integration tests

pub use revpo::{evaluate, lex, parse, Registry};

/// Helper to evaluate one statement against the default registry.
pub fn eval(input: &str) -> Result<Option<f64>, String> {
    let registry = Registry::new();
    evaluate(input, &registry).map_err(|e| e.to_string())
}

/// Helper that expects a numeric answer.
#[allow(dead_code)]
pub fn eval_answer(input: &str) -> f64 {
    eval(input)
        .expect("statement failed")
        .expect("statement had no answer")
}
