//! # shunt
//!
//! shunt is an embeddable arithmetic expression evaluator written in Rust.
//! It tokenizes an expression and evaluates it in a single operator-precedence
//! pass, with support for variables, function calls, vectors and approximate
//! equality.
//!
//! ```
//! use shunt::{Environment, Value, evaluate};
//!
//! let env = Environment::new().with_builtins().with_variable("x", 2.0);
//!
//! assert_eq!(evaluate("2^3^2", &env).unwrap(), Value::Scalar(512.0));
//! assert_eq!(evaluate("max([1, 5], x) * 2", &env).unwrap(), Value::Scalar(10.0));
//! assert_eq!(evaluate("[1, 2] - x", &env).unwrap(), Value::from([-1.0, 0.0]));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

/// Provides unified error types for tokenizing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing or
/// evaluating an expression. Every error carries the byte offset where it was
/// detected, and can be rendered with a caret pointing into the source.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, evaluator).
/// - Attaches source offsets and detailed messages for context.
/// - Renders caret diagnostics for user feedback.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together the lexer, operator table, evaluator, value
/// representation and environment.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, evaluator, and value types.
/// - Provides entry points for tokenizing and evaluating expressions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::{Error, EvalError, ParseError};
pub use interpreter::{
    environment::Environment,
    evaluator::{
        core::evaluate_tokens,
        function::core::{Arity, Function},
    },
    lexer::{Token, TokenKind, tokenize},
    value::core::Value,
};

/// Tokenizes and evaluates `source` against `env`.
///
/// Only names bound in `env` are accepted by the tokenizer. Evaluation is
/// stateless: `env` is never modified, and evaluating the same source twice
/// gives the same result.
///
/// # Errors
/// Returns [`Error::Parse`] for lexical problems and [`Error::Eval`] for
/// structural or semantic ones. Both carry the offset of the problem.
///
/// # Examples
/// ```
/// use shunt::{Environment, Value, evaluate};
///
/// let env = Environment::new().with_variable("x", 666.0);
///
/// assert_eq!(evaluate("x + 1", &env).unwrap(), Value::Scalar(667.0));
/// assert_eq!(evaluate("-2^2", &env).unwrap(), Value::Scalar(-4.0));
///
/// // `y` is not defined.
/// assert!(evaluate("y + 1", &env).is_err());
/// ```
pub fn evaluate(source: &str, env: &Environment) -> Result<Value, Error> {
    debug!("evaluating {source:?}");

    let result = tokenize(source, &env.identifiers()).map_err(Error::from)
                                                     .and_then(|tokens| {
                                                         evaluate_tokens(&tokens, env).map_err(Error::from)
                                                     });

    if let Err(e) = &result {
        debug!("evaluation of {source:?} failed: {e}");
    }

    result
}
