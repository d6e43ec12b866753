//! # intexpr
//!
//! intexpr parses and evaluates small integer expressions with Go-style
//! operators: arithmetic, bitwise, shifts, comparisons and logical
//! connectives. Comparisons and logical operators yield `1` or `0`; there is
//! no separate boolean type.
//!
//! An expression is parsed once into an immutable [`Expr`] tree and can then
//! be evaluated any number of times against different [`Bindings`]. Runtime
//! errors are either returned ([`ErrorMode::ReturnError`]) or replaced by
//! zero where they occur ([`ErrorMode::ReturnZero`]).
//!
//! ```
//! use intexpr::{ErrorMode, parse};
//!
//! let expr = parse("x > y || y == x").unwrap();
//! assert_eq!(expr.to_string(), "((x > y) || (y == x))");
//! assert_eq!(expr.eval(&[("x", 4_i64), ("y", 4)], ErrorMode::ReturnZero), Ok(1));
//! ```
//!
//! Parsing and evaluation both recurse once per nesting level of the input,
//! so extremely deep nesting can exhaust the stack.

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

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator enums that represent
/// an expression as a tree. The AST is built by the parser, rendered by its
/// `Display` implementation, and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the four node shapes: number, identifier, unary, binary.
/// - Defines every unary and binary operator with its source spelling.
/// - Renders trees in canonical fully parenthesized form.
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// # Responsibilities
/// - Defines one error enum per phase plus a crate-level [`Error`].
/// - Keeps the exact user-facing messages, e.g. `division by zero`.
/// - Carries the unconsumed input of failed parses for diagnostics.
pub mod error;
/// Ties the lexer, parser and evaluator together.
///
/// Exposes the pieces of the engine individually for callers that need more
/// control than [`parse`] and [`Expr::eval`] give.
pub mod interpreter;
/// Integer helpers shared by the evaluator.
pub mod util;

pub use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::{
            bindings::Bindings,
            core::{Context, ErrorMode},
        },
        parser::core::parse,
    },
};

/// Parses `source` and evaluates it in one step.
///
/// Use [`parse`] and [`Expr::eval`] separately to evaluate one expression
/// against many bindings without parsing it again.
///
/// # Errors
/// Returns [`Error::Parse`] if the source is malformed, and
/// [`Error::Runtime`] if evaluation fails under [`ErrorMode::ReturnError`].
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use intexpr::{Error, ErrorMode, evaluate};
///
/// let vars = HashMap::from([("x", 7_i64), ("y", 3)]);
///
/// assert_eq!(evaluate("x << y", &vars, ErrorMode::ReturnError), Ok(56));
///
/// let err = evaluate("x / (y - 3)", &vars, ErrorMode::ReturnError).unwrap_err();
/// assert_eq!(err.to_string(), "division by zero");
/// assert!(matches!(err, Error::Runtime(_)));
///
/// let err = evaluate("x +", &vars, ErrorMode::ReturnZero).unwrap_err();
/// assert_eq!(err.to_string(), "unexpected eof");
/// ```
pub fn evaluate(source: &str, bindings: &dyn Bindings, mode: ErrorMode) -> Result<i64, Error> {
    let expr = parse(source)?;
    Ok(expr.eval(bindings, mode)?)
}
