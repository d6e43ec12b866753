/// Parsing errors.
///
/// Defines every way a source string can fail to produce an expression tree:
/// premature end of input, tokens that cannot start an operand, unbalanced
/// parentheses, oversized literals and trailing input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors evaluation can raise: undefined variables, division
/// or modulo by zero, and negative shift amounts.
pub mod runtime_error;

pub use parse_error::{ParseError, Remaining};
pub use runtime_error::RuntimeError;

/// Either phase of [`crate::evaluate`] failing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source did not parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
