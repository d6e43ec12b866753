/// Parser entry points.
///
/// Owns the top-level `parse` function, which requires the whole input to be
/// consumed, and the `FromStr` implementation for [`crate::ast::Expr`].
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from logical OR down to the
/// multiplicative operators. Every level folds left.
pub mod binary;

/// Unary operators and primary expressions.
///
/// Handles prefix operators, literals, identifiers and parenthesized groups.
pub mod unary;
