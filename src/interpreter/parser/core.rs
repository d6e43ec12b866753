use std::str::FromStr;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::TokenStream, parser::binary::parse_logical_or},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete expression from `source`.
///
/// The whole input must form a single expression; anything left over after
/// it is reported as [`ParseError::TrailingInput`].
///
/// # Errors
/// Returns a [`ParseError`] describing the first syntax error found. No
/// partial tree is ever returned.
///
/// # Examples
/// ```
/// use intexpr::parse;
///
/// let expr = parse("x < y < z").unwrap();
/// assert_eq!(expr.to_string(), "((x < y) < z)");
///
/// let err = parse("x x").unwrap_err();
/// assert_eq!(err.to_string(), r#"syntax error at "x""#);
/// ```
pub fn parse(source: &str) -> ParseResult<Expr> {
    tracing::debug!(source, "parsing expression");

    let result = parse_complete(&mut TokenStream::new(source));

    if let Err(error) = &result {
        tracing::debug!(%error, "parse failed");
    }
    result
}

/// Parses an expression and checks that no input follows it.
fn parse_complete(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;
    if tokens.peek().is_some() {
        return Err(ParseError::TrailingInput { at: tokens.remaining() });
    }
    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing below the top level and
/// inside parentheses. It begins at the lowest-precedence level, logical OR,
/// and recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_logical_or(tokens)
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
