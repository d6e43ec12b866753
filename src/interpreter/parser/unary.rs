use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{LexError, Lexeme, Token, TokenStream},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+`, `-`, `^` and `!`. Unary operators
/// nest to the right, so `-^x` is parsed as `(-(^x))`, and bind tighter than
/// any binary operator.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-" | "^" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    if let Some(op) = tokens.peek_token().and_then(token_to_unary_operator) {
        tokens.next();
        let operand = parse_unary(tokens)?;
        return Ok(Expr::unary(op, operand));
    }
    parse_primary(tokens)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := integer
///              | identifier
///              | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends where an operand belongs.
/// - `LiteralTooLarge` for an integer that overflows 64 bits.
/// - `BadExpression` for any other token, reported with the input starting
///   at that token.
pub(crate) fn parse_primary(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let Some(Lexeme { token, offset }) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    match token {
        Ok(Token::Integer(value)) => Ok(Expr::Number(value)),
        Ok(Token::Identifier(name)) => Ok(Expr::Identifier(name)),
        Ok(Token::LParen) => parse_grouping(tokens),
        Err(LexError::LiteralTooLarge) => {
            Err(ParseError::LiteralTooLarge { at: tokens.remaining_from(offset) })
        },
        Ok(_) | Err(LexError::Unrecognized) => {
            Err(ParseError::BadExpression { at: tokens.remaining_from(offset) })
        },
    }
}

/// Parses the inside of a parenthesized expression.
///
/// The opening `(` has already been consumed. Parentheses only group; they
/// leave no node in the tree.
fn parse_grouping(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    let expr = parse_expression(tokens)?;
    if !tokens.next_if_eq(&Token::RParen) {
        return Err(ParseError::UnclosedParen { at: tokens.remaining() });
    }
    Ok(expr)
}

/// Maps a token to the prefix operator it spells, if any.
#[must_use]
pub fn token_to_unary_operator(token: &Token) -> Option<UnaryOperator> {
    match token {
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Negate),
        Token::Caret => Some(UnaryOperator::BitNot),
        Token::Bang => Some(UnaryOperator::Not),
        _ => None,
    }
}
