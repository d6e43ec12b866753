use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenStream},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses one left-associative precedence level.
///
/// Reads an operand with `operand`, then keeps folding
/// `operator operand` pairs into the left side for as long as the next token
/// is an operator accepted by `accepts`. The result is a left-leaning chain:
/// `a - b - c` becomes `((a - b) - c)`.
///
/// A token that is not an operator of this level ends the level without
/// being consumed; the caller decides what it means.
fn parse_left_assoc(tokens: &mut TokenStream<'_>,
                    accepts: fn(BinaryOperator) -> bool,
                    operand: fn(&mut TokenStream<'_>) -> ParseResult<Expr>)
                    -> ParseResult<Expr> {
    let mut left = operand(tokens)?;
    while let Some(op) = tokens.peek_token().and_then(token_to_binary_operator)
          && accepts(op)
    {
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Parses logical OR expressions, the lowest precedence level.
///
/// The rule is: `logical_or := logical_and ("||" logical_and)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::Or),
                     parse_logical_and)
}

/// Parses logical AND expressions.
///
/// The rule is: `logical_and := relational ("&&" relational)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     |op| matches!(op, BinaryOperator::And),
                     parse_relational)
}

/// Parses relational and equality operators:
/// `==`, `!=`, `<`, `<=`, `>`, `>=`.
///
/// Comparisons chain to the left like every other level, so `a < b < c`
/// compares the `0`/`1` result of `a < b` with `c`.
///
/// The rule is: `relational := additive (rel_op additive)*`
pub fn parse_relational(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens, is_relational_op, parse_additive)
}

/// Parses additive expressions.
///
/// Handles `+`, `-`, `|` and binary `^`.
///
/// The rule is: `additive := multiplicative (("+" | "-" | "|" | "^")
/// multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     |op| {
                         matches!(op,
                                  BinaryOperator::Add
                                  | BinaryOperator::Sub
                                  | BinaryOperator::BitOr
                                  | BinaryOperator::BitXor)
                     },
                     parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles `*`, `/`, `%`, `<<`, `>>`, `&` and `&^`. Shifts bind as tightly
/// as multiplication, so `x + y << z` is `(x + (y << z))`.
///
/// The rule is: `multiplicative := unary (mul_op unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Expr> {
    parse_left_assoc(tokens,
                     |op| {
                         matches!(op,
                                  BinaryOperator::Mul
                                  | BinaryOperator::Div
                                  | BinaryOperator::Rem
                                  | BinaryOperator::Shl
                                  | BinaryOperator::Shr
                                  | BinaryOperator::BitAnd
                                  | BinaryOperator::AndNot)
                     },
                     parse_unary)
}

/// Returns `true` for the comparison operators.
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Equal
             | BinaryOperator::NotEqual
             | BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for tokens that never act as an infix operator (operands,
/// parentheses and `!`). Whether the operator is valid at the current
/// precedence level is decided by the caller.
///
/// # Example
/// ```
/// use intexpr::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Caret), Some(BinaryOperator::BitXor));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    Some(match token {
             Token::Plus => BinaryOperator::Add,
             Token::Minus => BinaryOperator::Sub,
             Token::Star => BinaryOperator::Mul,
             Token::Slash => BinaryOperator::Div,
             Token::Percent => BinaryOperator::Rem,
             Token::Ampersand => BinaryOperator::BitAnd,
             Token::AmpersandCaret => BinaryOperator::AndNot,
             Token::Pipe => BinaryOperator::BitOr,
             Token::Caret => BinaryOperator::BitXor,
             Token::ShiftLeft => BinaryOperator::Shl,
             Token::ShiftRight => BinaryOperator::Shr,
             Token::EqualEqual => BinaryOperator::Equal,
             Token::BangEqual => BinaryOperator::NotEqual,
             Token::Less => BinaryOperator::Less,
             Token::LessEqual => BinaryOperator::LessEqual,
             Token::Greater => BinaryOperator::Greater,
             Token::GreaterEqual => BinaryOperator::GreaterEqual,
             Token::DoubleAmpersand => BinaryOperator::And,
             Token::DoublePipe => BinaryOperator::Or,
             Token::Integer(_)
             | Token::Identifier(_)
             | Token::Bang
             | Token::LParen
             | Token::RParen => return None,
         })
}
