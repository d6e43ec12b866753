use logos::{Lexer, Logos};

use crate::error::Remaining;

/// Reasons the lexer can fail to produce a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// The input does not start any token, e.g. `@` or a lone `=`.
    #[default]
    Unrecognized,
    /// A run of digits that does not fit in a `u64`.
    LiteralTooLarge,
}

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Two-character operators are matched before their one-character prefixes,
/// so `<<` is never read as two `<`.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    /// Integer literal tokens, such as `42`. Never signed.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(u64),
    /// Identifier tokens; variable names such as `x` or `rate_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `&^`
    #[token("&^")]
    AmpersandCaret,
    /// `&&`
    #[token("&&")]
    DoubleAmpersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `||`
    #[token("||")]
    DoublePipe,
    /// `^`
    #[token("^")]
    Caret,
    /// `!`
    #[token("!")]
    Bang,
    /// `<<`
    #[token("<<")]
    ShiftLeft,
    /// `>>`
    #[token(">>")]
    ShiftRight,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns [`LexError::LiteralTooLarge`] when the digits overflow a `u64`.
fn parse_integer(lex: &Lexer<Token>) -> Result<u64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The token, or the reason none could be read.
    pub token:  Result<Token, LexError>,
    /// Byte offset of the token in the source.
    pub offset: usize,
}

/// A lazily lexed token source with one token of lookahead.
///
/// Tokens are pulled from the underlying lexer only as the parser asks for
/// them, so lexing and parsing proceed together and a syntax error stops
/// lexing at that point.
///
/// # Example
/// ```
/// use intexpr::interpreter::lexer::{Token, TokenStream};
///
/// let mut tokens = TokenStream::new("x &^ 1");
/// assert_eq!(tokens.peek_token(), Some(&Token::Identifier("x".into())));
/// tokens.next();
/// assert!(tokens.next_if_eq(&Token::AmpersandCaret));
/// assert_eq!(tokens.remaining().to_string(), "\"1\"");
/// ```
pub struct TokenStream<'src> {
    lexer:  Lexer<'src, Token>,
    peeked: Option<Option<Lexeme>>,
}

impl<'src> TokenStream<'src> {
    /// Creates a stream positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:  Token::lexer(source),
               peeked: None, }
    }

    /// Returns the next lexeme without consuming it, or `None` at end of
    /// input.
    pub fn peek(&mut self) -> Option<&Lexeme> {
        let lexer = &mut self.lexer;
        self.peeked
            .get_or_insert_with(|| {
                lexer.next().map(|token| Lexeme { token,
                                                  offset: lexer.span().start })
            })
            .as_ref()
    }

    /// Returns the next token if it lexed successfully.
    ///
    /// Lexical errors and end of input both yield `None`.
    pub fn peek_token(&mut self) -> Option<&Token> {
        self.peek().and_then(|lexeme| lexeme.token.as_ref().ok())
    }

    /// Consumes and returns the next lexeme.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Lexeme> {
        self.peek();
        self.peeked.take().flatten()
    }

    /// Consumes the next token if it equals `expected`.
    pub fn next_if_eq(&mut self, expected: &Token) -> bool {
        if self.peek_token() == Some(expected) {
            self.next();
            return true;
        }
        false
    }

    /// Returns the unconsumed input, starting at the next token.
    ///
    /// Whitespace before the next token is not included; trailing whitespace
    /// after it is.
    pub fn remaining(&mut self) -> Remaining {
        match self.peek().map(|lexeme| lexeme.offset) {
            Some(offset) => self.remaining_from(offset),
            None => Remaining::Eof,
        }
    }

    /// Returns the source from `offset` on, for a token already consumed.
    #[must_use]
    pub fn remaining_from(&self, offset: usize) -> Remaining {
        match self.lexer.source().get(offset..) {
            Some(text) if !text.is_empty() => Remaining::Input { offset,
                                                                  text: text.to_string() },
            _ => Remaining::Eof,
        }
    }
}
