use std::fmt;

/// The unconsumed input at the point a parse failed.
///
/// Displays as the quoted remaining source, or `eof` when the whole input was
/// consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remaining {
    /// Input remains, starting at the next token.
    Input {
        /// Byte offset of `text` within the source.
        offset: usize,
        /// The rest of the source from `offset` on.
        text:   String,
    },
    /// Nothing but whitespace was left.
    Eof,
}

impl Remaining {
    /// Byte offset of the remaining input, or `None` at end of input.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Input { offset, .. } => Some(*offset),
            Self::Eof => None,
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Input { text, .. } => write!(f, "{text:?}"),
            Self::Eof => f.write_str("eof"),
        }
    }
}

/// Represents all errors that can occur while parsing an expression.
///
/// Parsing has no recovery mode: the first error ends the parse and no
/// partial tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Reached the end of input where an operand was expected.
    #[error("unexpected eof")]
    UnexpectedEndOfInput,
    /// Found a token that cannot start an operand.
    #[error("bad expression at {at}")]
    BadExpression {
        /// Input starting at the offending token.
        at: Remaining,
    },
    /// A `(` group was not closed by `)`.
    #[error("unclosed paren at {at}")]
    UnclosedParen {
        /// Input starting where `)` was expected.
        at: Remaining,
    },
    /// Found input after a complete expression.
    #[error("syntax error at {at}")]
    TrailingInput {
        /// The trailing input.
        at: Remaining,
    },
    /// An integer literal does not fit in 64 bits.
    #[error("literal too large at {at}")]
    LiteralTooLarge {
        /// Input starting at the literal.
        at: Remaining,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    ///
    /// Returns `None` for errors at end of input.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedEndOfInput => None,
            Self::BadExpression { at }
            | Self::UnclosedParen { at }
            | Self::TrailingInput { at }
            | Self::LiteralTooLarge { at } => at.offset(),
        }
    }
}
