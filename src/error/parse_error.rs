use crate::interpreter::token::TokenKind;

/// Represents all diagnostics the parser can record.
///
/// The `Display` text of each variant is the human-readable diagnostic, e.g.
/// `Expected ASSIGN token. Got INT token (5)`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A specific token type was required but another one was found.
    #[error("Expected {expected} token. Got {found} token ({literal})")]
    UnexpectedToken {
        /// The token type the grammar required.
        expected: TokenKind,
        /// The token type actually present.
        found:    TokenKind,
        /// The literal text of the token actually present.
        literal:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot start an expression.
    #[error("No prefix parse function for {kind} found")]
    NoPrefixParseFn {
        /// The offending token type.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The token cannot continue an expression.
    #[error("No infix parse function for {kind} found")]
    NoInfixParseFn {
        /// The offending token type.
        kind: TokenKind,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit into a signed 64-bit integer.
    #[error("Could not parse {literal} as integer")]
    InvalidInteger {
        /// The literal text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Expressions or blocks nest beyond the parser's depth limit.
    #[error("Expression nested too deeply")]
    NestingTooDeep {
        /// The source line where the limit was reached.
        line: usize,
    },
    /// The input ended in the middle of a statement.
    #[error("Expected more tokens")]
    UnexpectedEof {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// The source line the diagnostic refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseFn { line, .. }
            | Self::NoInfixParseFn { line, .. }
            | Self::InvalidInteger { line, .. }
            | Self::NestingTooDeep { line }
            | Self::UnexpectedEof { line } => *line,
        }
    }
}
