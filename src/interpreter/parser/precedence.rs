use crate::interpreter::token::TokenKind;

/// Binding strength of an operator, weakest first.
///
/// The Pratt loop keeps extending the left operand while the next operator
/// binds tighter than the level it was called with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Everything that is not an operator.
    Lowest,
    /// `==` and `!=`
    Equals,
    /// `<` and `>`
    LessGreater,
    /// `+` and `-`
    Sum,
    /// `*` and `/`
    Product,
    /// Prefix `-x` and `!x`
    Prefix,
    /// `callee(args)`
    Call,
}

impl Precedence {
    /// The precedence of a token in infix position. Tokens that are not infix
    /// operators default to `Lowest`.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{parser::precedence::Precedence, token::TokenKind};
    ///
    /// assert_eq!(Precedence::of(TokenKind::Asterisk), Precedence::Product);
    /// assert_eq!(Precedence::of(TokenKind::LParen), Precedence::Call);
    /// assert_eq!(Precedence::of(TokenKind::Semicolon), Precedence::Lowest);
    /// assert!(Precedence::Sum < Precedence::Product);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Self::Equals,
            TokenKind::Lt | TokenKind::Gt => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::LParen => Self::Call,
            _ => Self::Lowest,
        }
    }
}
