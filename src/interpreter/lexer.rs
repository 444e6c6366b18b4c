use log::trace;
use logos::Logos;

use crate::interpreter::token::{Token, TokenKind};

/// Converts source text into a sequence of [`Token`]s.
///
/// Pattern matching is delegated to the `logos`-generated automaton behind
/// [`TokenKind`]; this wrapper adds the guarantees the parser relies on:
/// unmatched input becomes an `Illegal` token instead of an error, and the
/// end of input is reported as `Eof` on every call once reached.
pub struct Lexer<'a> {
    inner:    logos::Lexer<'a, TokenKind>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner:    TokenKind::lexer(source),
               finished: false, }
    }

    /// Returns the next token.
    ///
    /// Whitespace is skipped first. Two-character operators (`==`, `!=`) are
    /// merged into one token. Any character that starts no token produces an
    /// `Illegal` token carrying that character. After the input is exhausted,
    /// every call returns an `Eof` token with an empty literal.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
    ///
    /// let mut lexer = Lexer::new("x != 5");
    ///
    /// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    /// assert_eq!(lexer.next_token().literal, "!=");
    /// assert_eq!(lexer.next_token().kind, TokenKind::Int);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    /// ```
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::eof(self.line());
        }

        match self.inner.next() {
            Some(Ok(kind)) => Token::new(kind, self.inner.slice(), self.line()),
            Some(Err(())) => {
                trace!("illegal input {:?} on line {}", self.inner.slice(), self.line());
                Token::new(TokenKind::Illegal, self.inner.slice(), self.line())
            },
            None => {
                self.finished = true;
                Token::eof(self.line())
            },
        }
    }

    /// The line the lexer is currently on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.inner.extras.line
    }
}

/// Yields every token up to, but not including, `Eof`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}
