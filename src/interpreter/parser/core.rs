use log::debug;

use crate::{
    ast::{Expression, Program},
    error::ParseError,
    interpreter::{
        lexer::Lexer,
        parser::precedence::Precedence,
        token::{Token, TokenKind},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply expressions and blocks may nest before parsing gives up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Builds an expression starting at the current token.
pub type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> ParseResult<Expression>;
/// Extends an already parsed left operand, starting at the operator token.
pub type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> ParseResult<Expression>;

/// A Pratt parser over the tokens of a [`Lexer`].
///
/// The parser looks one token ahead: `cur` is the token being examined and
/// `peek` the one after it. Parse functions are entered with `cur` on their
/// first token and return with `cur` on their last one.
///
/// Malformed statements do not abort the parse. Their diagnostic is recorded
/// and tokens are discarded up to the next statement boundary, so every
/// well-formed statement still ends up in the [`Program`].
pub struct Parser<'a> {
    lexer:  Lexer<'a>,
    pub(in crate::interpreter::parser) cur: Token,
    pub(in crate::interpreter::parser) peek: Token,
    errors: Vec<ParseError>,
    depth:  usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser and loads the first two tokens.
    #[must_use]
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let cur = lexer.next_token();
        let peek = lexer.next_token();
        Self { lexer,
               cur,
               peek,
               errors: Vec::new(),
               depth: 0 }
    }

    /// Parses the whole input.
    ///
    /// Returns every statement that could be built together with the ordered
    /// diagnostics. A lone `;` produces no statement. After a failed statement,
    /// tokens are discarded up to and including the next `;`; running out of
    /// input first records `Expected more tokens` and ends the parse.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{lexer::Lexer, parser::core::Parser};
    ///
    /// let (program, errors) = Parser::new(Lexer::new("let x 5;\nlet y = 10;")).parse_program();
    ///
    /// assert_eq!(errors.len(), 1);
    /// assert_eq!(errors[0].to_string(), "Expected ASSIGN token. Got INT token (5)");
    /// assert_eq!(program.to_string(), "let y = 10;\n");
    /// ```
    #[must_use]
    pub fn parse_program(mut self) -> (Program, Vec<ParseError>) {
        let mut program = Program::default();

        while !self.cur_is(TokenKind::Eof) {
            if self.cur_is(TokenKind::Semicolon) {
                self.next_token();
                continue;
            }

            match self.parse_statement() {
                Ok(statement) => {
                    program.statements.push(statement);
                    self.next_token();
                },
                Err(error @ ParseError::UnexpectedEof { .. }) => {
                    self.record(error);
                    break;
                },
                Err(error) => {
                    self.record(error);
                    if !self.synchronize() {
                        let line = self.cur.line;
                        self.record(ParseError::UnexpectedEof { line });
                        break;
                    }
                },
            }
        }

        (program, self.errors)
    }

    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// The prefix function of the current token produces the left operand.
    /// While the next operator binds tighter than `precedence`, its infix
    /// function folds the left operand into a larger expression. Each infix
    /// function parses its right operand at the operator's own precedence,
    /// which makes operators of equal precedence left-associative.
    ///
    /// # Errors
    /// Returns `ParseError::NestingTooDeep` once expressions and blocks nest
    /// more than [`MAX_NESTING_DEPTH`] levels.
    pub fn parse_expression(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        self.nested(|parser| parser.parse_pratt(precedence))
    }

    fn parse_pratt(&mut self, precedence: Precedence) -> ParseResult<Expression> {
        let prefix = Self::prefix_parse_fn(self.cur.kind).ok_or_else(|| self.no_prefix_error())?;
        let mut left = prefix(self)?;

        while precedence < self.peek_precedence() {
            let infix = Self::infix_parse_fn(self.peek.kind).ok_or(ParseError::NoInfixParseFn {
                kind: self.peek.kind,
                line: self.peek.line,
            })?;
            self.next_token();
            left = infix(self, left)?;
        }

        Ok(left)
    }

    /// The prefix dispatch table.
    #[must_use]
    pub fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
        let parse: PrefixParseFn<'a> = match kind {
            TokenKind::Identifier => Self::parse_identifier,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean_literal,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expression,
            TokenKind::LParen => Self::parse_grouped_expression,
            TokenKind::If => Self::parse_if_expression,
            TokenKind::Function => Self::parse_function_literal,
            _ => return None,
        };
        Some(parse)
    }

    /// The infix dispatch table.
    #[must_use]
    pub fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<'a>> {
        let parse: InfixParseFn<'a> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Eq
            | TokenKind::NotEq => Self::parse_infix_expression,
            TokenKind::LParen => Self::parse_call_expression,
            _ => return None,
        };
        Some(parse)
    }

    /// Runs `parse` one nesting level deeper.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { line: self.cur.line });
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    pub(in crate::interpreter::parser) fn next_token(&mut self) {
        self.cur = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    pub(in crate::interpreter::parser) fn cur_is(&self, kind: TokenKind) -> bool {
        self.cur.is(kind)
    }

    pub(in crate::interpreter::parser) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances if the next token has type `kind`, fails otherwise.
    pub(in crate::interpreter::parser) fn expect_peek(&mut self, kind: TokenKind) -> ParseResult<()> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(Self::unexpected(kind, &self.peek))
        }
    }

    /// The error for finding `found` where a `expected` token was required.
    pub(in crate::interpreter::parser) fn unexpected(expected: TokenKind, found: &Token) -> ParseError {
        if found.is(TokenKind::Eof) {
            return ParseError::UnexpectedEof { line: found.line };
        }
        ParseError::UnexpectedToken { expected,
                                      found: found.kind,
                                      literal: found.literal.clone(),
                                      line: found.line }
    }

    pub(in crate::interpreter::parser) const fn cur_precedence(&self) -> Precedence {
        Precedence::of(self.cur.kind)
    }

    const fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(in crate::interpreter::parser) fn record(&mut self, error: ParseError) {
        debug!("parse error on line {}: {error}", error.line());
        self.errors.push(error);
    }

    fn no_prefix_error(&self) -> ParseError {
        if self.cur_is(TokenKind::Eof) {
            ParseError::UnexpectedEof { line: self.cur.line }
        } else {
            ParseError::NoPrefixParseFn { kind: self.cur.kind,
                                          line: self.cur.line, }
        }
    }

    /// Discards tokens up to and including the next `;`.
    ///
    /// Returns `false` if the input ended first.
    fn synchronize(&mut self) -> bool {
        while !self.cur_is(TokenKind::Semicolon) {
            if self.cur_is(TokenKind::Eof) {
                return false;
            }
            self.next_token();
        }
        self.next_token();
        debug!("resynchronized on line {}", self.cur.line);
        true
    }
}
