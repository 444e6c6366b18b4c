use crate::{
    ast::{Expression, PrefixOperator},
    error::ParseError,
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses an identifier reference.
    ///
    /// Grammar: `identifier := [a-zA-Z_]+`
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<Expression> {
        Ok(Expression::Identifier { name: self.cur.literal.clone(),
                                    line: self.cur.line, })
    }

    /// Parses a decimal integer literal.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidInteger` if the digits do not fit into a
    /// signed 64-bit integer.
    pub(in crate::interpreter::parser) fn parse_integer_literal(&mut self) -> ParseResult<Expression> {
        let line = self.cur.line;
        let value = self.cur
                        .literal
                        .parse::<i64>()
                        .map_err(|_| ParseError::InvalidInteger { literal: self.cur.literal.clone(),
                                                                  line })?;
        Ok(Expression::IntegerLiteral { value, line })
    }

    pub(in crate::interpreter::parser) fn parse_boolean_literal(&mut self) -> ParseResult<Expression> {
        Ok(Expression::BooleanLiteral { value: self.cur_is(TokenKind::True),
                                        line:  self.cur.line, })
    }

    /// Parses a prefix operation.
    ///
    /// The operand is parsed at `Precedence::Prefix`, so `-a * b` groups as
    /// `((-a) * b)` while `!-a` nests as `(!(-a))`.
    ///
    /// Grammar:
    /// ```text
    ///     prefix := ("-" | "!") expression
    /// ```
    pub(in crate::interpreter::parser) fn parse_prefix_expression(&mut self) -> ParseResult<Expression> {
        let line = self.cur.line;
        let op = PrefixOperator::from_token(self.cur.kind).ok_or(ParseError::NoPrefixParseFn {
            kind: self.cur.kind,
            line,
        })?;

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { op,
                                right: Box::new(right),
                                line })
    }

    /// Parses a parenthesized expression.
    ///
    /// The parentheses only influence grouping and leave no node of their own
    /// in the tree.
    ///
    /// Grammar: `grouped := "(" expression ")"`
    pub(in crate::interpreter::parser) fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.next_token();
        let expr = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;
        Ok(expr)
    }

    /// Parses an `if` expression with an optional `else` branch.
    ///
    /// Grammar:
    /// ```text
    ///     if := "if" "(" expression ")" block ("else" block)?
    /// ```
    /// # Returns
    /// An [`Expression::If`] whose line is the line of the `if` keyword.
    ///
    /// # Errors
    /// Returns a `ParseError` if a parenthesis or brace is missing, or if the
    /// condition or either block fails to parse.
    pub(in crate::interpreter::parser) fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        let line = self.cur.line;

        self.expect_peek(TokenKind::LParen)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek(TokenKind::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition),
                            consequence,
                            alternative,
                            line })
    }

    /// Parses a function literal.
    ///
    /// Grammar:
    /// ```text
    ///     function := "fn" "(" (identifier ("," identifier)*)? ")" block
    /// ```
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        let line = self.cur.line;

        self.expect_peek(TokenKind::LParen)?;
        let parameters = self.parse_comma_separated(Self::parse_parameter, TokenKind::RParen)?;

        self.expect_peek(TokenKind::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral { parameters,
                                         body,
                                         line })
    }
}
