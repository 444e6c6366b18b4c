use crate::{
    ast::Statement,
    interpreter::{
        parser::{
            core::{ParseResult, Parser},
            precedence::Precedence,
        },
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a `let` binding,
    /// - a `return` statement,
    /// - a standalone block,
    /// - an expression used as a statement.
    ///
    /// The construct is chosen by the current token. A single trailing `;` is
    /// consumed if present; it is optional for every kind of statement.
    ///
    /// # Returns
    /// A parsed [`Statement`] node. `cur` is left on its last token.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        let statement = match self.cur.kind {
            TokenKind::Let => self.parse_let_statement()?,
            TokenKind::Return => self.parse_return_statement()?,
            TokenKind::LBrace => Statement::Block(self.parse_block_statement()?),
            _ => {
                let line = self.cur.line;
                let expr = self.parse_expression(Precedence::Lowest)?;
                Statement::Expression { expr, line }
            },
        };

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        Ok(statement)
    }

    /// Parses a variable binding.
    ///
    /// Grammar: `let := "let" identifier "=" expression ";"?`
    ///
    /// # Errors
    /// Returns a `ParseError` if the name or `=` is missing, or if the
    /// initializer fails to parse.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur.line;

        self.expect_peek(TokenKind::Identifier)?;
        let name = self.cur.literal.clone();

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        Ok(Statement::Let { name, value, line })
    }

    /// Grammar: `return := "return" expression ";"?`
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        let line = self.cur.line;

        self.next_token();
        let value = self.parse_expression(Precedence::Lowest)?;

        Ok(Statement::Return { value, line })
    }
}
