use log::debug;

use crate::{
    ast::BlockStatement,
    error::ParseError,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// A block consists of zero or more statements. Stray `;` tokens between
    /// statements are skipped. A statement that fails to parse is recorded as
    /// a diagnostic and skipped up to the next `;` or the closing brace, so the
    /// remaining statements of the block are still parsed.
    ///
    /// Grammar: `block := "{" statement* "}"`
    ///
    /// # Returns
    /// The block with the line of its opening brace. `cur` is left on the
    /// closing brace.
    ///
    /// # Errors
    /// Returns `ParseError::UnexpectedEof` if the input ends before the block
    /// is closed, and `ParseError::NestingTooDeep` if blocks and expressions
    /// nest too deeply.
    pub(in crate::interpreter::parser) fn parse_block_statement(&mut self) -> ParseResult<BlockStatement> {
        self.nested(Self::parse_block_body)
    }

    fn parse_block_body(&mut self) -> ParseResult<BlockStatement> {
        let line = self.cur.line;
        let mut statements = Vec::new();

        self.next_token();

        while !self.cur_is(TokenKind::RBrace) {
            if self.cur_is(TokenKind::Eof) {
                return Err(ParseError::UnexpectedEof { line: self.cur.line });
            }
            if self.cur_is(TokenKind::Semicolon) {
                self.next_token();
                continue;
            }

            match self.parse_statement() {
                Ok(statement) => {
                    statements.push(statement);
                    self.next_token();
                },
                Err(error @ ParseError::UnexpectedEof { .. }) => return Err(error),
                Err(error) => {
                    self.record(error);
                    self.synchronize_block()?;
                },
            }
        }

        Ok(BlockStatement { statements, line })
    }

    /// Discards tokens up to and including the next `;`, or up to the closing
    /// brace of the current block.
    fn synchronize_block(&mut self) -> ParseResult<()> {
        loop {
            match self.cur.kind {
                TokenKind::Semicolon => {
                    self.next_token();
                    break;
                },
                TokenKind::RBrace => break,
                TokenKind::Eof => return Err(ParseError::UnexpectedEof { line: self.cur.line }),
                _ => self.next_token(),
            }
        }
        debug!("resynchronized inside block on line {}", self.cur.line);
        Ok(())
    }
}
