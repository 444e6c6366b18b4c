use crate::interpreter::{
    parser::core::{ParseResult, Parser},
    token::TokenKind,
};

impl Parser<'_> {
    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by parameter lists and call arguments. `cur` is
    /// on the token that opens the list. An immediately following closing
    /// token produces an empty list.
    ///
    /// Grammar (simplified): `list := (item ("," item)*)? closing`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element. It is entered
    ///   with `cur` on the element's first token.
    /// - `closing`: The token that terminates the list.
    ///
    /// # Returns
    /// A vector of parsed items. `cur` is left on the closing token.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse,
    /// - something other than a comma or `closing` follows an item,
    /// - the input ends before the closing token.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: TokenKind)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.peek_is(closing) {
            self.next_token();

            return Ok(items);
        }

        self.next_token();
        items.push(parse_item(self)?);

        while self.peek_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            items.push(parse_item(self)?);
        }

        self.expect_peek(closing)?;
        Ok(items)
    }

    /// Parses a function parameter and returns its name.
    ///
    /// # Errors
    /// Returns a `ParseError` if `cur` is not an identifier.
    pub(in crate::interpreter::parser) fn parse_parameter(&mut self) -> ParseResult<String> {
        if self.cur_is(TokenKind::Identifier) {
            Ok(self.cur.literal.clone())
        } else {
            Err(Self::unexpected(TokenKind::Identifier, &self.cur))
        }
    }
}
