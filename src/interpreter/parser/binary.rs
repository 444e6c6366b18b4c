use crate::{
    ast::{Expression, InfixOperator},
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
    /// Parses the right operand of a binary operator and combines it with
    /// `left`.
    ///
    /// The right operand is parsed at the operator's own precedence. An
    /// operator of the same level that follows therefore does not bind to the
    /// right operand, and chains like `a - b - c` group as `((a - b) - c)`.
    ///
    /// Grammar:
    /// ```text
    ///     infix := expression ("+" | "-" | "*" | "/" | "<" | ">" | "==" | "!=") expression
    /// ```
    /// # Parameters
    /// - `left`: The already parsed left operand. `cur` is on the operator.
    ///
    /// # Returns
    /// An [`Expression::Infix`] carrying the operator's line.
    pub(in crate::interpreter::parser) fn parse_infix_expression(&mut self,
                                                                 left: Expression)
                                                                 -> ParseResult<Expression> {
        let line = self.cur.line;
        let op = InfixOperator::from_token(self.cur.kind).ok_or(ParseError::NoInfixParseFn {
            kind: self.cur.kind,
            line,
        })?;
        let precedence = self.cur_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left),
                               op,
                               right: Box::new(right),
                               line })
    }

    /// Parses the argument list of a call. `cur` is on the opening
    /// parenthesis.
    ///
    /// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
    pub(in crate::interpreter::parser) fn parse_call_expression(&mut self,
                                                                function: Expression)
                                                                -> ParseResult<Expression> {
        let line = self.cur.line;
        let arguments =
            self.parse_comma_separated(|parser| parser.parse_expression(Precedence::Lowest), TokenKind::RParen)?;

        Ok(Expression::Call { function: Box::new(function),
                              arguments,
                              line })
    }
}
