//! # monkey
//!
//! monkey is an interpreter front-end for the Monkey language written in Rust.
//! It tokenizes source text, parses it with a Pratt parser into a syntax tree,
//! and reduces that tree to a value with a stack-based evaluator. Integers,
//! booleans, prefix and infix operators, conditionals and blocks are
//! supported.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::info;

use crate::{
    ast::Program,
    error::{InterpretError, ParseError},
    interpreter::{evaluator::core::Evaluator, lexer::Lexer, parser::core::Parser, value::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expression` and `Statement` enums and the
/// `Program` root that represent the syntactic structure of source code as a
/// tree. The AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes.
/// - Renders every node back to a canonical, fully parenthesized text form.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the diagnostics recorded by the parser, the errors
/// that halt evaluation, and the combined error returned by [`interpret`].
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and exact messages to every error.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: token model, lexer, parser, evaluator,
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Parses source text into a program and its diagnostics.
///
/// Parsing never stops at the first error: every well-formed statement ends
/// up in the returned [`Program`], and the diagnostics are listed in the order
/// they were found.
///
/// # Examples
/// ```
/// use monkey::parse;
///
/// let (program, errors) = parse("let x = 1 + 2 * 3;");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));\n");
///
/// let (_, errors) = parse("let = 5;");
/// assert_eq!(errors[0].to_string(), "Expected IDENTIFIER token. Got ASSIGN token (=)");
/// ```
#[must_use]
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let (program, errors) = Parser::new(Lexer::new(source)).parse_program();
    info!("parsed {} statement(s) with {} error(s)",
          program.statements.len(),
          errors.len());
    (program, errors)
}

/// Parses and evaluates source text.
///
/// # Errors
/// Returns [`InterpretError::Parse`] if the parser recorded any diagnostic,
/// and [`InterpretError::Runtime`] if evaluation halted with an error value.
///
/// # Examples
/// ```
/// use monkey::{error::InterpretError, interpret, interpreter::value::Value};
///
/// assert_eq!(interpret("(5 + 4) * 2;"), Ok(Value::Integer(18)));
/// assert_eq!(interpret("10 + true;"), Ok(Value::Null));
///
/// let err = interpret("1 / 0;").unwrap_err();
/// assert_eq!(err.to_string(), "Error on line 1: Division by zero.");
/// assert!(matches!(interpret("let = 5;"), Err(InterpretError::Parse(_))));
/// ```
pub fn interpret(source: &str) -> Result<Value, InterpretError> {
    let (program, errors) = parse(source);
    if !errors.is_empty() {
        return Err(errors.into());
    }

    let value = Evaluator::new().eval(&program);
    info!("evaluated to {value}");

    match value {
        Value::Error(error) => Err(error.into()),
        value => Ok(value),
    }
}
