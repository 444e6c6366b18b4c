/// The evaluator module reduces AST nodes to runtime values.
///
/// The evaluator walks the AST with an explicit work-list instead of host
/// recursion, applies operators and branches, and produces the final value.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Halts on `return` and on runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to an identifier, an integer, an operator, a delimiter or a
/// keyword. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type, text and line.
/// - Reports unrecognized characters as `ILLEGAL` tokens instead of failing.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Records syntax errors with location info and recovers from them.
pub mod parser;
/// The token module defines the closed set of token types and the token
/// record produced by the lexer.
pub mod token;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: integers, booleans, `null` and errors.
/// - Renders values for display and decides truthiness.
pub mod value;
