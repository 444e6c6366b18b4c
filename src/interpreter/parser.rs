/// The parser state, the Pratt loop and statement-level error recovery.
///
/// Holds the current and lookahead tokens, the prefix/infix dispatch tables
/// and the ordered list of recorded diagnostics.
pub mod core;

/// Operator binding strength.
///
/// Maps token types to the precedence levels that drive the Pratt loop.
pub mod precedence;

/// Prefix parse functions.
///
/// Everything that can start an expression: literals, identifiers, prefix
/// operators, grouped expressions, `if` and `fn`.
pub mod unary;

/// Infix parse functions.
///
/// Everything that continues an already parsed left operand: the binary
/// operators and call expressions.
pub mod binary;

/// Block statements and their local error recovery.
pub mod block;

/// Statement parsing: `let`, `return` and expression statements.
pub mod statement;

/// Helpers shared by the parse functions.
pub mod utils;
