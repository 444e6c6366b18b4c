/// Interpretation errors.
///
/// The error returned by the library entry points: either the parser's
/// diagnostics or a runtime error that halted evaluation.
pub mod interpret_error;
/// Parsing errors.
///
/// Defines the diagnostics the parser records while building the AST:
/// unexpected tokens, tokens that start or continue no expression, malformed
/// integer literals and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the failures that halt evaluation, such as division by zero and
/// integer overflow. They travel inside `Value::Error`.
pub mod runtime_error;

pub use interpret_error::{InterpretError, ParseErrors};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
