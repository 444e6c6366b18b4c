use std::fmt;

use crate::error::{ParseError, RuntimeError};

/// The ordered diagnostics of a rejected program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Represents everything that can go wrong when interpreting source text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InterpretError {
    /// The parser recorded at least one diagnostic.
    #[error("{0}")]
    Parse(ParseErrors),
    /// Evaluation halted with an error value.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl From<Vec<ParseError>> for InterpretError {
    fn from(errors: Vec<ParseError>) -> Self {
        Self::Parse(ParseErrors(errors))
    }
}
