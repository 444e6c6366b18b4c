use crate::error::RuntimeError;

/// Represents a runtime value in the interpreter.
///
/// Values have no identity beyond their contents; every evaluation step
/// produces fresh ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A signed 64-bit integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by comparison operators (`<`, `==`, `!=`, etc.) and by `!`.
    Boolean(bool),
    /// The absence of a value. Also the result of every operator applied to
    /// operand types it is not defined for.
    Null,
    /// An error that halted evaluation.
    Error(RuntimeError),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e)
    }
}

impl Value {
    /// Renders the value for display in a REPL.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(-5).inspect(), "-5");
    /// assert_eq!(Value::Boolean(true).inspect(), "true");
    /// assert_eq!(Value::Null.inspect(), "null");
    /// ```
    #[must_use]
    pub fn inspect(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Boolean(b) => b.to_string(),
            Self::Null => "null".to_string(),
            Self::Error(e) => format!("ERROR: {e}"),
        }
    }

    /// Whether the value counts as true in a condition.
    ///
    /// Everything except `false` and `null` is truthy, including `0`.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Returns `true` for `Value::Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inspect())
    }
}
