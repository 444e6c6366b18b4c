use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::Value},
};

impl Evaluator<'_> {
    /// Evaluates a prefix operation on a value.
    ///
    /// Supported operators:
    /// - `Not`: `true` for `false` and `null`, the negation for other booleans,
    ///   and `false` for everything else (including `0`).
    /// - `Negate`: arithmetic negation of an integer. Any other operand yields
    ///   `null`.
    ///
    /// # Parameters
    /// - `op`: Prefix operator.
    /// - `value`: The evaluated operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value`. Negating `i64::MIN` yields an overflow error.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::PrefixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Negate, &Value::Integer(5), 1);
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Not, &Value::Integer(5), 1);
    /// assert_eq!(v, Value::Boolean(false));
    ///
    /// let v = Evaluator::eval_prefix(PrefixOperator::Negate, &Value::Boolean(true), 1);
    /// assert_eq!(v, Value::Null);
    /// ```
    #[must_use]
    pub fn eval_prefix(op: PrefixOperator, value: &Value, line: usize) -> Value {
        match op {
            PrefixOperator::Not => match value {
                Value::Boolean(b) => Value::Boolean(!b),
                Value::Null => Value::Boolean(true),
                _ => Value::Boolean(false),
            },
            PrefixOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map_or(Value::Error(RuntimeError::Overflow { line }), Value::Integer),
                _ => Value::Null,
            },
        }
    }
}
