use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::Evaluator, value::Value},
};

impl Evaluator<'_> {
    /// Evaluates an infix operation between two values.
    ///
    /// Two operand combinations are defined:
    /// - two integers: checked arithmetic and comparison,
    /// - two booleans: `==` and `!=` only.
    ///
    /// Every other combination, including booleans with an arithmetic or
    /// ordering operator, yields `null`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value`.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::InfixOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::Value},
    /// };
    ///
    /// let v = Evaluator::eval_infix(InfixOperator::Add, &Value::Integer(3), &Value::Integer(4), 1);
    /// assert_eq!(v, Value::Integer(7));
    ///
    /// let v = Evaluator::eval_infix(InfixOperator::Add, &Value::Integer(10), &Value::Boolean(true), 1);
    /// assert_eq!(v, Value::Null);
    /// ```
    #[must_use]
    pub fn eval_infix(op: InfixOperator, left: &Value, right: &Value, line: usize) -> Value {
        match (left, right) {
            (Value::Integer(l), Value::Integer(r)) => Self::eval_integer_infix(op, *l, *r, line),
            (Value::Boolean(l), Value::Boolean(r)) if op.is_equality() => {
                Value::Boolean((l == r) == (op == InfixOperator::Equal))
            },
            _ => Value::Null,
        }
    }

    /// Integer arithmetic and comparison.
    ///
    /// # Returns
    /// `Value::Error` on overflow or division by zero.
    fn eval_integer_infix(op: InfixOperator, l: i64, r: i64, line: usize) -> Value {
        let overflow = || Value::Error(RuntimeError::Overflow { line });

        match op {
            InfixOperator::Add => l.checked_add(r).map_or_else(overflow, Value::Integer),
            InfixOperator::Sub => l.checked_sub(r).map_or_else(overflow, Value::Integer),
            InfixOperator::Mul => l.checked_mul(r).map_or_else(overflow, Value::Integer),
            InfixOperator::Div => {
                if r == 0 {
                    return Value::Error(RuntimeError::DivisionByZero { line });
                }
                l.checked_div(r).map_or_else(overflow, Value::Integer)
            },
            InfixOperator::Less => Value::Boolean(l < r),
            InfixOperator::Greater => Value::Boolean(l > r),
            InfixOperator::Equal => Value::Boolean(l == r),
            InfixOperator::NotEqual => Value::Boolean(l != r),
        }
    }
}
