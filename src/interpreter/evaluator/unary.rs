use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: numeric identity for integers and reals.
    /// - `Negate`: numeric negation (checked for integers).
    /// - `Not`: reserved; evaluating it is an `UnsupportedOperator` error.
    ///
    /// Applying `+` or `-` to text is an `InvalidOperand` error.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use gotolang::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Interpreter::eval_unary(UnaryOperator::Plus, &Value::Real(2.5), 1).unwrap();
    /// assert_eq!(v, Value::Real(2.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Plus => match value {
                Value::Integer(_) | Value::Real(_) => Ok(value.clone()),
                Value::Text(s) => {
                    Err(RuntimeError::InvalidOperand { details: format!("'+' is not defined for text \"{s}\""),
                                                       line })
                },
            },

            UnaryOperator::Negate => match value {
                Value::Integer(n) => n.checked_neg()
                                      .map(Value::Integer)
                                      .ok_or(RuntimeError::Overflow { line }),
                Value::Real(r) => Ok(Value::Real(-r)),
                Value::Text(s) => {
                    Err(RuntimeError::InvalidOperand { details: format!("'-' is not defined for text \"{s}\""),
                                                       line })
                },
            },

            UnaryOperator::Not => Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                                          line }),
        }
    }
}
