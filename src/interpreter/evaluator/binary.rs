use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
    util::num::i64_to_f64_checked,
};

impl Interpreter {
    /// Evaluates a binary operation on two values.
    ///
    /// Only the arithmetic operators carry semantics here; the relational and
    /// logical operators parse but produce `UnsupportedOperator` when
    /// evaluated. Two integer operands stay integer for `+ - * % ^` (with
    /// checked arithmetic), while `/` always produces a real result. Mixed
    /// integer/real operands are promoted to real. A text operand on either
    /// side of an arithmetic operator is an `InvalidOperand` error: there is
    /// no implicit coercion between text and numbers.
    ///
    /// # Parameters
    /// - `op`: The binary operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed result.
    ///
    /// # Example
    /// ```
    /// use gotolang::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Interpreter, value::Value},
    /// };
    ///
    /// let x = Value::Integer(7);
    /// let y = Value::Integer(3);
    ///
    /// let result = Interpreter::eval_binary(BinaryOperator::Mod, &x, &y, 1).unwrap();
    /// assert_eq!(result, Value::Integer(1));
    ///
    /// // Division always produces a real result.
    /// let result = Interpreter::eval_binary(BinaryOperator::Div, &x, &y, 1).unwrap();
    /// assert!(result.is_real());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Pow, Sub};
        use Value::{Integer, Real, Text};

        if !op.is_arithmetic() {
            return Err(RuntimeError::UnsupportedOperator { op: op.to_string(),
                                                           line });
        }

        if let (Text(_), _) | (_, Text(_)) = (left, right) {
            return Err(RuntimeError::InvalidOperand { details: format!("cannot apply '{op}' to {left} and {right}"),
                                                      line });
        }

        match op {
            // Division always produces a real result, even for two integers.
            Div => {
                let l = left.as_real(line)?;
                let r = right.as_real(line)?;

                if r == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(Real(l / r))
            },

            Pow => Self::eval_pow(left, right, line),

            Add | Sub | Mul | Mod => match (left, right) {
                (Integer(a), Integer(b)) => Self::eval_integer_op(op, *a, *b, line),
                _ => {
                    let l = left.as_real(line)?;
                    let r = right.as_real(line)?;

                    Ok(Real(match op {
                                Add => l + r,
                                Sub => l - r,
                                Mul => l * r,
                                Mod => {
                                    if r == 0.0 {
                                        return Err(RuntimeError::DivisionByZero { line });
                                    }
                                    l % r
                                },
                                _ => unreachable!(),
                            }))
                },
            },

            _ => unreachable!("non-arithmetic operators are rejected above"),
        }
    }

    /// Evaluates `+ - * %` on two integers with checked arithmetic.
    ///
    /// Overflow is an error, never a silent wrap. Modulo by zero is checked
    /// before the operation; `i64::MIN % -1` is the one remainder that can
    /// itself overflow, which `checked_rem` covers.
    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Mod, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Mod => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_rem(b)
            },
            _ => unreachable!(),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }

    /// Evaluates exponentiation.
    ///
    /// An integer base raised to a non-negative integer exponent stays
    /// integer, with checked arithmetic. Every other combination (a real on
    /// either side, or a negative exponent) is computed as `powf` on reals.
    fn eval_pow(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        use Value::{Integer, Real};

        match (left, right) {
            (Integer(base), Integer(exp)) if *exp >= 0 => {
                let exp = u32::try_from(*exp).map_err(|_| RuntimeError::Overflow { line })?;
                base.checked_pow(exp)
                    .map(Integer)
                    .ok_or(RuntimeError::Overflow { line })
            },
            (Integer(base), Integer(exp)) => {
                let base = i64_to_f64_checked(*base, RuntimeError::Overflow { line })?;
                let exp = i64_to_f64_checked(*exp, RuntimeError::Overflow { line })?;
                Ok(Real(base.powf(exp)))
            },
            _ => {
                let base = left.as_real(line)?;
                let exp = right.as_real(line)?;
                Ok(Real(base.powf(exp)))
            },
        }
    }
}
