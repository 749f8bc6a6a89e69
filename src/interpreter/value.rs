use crate::{
    ast::LiteralValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::{f64_to_i64_trunc, i64_to_f64_checked},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments and the variable environment. Numbers and text share one slot
/// dynamically; conversion rules are explicit at arithmetic and jump-target
/// sites rather than implicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
    /// A text value, produced by string literals and by `INPUT` lines that do
    /// not parse as numbers.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Integer(i) => (*i).into(),
            LiteralValue::Real(r) => (*r).into(),
            LiteralValue::Text(s) => s.clone().into(),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// Accepts `Value::Integer` and `Value::Real`. For integers, conversion
    /// fails if the value is too large to be represented as `f64` exactly.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is real or a safe integer.
    /// - `Err(RuntimeError::InvalidOperand | Overflow)`: If the value is text
    ///   or not representable.
    ///
    /// # Example
    /// ```
    /// use gotolang::interpreter::value::Value;
    ///
    /// let x = Value::Integer(10);
    /// let real = x.as_real(42).unwrap();
    ///
    /// assert_eq!(real, 10.0);
    /// ```
    pub fn as_real(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Real(r) => Ok(*r),
            Self::Integer(n) => Ok(i64_to_f64_checked(*n, RuntimeError::Overflow { line })?),
            Self::Text(s) => {
                Err(RuntimeError::InvalidOperand { details: format!("expected a number, found text \"{s}\""),
                                                   line })
            },
        }
    }

    /// Converts the value to a statement index for a computed jump.
    ///
    /// Integers are used as-is. Finite reals are truncated toward zero, the
    /// same way the program counter would index with `int(...)`. Text and
    /// non-finite reals are rejected.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The statement index.
    /// - `Err(RuntimeError::InvalidJumpTarget)`: If the value cannot address a
    ///   statement.
    ///
    /// # Example
    /// ```
    /// use gotolang::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Integer(3).jump_index(1).unwrap(), 3);
    /// assert_eq!(Value::Real(2.9).jump_index(1).unwrap(), 2);
    ///
    /// let text = Value::Text("start".to_string());
    /// assert!(text.jump_index(1).is_err());
    /// ```
    pub fn jump_index(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            Self::Real(r) => {
                f64_to_i64_trunc(*r, RuntimeError::InvalidJumpTarget { details: format!("{r} is not convertible to a statement index"),
                                                                       line })
            },
            Self::Text(s) => {
                Err(RuntimeError::InvalidJumpTarget { details: format!("text \"{s}\" is not a statement index"),
                                                      line })
            },
        }
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Value::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Real`].
    ///
    /// [`Real`]: Value::Real
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Returns `true` if the value is [`Text`].
    ///
    /// [`Text`]: Value::Text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(..))
    }
}

/// The textual representation round-trips the literal syntax: integers print
/// without a decimal point, reals always print with one, and text prints
/// unquoted.
///
/// # Example
/// ```
/// use gotolang::interpreter::value::Value;
///
/// assert_eq!(Value::Integer(2).to_string(), "2");
/// assert_eq!(Value::Real(2.0).to_string(), "2.0");
/// assert_eq!(Value::Real(0.5).to_string(), "0.5");
/// assert_eq!(Value::Text("hi".to_string()).to_string(), "hi");
/// ```
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => {
                if r.is_finite() && r.fract() == 0.0 {
                    write!(f, "{r:.1}")
                } else {
                    write!(f, "{r}")
                }
            },
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
