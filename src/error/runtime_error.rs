#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to read a variable before any assignment bound it.
    UnboundVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An arithmetic operator was applied to incompatible operand types.
    InvalidOperand {
        /// Details about the operand mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division or modulo by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Integer arithmetic overflowed, or a number was too large to convert.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `GOTO` target did not evaluate to a usable statement index.
    InvalidJumpTarget {
        /// Details about the rejected target value.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A reserved operator with no evaluation semantics was evaluated.
    UnsupportedOperator {
        /// The operator's source spelling.
        op:   String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `INPUT` statement could not obtain a line from the input capability.
    InputFailed {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name, line } => {
                write!(f, "Error on line {line}: Unbound variable '{name}'.")
            },

            Self::InvalidOperand { details, line } => {
                write!(f, "Error on line {line}: Invalid operand: {details}.")
            },

            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),

            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),

            Self::InvalidJumpTarget { details, line } => {
                write!(f, "Error on line {line}: Invalid jump target: {details}.")
            },

            Self::UnsupportedOperator { op, line } => write!(f,
                                                             "Error on line {line}: Operator '{op}' cannot be evaluated."),

            Self::InputFailed { line } => {
                write!(f, "Error on line {line}: Failed to read a line of input.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
