/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include illegal characters, syntax mistakes, unexpected
/// tokens, and any other issues detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include things like unbound variables, division
/// by zero, invalid operand types, and jump targets that are not convertible
/// to a statement index.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
