/// Core evaluation logic and the program-counter loop.
///
/// Contains the interpreter state, expression evaluation, statement
/// execution, and the fetch-execute loop that drives a program.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic semantics of `+ - * / % ^`, including numeric
/// promotion and the zero and overflow checks.
pub mod binary;

/// Unary operator evaluation.
///
/// Handles numeric identity and negation.
pub mod unary;
