/// Core expression parsing.
///
/// Contains the expression entry point and the shared `ParseResult` alias
/// used by every parsing function.
pub mod core;

/// Binary operator parsing.
///
/// Implements the precedence-climbing levels for all binary operators, from
/// logical OR at the bottom to exponentiation at the top.
pub mod binary;

/// Unary and primary parsing.
///
/// Handles prefix operators and the atomic expression forms: literals,
/// variable references and parenthesized groupings.
pub mod unary;

/// Statement parsing.
///
/// Implements the `;`-terminated statement forms (assignment, `INPUT`,
/// `OUTPUT`, `GOTO`, empty statement) and whole-program parsing.
pub mod statement;
