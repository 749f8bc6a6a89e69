//! # gotolang
//!
//! gotolang is an interpreter for a tiny scripting language whose only
//! control-flow primitive is a computed jump: `GOTO <expr>` transfers control
//! to the statement whose index is the numeric value of an arbitrary
//! expression. The language supports variable assignment, arithmetic,
//! interactive input, and output; all branching is arithmetic over statement
//! indices.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        console::Console,
        evaluator::core::Interpreter,
        lexer::{Token, tokenize},
        parser::statement::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Keeps statement/expression dispatch closed and exhaustively matchable.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source lines.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representation, the console boundary and error handling to provide a
/// complete runtime for gotolang programs. It exposes the public API for
/// interpreting source text.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and values.
/// - Provides entry points for parsing and running user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used by the evaluator,
/// such as lossless integer-to-float promotion and the truncating
/// float-to-index conversion applied to jump targets.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
pub mod util;

/// Parses source text into the ordered statement sequence.
///
/// This runs the first two pipeline stages, lexing and parsing, without
/// executing anything. A statement's position in the returned sequence is the
/// index that `GOTO` targets address.
///
/// # Errors
/// Returns a [`ParseError`] for the first illegal character or malformed
/// statement; nothing is silently accepted.
///
/// # Examples
/// ```
/// use gotolang::parse_source;
///
/// let program = parse_source("x = 1; OUTPUT x; GOTO 0;").unwrap();
/// assert_eq!(program.len(), 3);
///
/// assert!(parse_source("x = ;").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens: Vec<(Token, usize)> = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter)
}

/// Parses and runs a program against the given console.
///
/// This is the whole pipeline: lex, parse, then drive the program-counter
/// loop over the parsed statements until the counter leaves the valid range.
/// The variable environment is created here and lives exactly as long as the
/// run.
///
/// # Errors
/// Returns an error if parsing fails or if any statement raises a runtime
/// error. All errors are fatal to the run; there is no recovery or
/// partial-result mode.
///
/// # Examples
/// ```
/// use gotolang::{interpreter::console::MemoryConsole, run_source};
///
/// let mut console = MemoryConsole::new();
/// run_source("a = 3; b = 4; OUTPUT a + b * 2; GOTO 4;", &mut console).unwrap();
/// assert_eq!(console.output(), ["11"]);
///
/// // Reading an unassigned variable is an error.
/// let mut console = MemoryConsole::new();
/// assert!(run_source("OUTPUT ghost;", &mut console).is_err());
/// ```
pub fn run_source(source: &str,
                  console: &mut dyn Console)
                  -> Result<(), Box<dyn std::error::Error>> {
    let program = parse_source(source)?;

    let mut interpreter = Interpreter::new();
    interpreter.run(&program, console)?;

    Ok(())
}
