/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, text literals, identifiers, operators, keywords and delimiters.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source line info.
/// - Handles numeric and text literals, identifiers, and operators.
/// - Discards comments and whitespace, tracking newlines for diagnostics.
/// - Reports the first illegal character as a lexical error.
pub mod lexer;
/// The parser module builds the statement sequence from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the ordered sequence of statements that makes up a program, each wrapping
/// an expression tree. Statement order defines the jump indices that `GOTO`
/// targets address.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Enforces operator precedence and the `;`-terminated statement grammar.
/// - Fails fast on malformed statements with location info.
pub mod parser;
/// The evaluator module executes statements and computes results.
///
/// The evaluator owns the global variable environment and drives the
/// fetch-execute loop over the parsed statement sequence. Executing a `GOTO`
/// yields a new statement index; every other statement advances the program
/// counter by one. The loop halts when the counter leaves the valid range.
///
/// # Responsibilities
/// - Evaluates expression trees, performing all supported operations.
/// - Executes statements, including the computed-jump control transfer.
/// - Reports runtime errors such as unbound variables or division by zero.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during execution: integers,
/// floating-point numbers, and text. It provides explicit conversion rules
/// for arithmetic promotion and for turning a computed jump target into a
/// statement index.
///
/// # Responsibilities
/// - Defines the `Value` enum and its variants.
/// - Implements conversion and classification helpers with line-tagged
///   errors.
/// - Provides the round-tripping textual representation used by `OUTPUT`.
pub mod value;
/// The console module defines the interpreter's input/output boundary.
///
/// The core calls these capabilities instead of touching stdin or stdout
/// directly: one blocking line read per `INPUT` statement, one emitted line
/// per `OUTPUT` statement.
///
/// # Responsibilities
/// - Declares the `Console` trait the evaluator depends on.
/// - Provides the process-console implementation used by the binary.
/// - Provides a scripted in-memory implementation for tests and embedding.
pub mod console;
